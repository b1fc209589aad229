//! Test database setup and management
#![allow(dead_code)]

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// DDL mirroring schema.sql, in SQLite dialect.
///
/// Executed statement by statement; sqlx prepares one statement at a time.
const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        role TEXT NOT NULL DEFAULT 'user',
        report_count INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        preview TEXT NOT NULL,
        content TEXT NOT NULL,
        tag TEXT NOT NULL,
        image BLOB,
        author_id INTEGER NOT NULL,
        is_deleted BOOLEAN NOT NULL DEFAULT 0,
        report_count INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        article_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        parent_id INTEGER,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX idx_comments_article ON comments (article_id)",
    "CREATE INDEX idx_comments_parent ON comments (parent_id)",
    "CREATE TABLE ratings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        article_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        value INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        CONSTRAINT uq_ratings_article_user UNIQUE (article_id, user_id)
    )",
    "CREATE TABLE article_reports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        article_id INTEGER NOT NULL,
        description TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX idx_article_reports_article ON article_reports (article_id)",
    "CREATE TABLE user_reports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        reporter_id INTEGER NOT NULL,
        reported_user_id INTEGER NOT NULL,
        description TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX idx_user_reports_reported ON user_reports (reported_user_id)",
];

/// Connects a fresh in-memory SQLite database with the full schema.
///
/// Every in-memory connection is its own database, so the pool is pinned
/// to a single connection.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;

    for ddl in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            ddl.to_string(),
        ))
        .await?;
    }

    Ok(db)
}
