//! Shared database connection pool.

use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect the global pool. Call once at process startup.
pub async fn init_db(database_url: String) {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let pool = Database::connect(options)
        .await
        .expect("Failed to connect to database");

    DB_POOL.set(pool).expect("DB pool already initialized");

    log::info!("Database pool initialized");
}

/// Get the global pool. Panics if [`init_db`] has not run.
pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL.get().expect("DB pool not initialized")
}
