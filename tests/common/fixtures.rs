//! Test fixtures for creating test data
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use gazette::auth::{Principal, TokenVerifier};
use gazette::orm::{articles, comments, users};
use gazette::user;
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Create a regular user with a derived email.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<users::Model, DbErr> {
    create_user_with_role(db, username, users::Role::User).await
}

/// Create an admin user with a derived email.
pub async fn create_test_admin(
    db: &DatabaseConnection,
    username: &str,
) -> Result<users::Model, DbErr> {
    create_user_with_role(db, username, users::Role::Admin).await
}

async fn create_user_with_role(
    db: &DatabaseConnection,
    username: &str,
    role: users::Role,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@test.com", username)),
        role: Set(role),
        report_count: Set(0),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create an article directly through the entity layer, bypassing input
/// validation, so tests control every field.
pub async fn create_test_article(
    db: &DatabaseConnection,
    author_id: i32,
    title: &str,
) -> Result<articles::Model, DbErr> {
    let now = Utc::now().naive_utc();
    articles::ActiveModel {
        title: Set(title.to_string()),
        preview: Set(format!("A short preview of {}", title)),
        content: Set(format!("The full body of {} for testing purposes.", title)),
        tag: Set(articles::Tag::Gaming),
        image: Set(None),
        author_id: Set(author_id),
        is_deleted: Set(false),
        report_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a comment row directly, for shaping trees without going
/// through the store's validation.
pub async fn create_test_comment(
    db: &DatabaseConnection,
    article_id: i32,
    parent_id: Option<i32>,
    user_id: i32,
    content: &str,
) -> Result<comments::Model, DbErr> {
    comments::ActiveModel {
        article_id: Set(article_id),
        user_id: Set(user_id),
        parent_id: Set(parent_id),
        content: Set(content.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Token verifier stub: the credential is the user's email address.
///
/// Mirrors how the production resolver maps a verified token payload to
/// a user record, without any signing mechanics.
pub struct EmailTokenVerifier {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TokenVerifier for EmailTokenVerifier {
    async fn verify_token(&self, credential: &str) -> Option<Principal> {
        user::get_profile_by_email(&self.db, credential)
            .await
            .ok()
            .flatten()
            .map(|u| Principal::from(&u))
    }
}
