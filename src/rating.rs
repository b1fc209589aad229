//! Rating ledger.
//!
//! At most one rating exists per (article, user) pair. The pre-insert
//! existence check reports the common case; the compound unique index in
//! schema.sql backstops the window between check and insert, so two
//! concurrent first-time raters cannot both land a row.

use crate::article;
use crate::error::{Error, Resource};
use crate::orm::ratings;
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

/// Lowest accepted star value.
pub const VALUE_MIN: i32 = 1;
/// Highest accepted star value.
pub const VALUE_MAX: i32 = 5;

fn value_valid(value: i32) -> bool {
    (VALUE_MIN..=VALUE_MAX).contains(&value)
}

/// Returns the rating a user has placed on an article, if any.
pub async fn get_rating_by_user(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
) -> Result<Option<ratings::Model>, DbErr> {
    ratings::Entity::find()
        .filter(ratings::Column::ArticleId.eq(article_id))
        .filter(ratings::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Rates a live article once per user; returns the new rating id.
pub async fn add_rating(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
    value: i32,
) -> Result<i32, Error> {
    if !value_valid(value) {
        return Err(Error::InvalidInput(format!(
            "Rating must be between {} and {}.",
            VALUE_MIN, VALUE_MAX
        )));
    }

    if article::fetch_article(db, article_id).await?.is_none() {
        return Err(Error::NotFound(Resource::Article));
    }

    if get_rating_by_user(db, article_id, user_id).await?.is_some() {
        return Err(Error::AlreadyRated);
    }

    let insert = ratings::ActiveModel {
        article_id: Set(article_id),
        user_id: Set(user_id),
        value: Set(value),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await;

    match insert {
        Ok(rating) => Ok(rating.id),
        Err(e) => {
            // A failed insert where the pair now exists means a concurrent
            // writer won the race against the unique index.
            if get_rating_by_user(db, article_id, user_id).await?.is_some() {
                Err(Error::AlreadyRated)
            } else {
                Err(Error::Store(e))
            }
        }
    }
}

/// Changes the value of an existing rating.
///
/// Returns `Ok(false)` when the rating is missing, the caller is not the
/// original owner, or the value is out of range. Writing the current
/// value again still succeeds. Ratings are never deleted.
pub async fn update_rating(
    db: &DatabaseConnection,
    rating_id: i32,
    user_id: i32,
    value: i32,
) -> Result<bool, DbErr> {
    if !value_valid(value) {
        return Ok(false);
    }

    let rating = match ratings::Entity::find_by_id(rating_id).one(db).await? {
        Some(rating) => rating,
        None => return Ok(false),
    };

    if rating.user_id != user_id {
        return Ok(false);
    }

    if rating.value == value {
        return Ok(true);
    }

    let mut active: ratings::ActiveModel = rating.into();
    active.value = Set(value);
    active.update(db).await?;

    Ok(true)
}

/// Returns every rating for an article in insertion order.
pub async fn get_ratings_for_article(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Vec<ratings::Model>, DbErr> {
    ratings::Entity::find()
        .filter(ratings::Column::ArticleId.eq(article_id))
        .order_by_asc(ratings::Column::Id)
        .all(db)
        .await
}
