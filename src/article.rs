//! Article catalog operations.
//!
//! Articles are authored by admins; deletion is a soft flag so the row
//! stays addressable by id for audit while disappearing from listings
//! and aggregate reads.

use crate::app_config::get_config;
use crate::error::{Error, Resource};
use crate::orm::articles;
use chrono::Utc;
use sea_orm::{entity::*, query::*, sea_query::Expr, DatabaseConnection, DbErr, FromQueryResult};
use serde::Serialize;
use validator::Validate;

/// Input for a new article.
#[derive(Debug, Validate)]
pub struct NewArticle {
    #[validate(length(min = 10, max = 64, message = "Title must be 10-64 characters long."))]
    pub title: String,
    #[validate(length(min = 20, max = 160, message = "Preview must be 20-160 characters long."))]
    pub preview: String,
    #[validate(length(min = 50, message = "Content must be at least 50 characters long."))]
    pub content: String,
    pub tag: articles::Tag,
    /// Raw image bytes; the edge handles transport encoding
    pub image: Option<Vec<u8>>,
}

/// Partial update; only supplied fields are written.
#[derive(Debug, Default)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub preview: Option<String>,
    pub content: Option<String>,
    pub tag: Option<articles::Tag>,
    pub image: Option<Vec<u8>>,
}

fn check_image_size(image: &[u8]) -> Result<(), Error> {
    let max = get_config().limits.image_max_bytes;
    if image.len() > max {
        return Err(Error::InvalidInput(format!(
            "Image exceeds the {} byte limit.",
            max
        )));
    }
    Ok(())
}

/// Creates an article and returns its id.
pub async fn add_article(
    db: &DatabaseConnection,
    author_id: i32,
    article: NewArticle,
) -> Result<i32, Error> {
    article
        .validate()
        .map_err(|e| Error::InvalidInput(e.to_string()))?;

    if let Some(image) = &article.image {
        check_image_size(image)?;
    }

    let now = Utc::now().naive_utc();
    let model = articles::ActiveModel {
        title: Set(article.title),
        preview: Set(article.preview),
        content: Set(article.content),
        tag: Set(article.tag),
        image: Set(article.image),
        author_id: Set(author_id),
        is_deleted: Set(false),
        report_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Error::Store)?;

    log::info!("Article {} added by user {}", model.id, author_id);

    Ok(model.id)
}

/// Applies a partial update to a live article.
///
/// Returns `Ok(false)` when the article is missing or soft-deleted.
pub async fn edit_article(
    db: &DatabaseConnection,
    article_id: i32,
    update: ArticleUpdate,
) -> Result<bool, Error> {
    if let Some(image) = &update.image {
        check_image_size(image)?;
    }

    let mut query = articles::Entity::update_many()
        .col_expr(
            articles::Column::UpdatedAt,
            Expr::value(Utc::now().naive_utc()),
        )
        .filter(articles::Column::Id.eq(article_id))
        .filter(articles::Column::IsDeleted.eq(false));

    if let Some(title) = update.title {
        query = query.col_expr(articles::Column::Title, Expr::value(title));
    }
    if let Some(preview) = update.preview {
        query = query.col_expr(articles::Column::Preview, Expr::value(preview));
    }
    if let Some(content) = update.content {
        query = query.col_expr(articles::Column::Content, Expr::value(content));
    }
    if let Some(tag) = update.tag {
        query = query.col_expr(articles::Column::Tag, Expr::value(tag));
    }
    if let Some(image) = update.image {
        query = query.col_expr(articles::Column::Image, Expr::value(Some(image)));
    }

    let result = query.exec(db).await.map_err(Error::Store)?;

    Ok(result.rows_affected > 0)
}

/// Soft-deletes an article.
///
/// Returns `Ok(false)` when no live article matched.
pub async fn delete_article(db: &DatabaseConnection, article_id: i32) -> Result<bool, DbErr> {
    let result = articles::Entity::update_many()
        .col_expr(articles::Column::IsDeleted, Expr::value(true))
        .filter(articles::Column::Id.eq(article_id))
        .filter(articles::Column::IsDeleted.eq(false))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        log::info!("Article {} soft-deleted", article_id);
    }

    Ok(result.rows_affected > 0)
}

/// Fetches a live article; soft-deleted rows are excluded.
pub async fn fetch_article(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Option<articles::Model>, DbErr> {
    articles::Entity::find_by_id(article_id)
        .filter(articles::Column::IsDeleted.eq(false))
        .one(db)
        .await
}

/// Fetches an article regardless of its soft-delete flag, for audit reads.
pub async fn fetch_article_any(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Option<articles::Model>, DbErr> {
    articles::Entity::find_by_id(article_id).one(db).await
}

/// Main-page listing row.
#[derive(Debug, Serialize, FromQueryResult)]
pub struct ArticleSummary {
    pub id: i32,
    pub title: String,
    pub preview: String,
    pub tag: articles::Tag,
    pub has_image: bool,
}

/// Lists every live article for the main page, oldest first.
pub async fn list_articles(db: &DatabaseConnection) -> Result<Vec<ArticleSummary>, DbErr> {
    articles::Entity::find()
        .select_only()
        .column(articles::Column::Id)
        .column(articles::Column::Title)
        .column(articles::Column::Preview)
        .column(articles::Column::Tag)
        .column_as(Expr::cust("image IS NOT NULL"), "has_image")
        .filter(articles::Column::IsDeleted.eq(false))
        .order_by_asc(articles::Column::Id)
        .into_model::<ArticleSummary>()
        .all(db)
        .await
}
