//! Aggregate article view composition.
//!
//! One consistent, role-projected read of an article: body, resolved
//! comments, resolved ratings, and - for admins only - the report list.
//! Mutating callers re-invoke this after their write; nothing here is
//! cached, so every composition reflects the latest committed state.

use crate::auth::Principal;
use crate::error::{Error, Resource};
use crate::orm::articles;
use crate::{article, comment, rating, report, user};
use futures::try_join;
use sea_orm::DatabaseConnection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub parent_id: Option<i32>,
    /// Resolved owner display name, `"Unknown"` when the owner is gone
    pub owner: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingView {
    pub id: i32,
    pub owner: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub id: i32,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
}

/// The composed read model for one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    pub article_id: i32,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub tag: articles::Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    pub comments: Vec<CommentView>,
    pub ratings: Vec<RatingView>,
    /// Present for admin principals only. Absent - not empty - for
    /// everyone else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<ReportView>>,
}

/// Assembles the full read model for a live article as seen by `principal`.
pub async fn compose_article_view(
    db: &DatabaseConnection,
    article_id: i32,
    principal: &Principal,
) -> Result<ArticleView, Error> {
    let article = article::fetch_article(db, article_id)
        .await?
        .ok_or(Error::NotFound(Resource::Article))?;

    let (comment_rows, rating_rows) = try_join!(
        comment::get_thread(db, article_id),
        rating::get_ratings_for_article(db, article_id),
    )?;

    // One batched lookup covers both owner sets; missing rows fall back
    // to the literal "Unknown" so owner deletion never breaks rendering.
    let owner_ids = comment_rows
        .iter()
        .map(|c| c.user_id)
        .chain(rating_rows.iter().map(|r| r.user_id));
    let names = user::display_names(db, owner_ids.collect::<Vec<_>>()).await?;

    let comments = comment_rows
        .into_iter()
        .map(|c| CommentView {
            id: c.id,
            parent_id: c.parent_id,
            owner: user::name_or_unknown(&names, c.user_id),
            content: c.content,
        })
        .collect();

    let ratings = rating_rows
        .into_iter()
        .map(|r| RatingView {
            id: r.id,
            owner: user::name_or_unknown(&names, r.user_id),
            value: r.value,
        })
        .collect();

    let reports = if principal.is_admin() {
        let rows = report::get_reports_for_article(db, article_id).await?;
        Some(
            rows.into_iter()
                .map(|r| ReportView {
                    id: r.id,
                    description: r.description,
                    created_at: r.created_at,
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(ArticleView {
        article_id: article.id,
        title: article.title,
        preview: article.preview,
        content: article.content,
        tag: article.tag,
        image: article.image,
        comments,
        ratings,
        reports,
    })
}
