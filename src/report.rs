//! Report ledger.
//!
//! Abuse reports are append-only. Each insert and its denormalized
//! counter bump run in one store transaction, so readers never observe a
//! report without its count (or the reverse).

use crate::article;
use crate::error::{Error, Resource};
use crate::orm::{article_reports, articles, user_reports, users};
use crate::user;
use chrono::Utc;
use sea_orm::{entity::*, query::*, sea_query::Expr, DatabaseConnection, TransactionTrait};

/// Files a report against an article and returns the report id.
///
/// Soft-deleted articles remain reportable - moderation outlives a
/// takedown.
pub async fn report_article(
    db: &DatabaseConnection,
    article_id: i32,
    description: &str,
) -> Result<i32, Error> {
    if description.is_empty() {
        return Err(Error::InvalidInput(
            "Report description must not be empty.".to_string(),
        ));
    }

    if article::fetch_article_any(db, article_id).await?.is_none() {
        return Err(Error::NotFound(Resource::Article));
    }

    let txn = db.begin().await.map_err(Error::Store)?;

    let report = article_reports::ActiveModel {
        article_id: Set(article_id),
        description: Set(description.to_owned()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(Error::Store)?;

    articles::Entity::update_many()
        .col_expr(
            articles::Column::ReportCount,
            Expr::col(articles::Column::ReportCount).add(1),
        )
        .filter(articles::Column::Id.eq(article_id))
        .exec(&txn)
        .await
        .map_err(Error::Store)?;

    txn.commit().await.map_err(Error::Store)?;

    log::info!("Article {} reported (report {})", article_id, report.id);

    Ok(report.id)
}

/// Files a report against a user and returns the report id.
///
/// Self-reports are rejected before anything is written.
pub async fn report_user(
    db: &DatabaseConnection,
    reporter_id: i32,
    reported_user_id: i32,
    description: &str,
) -> Result<i32, Error> {
    if description.is_empty() {
        return Err(Error::InvalidInput(
            "Report description must not be empty.".to_string(),
        ));
    }

    if reporter_id == reported_user_id {
        return Err(Error::SelfReport);
    }

    if user::get_profile(db, reported_user_id).await?.is_none() {
        return Err(Error::NotFound(Resource::User));
    }

    let txn = db.begin().await.map_err(Error::Store)?;

    let report = user_reports::ActiveModel {
        reporter_id: Set(reporter_id),
        reported_user_id: Set(reported_user_id),
        description: Set(description.to_owned()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(Error::Store)?;

    users::Entity::update_many()
        .col_expr(
            users::Column::ReportCount,
            Expr::col(users::Column::ReportCount).add(1),
        )
        .filter(users::Column::Id.eq(reported_user_id))
        .exec(&txn)
        .await
        .map_err(Error::Store)?;

    txn.commit().await.map_err(Error::Store)?;

    log::info!(
        "User {} reported by user {} (report {})",
        reported_user_id,
        reporter_id,
        report.id
    );

    Ok(report.id)
}

/// Returns every report filed against an article, oldest first.
pub async fn get_reports_for_article(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Vec<article_reports::Model>, sea_orm::DbErr> {
    article_reports::Entity::find()
        .filter(article_reports::Column::ArticleId.eq(article_id))
        .order_by_asc(article_reports::Column::Id)
        .all(db)
        .await
}

/// Returns every report filed against a user, oldest first.
pub async fn get_reports_for_user(
    db: &DatabaseConnection,
    reported_user_id: i32,
) -> Result<Vec<user_reports::Model>, sea_orm::DbErr> {
    user_reports::Entity::find()
        .filter(user_reports::Column::ReportedUserId.eq(reported_user_id))
        .order_by_asc(user_reports::Column::Id)
        .all(db)
        .await
}
