//! Comment tree store.
//!
//! Owns comment rows, their parent/child linkage, and cascading deletion.
//! Ownership checks on deletion happen at the call edge (see
//! [`crate::permission`]); the store itself is purely structural so the
//! traversal logic stays testable without identity wiring.

use crate::app_config::get_config;
use crate::article;
use crate::error::{Error, Resource};
use crate::orm::comments;
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use std::collections::HashSet;

fn content_length_valid(content: &str) -> bool {
    let length = content.chars().count();
    (1..=get_config().limits.comment_max_length).contains(&length)
}

/// Adds a comment to a live article and returns its id.
///
/// A supplied parent must already exist and belong to the same article;
/// nothing is inserted otherwise. Parentage is only checked at creation
/// time - the parent may be deleted later.
pub async fn add_comment(
    db: &DatabaseConnection,
    article_id: i32,
    parent_id: Option<i32>,
    user_id: i32,
    content: &str,
) -> Result<i32, Error> {
    if !content_length_valid(content) {
        return Err(Error::InvalidInput(format!(
            "Comment must be 1-{} characters long.",
            get_config().limits.comment_max_length
        )));
    }

    if article::fetch_article(db, article_id).await?.is_none() {
        return Err(Error::NotFound(Resource::Article));
    }

    if let Some(parent_id) = parent_id {
        match comments::Entity::find_by_id(parent_id).one(db).await? {
            Some(parent) if parent.article_id == article_id => {}
            _ => return Err(Error::NotFound(Resource::Comment)),
        }
    }

    let comment = comments::ActiveModel {
        article_id: Set(article_id),
        user_id: Set(user_id),
        parent_id: Set(parent_id),
        content: Set(content.to_owned()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Error::Store)?;

    Ok(comment.id)
}

/// Returns every comment for an article, flat, in insertion order.
///
/// Tree reconstruction is the view composer's job. The ordering is
/// stable across repeated calls.
pub async fn get_thread(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<Vec<comments::Model>, DbErr> {
    comments::Entity::find()
        .filter(comments::Column::ArticleId.eq(article_id))
        .order_by_asc(comments::Column::Id)
        .all(db)
        .await
}

/// Rewrites a comment's content.
///
/// Returns `Ok(false)` - without surfacing a reason - when the content
/// length is invalid, the comment is missing, or `user_id` is not the
/// stored owner. Ownership is exact id equality; admins go through the
/// same gate as everyone else here. A no-op edit still succeeds.
pub async fn edit_comment(
    db: &DatabaseConnection,
    comment_id: i32,
    user_id: i32,
    content: &str,
) -> Result<bool, DbErr> {
    if !content_length_valid(content) {
        return Ok(false);
    }

    let comment = match comments::Entity::find_by_id(comment_id).one(db).await? {
        Some(comment) => comment,
        None => return Ok(false),
    };

    if comment.user_id != user_id {
        return Ok(false);
    }

    if comment.content == content {
        return Ok(true);
    }

    let mut active: comments::ActiveModel = comment.into();
    active.content = Set(content.to_owned());
    active.update(db).await?;

    Ok(true)
}

/// Deletes a comment and every transitive descendant.
///
/// Descendants are collected breadth-first over the parent_id relation:
/// seed with the target id, then repeatedly gather all comments whose
/// parent is in the frontier until a pass adds nothing new. The
/// collection phase is read-only; deletion happens in one batch
/// afterwards. Children attached to an already-visited node mid-traversal
/// may survive (best-effort snapshot), but unrelated rows are never
/// touched and no id is deleted twice.
///
/// Deleting a nonexistent id is not an error; the result is the number
/// of rows removed.
pub async fn delete_comment_tree(
    db: &DatabaseConnection,
    comment_id: i32,
) -> Result<u64, DbErr> {
    let mut seen: HashSet<i32> = HashSet::new();
    seen.insert(comment_id);

    let mut frontier = vec![comment_id];

    while !frontier.is_empty() {
        let children = comments::Entity::find()
            .filter(comments::Column::ParentId.is_in(frontier))
            .all(db)
            .await?;

        // The seen-set guards against double-visits if the data ever
        // contains a parent cycle.
        frontier = children
            .into_iter()
            .map(|c| c.id)
            .filter(|id| seen.insert(*id))
            .collect();
    }

    let result = comments::Entity::delete_many()
        .filter(comments::Column::Id.is_in(seen))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        log::info!(
            "Deleted comment {} and {} descendant(s)",
            comment_id,
            result.rows_affected - 1
        );
    }

    Ok(result.rows_affected)
}
