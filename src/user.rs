//! User profile reads and owner-name resolution.
//!
//! User rows are written by the identity resolver; this module only reads
//! them. Display-name resolution is shared by the aggregate view composer
//! so a deleted owner never breaks rendering.

use crate::orm::users;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use std::collections::{HashMap, HashSet};

/// Fallback display name for comments and ratings whose owner record
/// has been removed.
pub static UNKNOWN_OWNER: &str = "Unknown";

/// Returns a user profile by id.
pub async fn get_profile(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Returns a user profile by email address.
pub async fn get_profile_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

/// Returns every user profile, for the admin management screen.
///
/// Rows include email and report_count; the caller must gate this behind
/// an admin check.
pub async fn get_all_profiles(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(db)
        .await
}

/// Resolves a set of user ids to display names in one query.
pub async fn display_names(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    let ids: HashSet<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|u| (u.id, u.username)).collect())
}

/// Looks up a resolved display name, falling back to [`UNKNOWN_OWNER`].
pub fn name_or_unknown(names: &HashMap<i32, String>, user_id: i32) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_OWNER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_or_unknown_falls_back() {
        let mut names = HashMap::new();
        names.insert(1, "ines".to_string());

        assert_eq!(name_or_unknown(&names, 1), "ines");
        assert_eq!(name_or_unknown(&names, 2), "Unknown");
    }
}
