//! SeaORM Entity for articles table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog tag matching the articles.tag column
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Tag {
    #[sea_orm(string_value = "office")]
    Office,
    #[sea_orm(string_value = "budget")]
    Budget,
    #[sea_orm(string_value = "gaming")]
    Gaming,
    #[sea_orm(string_value = "flagship")]
    Flagship,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub preview: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub tag: Tag,
    /// Raw image bytes; transport encoding is the edge's concern
    pub image: Option<Vec<u8>>,
    pub author_id: i32,
    /// Soft-delete flag; deleted articles stay addressable by id for audit
    pub is_deleted: bool,
    pub report_count: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::article_reports::Entity")]
    Reports,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::article_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
