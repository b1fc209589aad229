//! SeaORM entities for the gazette schema. See schema.sql for the DDL.

pub mod article_reports;
pub mod articles;
pub mod comments;
pub mod ratings;
pub mod user_reports;
pub mod users;
