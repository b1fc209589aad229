//! Crate-wide error type.
//!
//! Every operation reports failures through [`Error`]; storage failures
//! are wrapped so backend-specific errors never reach callers directly.

use sea_orm::DbErr;

/// The kind of record an operation failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Article,
    Comment,
    Rating,
    User,
}

impl Resource {
    fn name(&self) -> &'static str {
        match self {
            Resource::Article => "article",
            Resource::Comment => "comment",
            Resource::Rating => "rating",
            Resource::User => "user",
        }
    }
}

/// Operation errors.
#[derive(Debug)]
pub enum Error {
    /// Record absent or soft-deleted
    NotFound(Resource),
    /// Bad or expired credential
    Unauthorized,
    /// Authenticated but not permitted
    Forbidden,
    /// Length/range/format violation
    InvalidInput(String),
    /// A rating already exists for this (article, user) pair
    AlreadyRated,
    /// A user attempted to report themselves
    SelfReport,
    /// Underlying database failure
    Store(DbErr),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(r) => write!(f, "{} not found", r.name()),
            Error::Unauthorized => write!(f, "invalid credential"),
            Error::Forbidden => write!(f, "insufficient permission"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::AlreadyRated => write!(f, "already rated"),
            Error::SelfReport => write!(f, "cannot report yourself"),
            Error::Store(e) => write!(f, "store unavailable: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        Error::Store(e)
    }
}
