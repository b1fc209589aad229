//! Identity resolver seam.
//!
//! The core never inspects session credentials itself. An embedding
//! process supplies a [`TokenVerifier`] that turns an opaque credential
//! into a verified [`Principal`]; everything downstream keys off the
//! principal's id and role.

use crate::orm::users;
use async_trait::async_trait;

pub use crate::orm::users::Role;

/// The authenticated actor making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&users::Model> for Principal {
    fn from(user: &users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

/// Credential verification contract.
///
/// `None` means the caller must be treated as unauthenticated.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, credential: &str) -> Option<Principal>;
}
