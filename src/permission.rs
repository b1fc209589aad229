//! Authorization policy.
//!
//! Evaluated once per operation at the call edge, so the stores stay
//! purely structural and the cascading-delete logic can be tested
//! without any identity wiring.

use crate::auth::Principal;

/// Owner-or-admin mutation policy.
pub fn can_mutate(principal: &Principal, owner_id: i32) -> bool {
    principal.id == owner_id || principal.is_admin()
}
