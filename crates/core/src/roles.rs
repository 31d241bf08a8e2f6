//! Well-known role name constants.
//!
//! These must match the `x-user-role` values injected by the upstream
//! auth gateway.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_RESIDENT: &str = "resident";
