//! Authentication and authorization extractors.
//!
//! Authentication itself is owned by the upstream gateway; it forwards
//! the resolved principal as `x-user-id` / `x-user-role` headers.
//!
//! - [`auth::AuthUser`] -- Extracts the forwarded principal.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireAuth`] -- Requires any authenticated principal.

pub mod auth;
pub mod rbac;
