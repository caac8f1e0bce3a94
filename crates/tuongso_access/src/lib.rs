//! Role-based permission lookup.
//!
//! A fixed map from role to permission set with union-membership checks.
//! There is no role hierarchy: an Admin does not inherit from User, each
//! role simply lists everything it grants.

pub mod error;
pub mod permission;
pub mod role;
pub mod role_set;

pub use error::AccessError;
pub use permission::{ALL_PERMISSIONS, Permission};
pub use role::{ALL_ROLES, Role, role_permissions};
pub use role_set::{ADMIN_REDIRECT_PATH, DEFAULT_REDIRECT_PATH, RoleSet, has_permission};
