//! Shared types for the back-office front-end: customer projections,
//! `resource.action` permissions, and the default role catalogue.

/// Brief customer records and their display projections.
pub mod customer;
/// Permission strings and actor permission sets.
pub mod permission;
/// Default role catalogue seeded for every company.
pub mod role;

pub use customer::{BriefCustomer, CustomerId};
pub use permission::{ADMIN_ALL, Permission, PermissionParseError, PermissionSet};
pub use role::{DEFAULT_ROLES, RoleDef, find_role, permissions_for_roles};
