//! Permission-filtered navigation.
//!
//! The back office has two fixed, ordered menus: [`PRIMARY_NAV`] and
//! [`SECONDARY_NAV`]. Each [`MenuEntry`] names the `resource.action`
//! permission an actor needs to see it. [`filter_entries`] keeps the entries
//! the supplied checker grants, in source order, and is recomputed on every
//! render pass.
//!
//! The permission checker is an explicit argument rather than ambient state,
//! so the filter stays pure. Checker failures and malformed permission
//! strings are configuration errors and propagate as [`NavError`].

mod entry;
mod error;
mod filter;

pub use entry::{MenuEntry, PRIMARY_NAV, SECONDARY_NAV};
pub use error::NavError;
pub use filter::{Navigation, filter_entries, filter_for, visible_navigation};
