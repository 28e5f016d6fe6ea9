use std::convert::Infallible;

use brigade_primitives::{Permission, PermissionSet};
use tracing::trace;

use crate::entry::{MenuEntry, PRIMARY_NAV, SECONDARY_NAV};
use crate::error::NavError;

/// Keeps the entries whose permission `check` grants, preserving order.
///
/// `check` receives the `(resource, action)` halves of each entry's
/// permission, split on the first `.`. The first malformed permission or
/// checker error aborts the pass.
pub fn filter_entries<'a, F, E>(entries: &'a [MenuEntry], mut check: F) -> Result<Vec<&'a MenuEntry>, NavError<E>>
where
	F: FnMut(&str, &str) -> Result<bool, E>,
	E: std::error::Error + 'static,
{
	let mut visible = Vec::with_capacity(entries.len());
	for entry in entries {
		let (resource, action) = Permission::split(entry.permission).map_err(|source| NavError::MalformedPermission {
			title: entry.title,
			source,
		})?;
		let granted = check(resource, action).map_err(|source| NavError::Check {
			permission: entry.permission,
			source,
		})?;
		if granted {
			visible.push(entry);
		}
	}
	trace!(entries = entries.len(), visible = visible.len(), "nav.filter");
	Ok(visible)
}

/// Filters `entries` against an actor's permission set.
pub fn filter_for<'a>(entries: &'a [MenuEntry], permissions: &PermissionSet) -> Result<Vec<&'a MenuEntry>, NavError<Infallible>> {
	filter_entries(entries, |resource, action| Ok(permissions.has_permission(resource, action)))
}

/// Both menus after filtering.
///
/// Each side carries its own result: a failure in one menu leaves the other intact.
#[derive(Debug)]
pub struct Navigation<E>
where
	E: std::error::Error + 'static,
{
	pub primary: Result<Vec<&'static MenuEntry>, NavError<E>>,
	pub secondary: Result<Vec<&'static MenuEntry>, NavError<E>>,
}

/// Filters the built-in primary and secondary menus independently.
pub fn visible_navigation<F, E>(mut check: F) -> Navigation<E>
where
	F: FnMut(&str, &str) -> Result<bool, E>,
	E: std::error::Error + 'static,
{
	Navigation {
		primary: filter_entries(PRIMARY_NAV, &mut check),
		secondary: filter_entries(SECONDARY_NAV, &mut check),
	}
}

#[cfg(test)]
mod tests;
