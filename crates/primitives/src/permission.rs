use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wildcard permission that grants every `resource.action` pair.
pub const ADMIN_ALL: &str = "admin.all";

/// Errors produced when parsing a `resource.action` permission string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionParseError {
	/// The string has no `.` separator.
	#[error("permission {0:?} is missing the '.' between resource and action")]
	MissingSeparator(String),
	/// One side of the separator is empty.
	#[error("permission {0:?} has an empty resource or action")]
	EmptyPart(String),
}

/// A `resource.action` pair.
///
/// Parsing splits on the *first* `.`, so `reports.export.csv` yields resource
/// `reports` and action `export.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permission {
	resource: String,
	action: String,
}

impl Permission {
	pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
		Self {
			resource: resource.into(),
			action: action.into(),
		}
	}

	pub fn resource(&self) -> &str {
		&self.resource
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	/// Splits `raw` on the first `.` without allocating.
	pub fn split(raw: &str) -> Result<(&str, &str), PermissionParseError> {
		let (resource, action) = raw
			.split_once('.')
			.ok_or_else(|| PermissionParseError::MissingSeparator(raw.to_string()))?;
		if resource.is_empty() || action.is_empty() {
			return Err(PermissionParseError::EmptyPart(raw.to_string()));
		}
		Ok((resource, action))
	}
}

impl FromStr for Permission {
	type Err = PermissionParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (resource, action) = Self::split(s)?;
		Ok(Self::new(resource, action))
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.resource, self.action)
	}
}

/// The flattened permissions of an authenticated actor.
///
/// Stored as raw `resource.action` keys, exactly as the backend reports them
/// after merging every role the actor holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
	keys: BTreeSet<String>,
}

impl PermissionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a permission key. Returns `false` if it was already present.
	pub fn grant(&mut self, key: impl Into<String>) -> bool {
		self.keys.insert(key.into())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.keys.contains(key)
	}

	pub fn is_admin(&self) -> bool {
		self.contains(ADMIN_ALL)
	}

	/// True when the actor holds `resource.action` or the admin wildcard.
	pub fn has_permission(&self, resource: &str, action: &str) -> bool {
		self.is_admin() || self.keys.contains(&format!("{resource}.{action}"))
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			keys: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl<S: Into<String>> Extend<S> for PermissionSet {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		self.keys.extend(iter.into_iter().map(Into::into));
	}
}
