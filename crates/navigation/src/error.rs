use brigade_primitives::PermissionParseError;
use thiserror::Error;

/// Errors raised while filtering a menu.
///
/// `E` is the permission checker's own error type.
#[derive(Debug, Error)]
pub enum NavError<E>
where
	E: std::error::Error + 'static,
{
	/// The entry's permission string is not `resource.action`.
	#[error("menu entry {title:?} has a malformed permission")]
	MalformedPermission {
		/// Title of the offending entry.
		title: &'static str,
		/// Parse failure detail.
		#[source]
		source: PermissionParseError,
	},

	/// The permission checker failed for an entry.
	#[error("permission check for {permission:?} failed")]
	Check {
		/// Permission being checked.
		permission: &'static str,
		/// The checker's error.
		#[source]
		source: E,
	},
}
