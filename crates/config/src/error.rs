//! Error types for configuration loading.

use std::path::PathBuf;

use brigade_primitives::PermissionParseError;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value is out of range.
	#[error("invalid value for {key}: {reason}")]
	InvalidValue {
		/// Dotted key of the offending value.
		key: &'static str,
		/// Why it was rejected.
		reason: String,
	},

	/// The actor names a role that is not in the default catalogue.
	#[error("unknown role: {0}")]
	UnknownRole(String),

	/// The actor lists a malformed permission.
	#[error(transparent)]
	Permission(#[from] PermissionParseError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
