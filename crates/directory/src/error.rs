use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a search capability.
#[derive(Debug, Error)]
pub enum DirectoryError {
	/// Error reading a directory file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Directory file is not a JSON array of customer records.
	#[error("invalid customer directory: {0}")]
	Json(#[from] serde_json::Error),

	/// API base URL could not be parsed or joined.
	#[error("invalid API base URL: {0}")]
	Url(#[from] url::ParseError),

	/// HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	Client(#[from] reqwest::Error),
}
