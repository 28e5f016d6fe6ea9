//! Configuration system for the brigade tools.
//!
//! Configuration is written in TOML. Every section and key is optional;
//! missing values fall back to the defaults shown here:
//!
//! ```toml
//! [typeahead]
//! debounce_ms = 300
//! min_query_chars = 2
//!
//! [api]
//! base_url = "http://localhost:8000"
//! token_env = "BRIGADE_TOKEN"
//!
//! [actor]
//! roles = ["host"]
//! permissions = ["analytics.read"]
//! ```
//!
//! # Configuration Files
//!
//! An explicit `--config` path must exist. Otherwise the tools look for
//! `$XDG_CONFIG_HOME/brigade/config.toml` (or the platform equivalent) and
//! use defaults when it is absent.
//!
//! Unknown keys are rejected so typos surface at startup.

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use brigade_primitives::{Permission, PermissionSet, permissions_for_roles};
use brigade_typeahead::TypeaheadConfig;
use serde::Deserialize;
use tracing::debug;

pub use error::{ConfigError, Result};

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub typeahead: TypeaheadSection,
	pub api: ApiSection,
	pub actor: ActorSection,
}

/// `[typeahead]` tunables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeaheadSection {
	/// Quiet period after the last keystroke, in milliseconds.
	pub debounce_ms: u64,
	/// Minimum query length before searching.
	pub min_query_chars: usize,
}

impl Default for TypeaheadSection {
	fn default() -> Self {
		let defaults = TypeaheadConfig::default();
		Self {
			debounce_ms: u64::try_from(defaults.debounce.as_millis()).unwrap_or(u64::MAX),
			min_query_chars: defaults.min_chars,
		}
	}
}

/// `[api]` connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSection {
	/// Back-office API base URL.
	pub base_url: String,
	/// Environment variable holding the bearer token.
	pub token_env: String,
}

impl Default for ApiSection {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8000".to_string(),
			token_env: "BRIGADE_TOKEN".to_string(),
		}
	}
}

impl ApiSection {
	/// Reads the bearer token from the configured environment variable.
	pub fn token(&self) -> Option<String> {
		std::env::var(&self.token_env).ok().filter(|t| !t.is_empty())
	}
}

/// `[actor]` identity used for navigation filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorSection {
	/// Default role names.
	pub roles: Vec<String>,
	/// Extra `resource.action` grants.
	pub permissions: Vec<String>,
}

impl ActorSection {
	/// Merges role grants and explicit permissions.
	pub fn permission_set(&self) -> Result<PermissionSet> {
		let mut set = permissions_for_roles(self.roles.iter().map(String::as_str))
			.map_err(|name| ConfigError::UnknownRole(name.to_string()))?;
		for raw in &self.permissions {
			let permission: Permission = raw.parse()?;
			set.grant(permission.to_string());
		}
		Ok(set)
	}
}

impl Config {
	/// Parses and validates a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses the file at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		debug!(path = %path.display(), "config.load");
		Ok(config)
	}

	/// Loads `explicit` if given, else the default file if it exists, else defaults.
	pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		match Self::default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	/// Platform config location: `<config_dir>/brigade/config.toml`.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("brigade").join("config.toml"))
	}

	/// Resolver tunables derived from `[typeahead]`.
	pub fn typeahead_config(&self) -> TypeaheadConfig {
		TypeaheadConfig {
			debounce: Duration::from_millis(self.typeahead.debounce_ms),
			min_chars: self.typeahead.min_query_chars,
		}
	}

	fn validate(&self) -> Result<()> {
		if self.typeahead.min_query_chars == 0 {
			return Err(ConfigError::InvalidValue {
				key: "typeahead.min_query_chars",
				reason: "must be at least 1".to_string(),
			});
		}
		if self.api.base_url.trim().is_empty() {
			return Err(ConfigError::InvalidValue {
				key: "api.base_url",
				reason: "must not be empty".to_string(),
			});
		}
		self.actor.permission_set().map(|_| ())
	}
}
