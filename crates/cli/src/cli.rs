use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brigade")]
#[command(about = "Restaurant back-office tools")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to <config dir>/brigade/config.toml)
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Show the navigation an actor can see
	Nav {
		/// Default role to grant (repeatable)
		#[arg(long = "role", value_name = "ROLE")]
		roles: Vec<String>,
		/// Extra permission as resource.action (repeatable)
		#[arg(long = "permission", value_name = "PERMISSION")]
		permissions: Vec<String>,
	},
	/// List the default roles and their permissions
	Roles,
	/// Feed query texts through the customer typeahead
	Search(SearchArgs),
}

/// Arguments for `brigade search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
	/// Search a JSON customer file instead of the API
	#[arg(long, value_name = "FILE", conflicts_with = "api")]
	pub directory: Option<PathBuf>,

	/// API base URL (overrides the configured one)
	#[arg(long, value_name = "URL")]
	pub api: Option<String>,

	/// Select the N-th result (1-based) once the search settles
	#[arg(long, value_name = "N")]
	pub select: Option<NonZeroUsize>,

	/// Pause between query texts, in milliseconds
	#[arg(long, value_name = "MS", default_value_t = 0)]
	pub pause_ms: u64,

	/// Successive query texts, e.g. `j jo joh`
	#[arg(required = true, value_name = "KEYSTROKES")]
	pub keystrokes: Vec<String>,
}
