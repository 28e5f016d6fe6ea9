//! Brigade back-office command-line tool.
//!
//! `brigade nav` shows the permission-filtered navigation for an actor,
//! `brigade roles` lists the default roles, and `brigade search` drives the
//! customer typeahead against a JSON directory or the back-office API.

mod cli;
mod commands;
mod render;

use anyhow::Context;
use brigade_config::Config;
use clap::Parser;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
	tracing::debug!(?config, "config.resolved");

	match cli.command {
		Command::Nav { roles, permissions } => commands::nav(&config, roles, permissions),
		Command::Roles => {
			commands::roles();
			Ok(())
		}
		Command::Search(args) => commands::search(&config, args).await,
	}
}

/// Installs a stderr subscriber filtered by `BRIGADE_LOG`.
fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("BRIGADE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
