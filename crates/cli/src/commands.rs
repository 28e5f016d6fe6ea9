use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use brigade_config::{ActorSection, Config};
use brigade_directory::{CustomerDirectory, HttpCustomerSearch};
use brigade_navigation::visible_navigation;
use brigade_primitives::{BriefCustomer, DEFAULT_ROLES};
use brigade_typeahead::{CustomerSearch, SelectionObserver, Typeahead};
use tracing::{debug, info};

use crate::cli::SearchArgs;
use crate::render;

/// Prints the menus visible to the actor named on the command line, or to
/// the configured `[actor]` when no flags are given.
pub fn nav(config: &Config, roles: Vec<String>, permissions: Vec<String>) -> Result<()> {
	let actor = if roles.is_empty() && permissions.is_empty() {
		config.actor.clone()
	} else {
		ActorSection { roles, permissions }
	};
	let granted = actor.permission_set().context("resolving actor permissions")?;
	debug!(roles = ?actor.roles, grants = granted.len(), "nav.actor");

	let nav = visible_navigation(|resource, action| Ok::<_, Infallible>(granted.has_permission(resource, action)));
	let primary = nav.primary.context("filtering primary menu")?;
	let secondary = nav.secondary.context("filtering secondary menu")?;
	print!("{}", render::menu_section("Primary", &primary));
	print!("{}", render::menu_section("Secondary", &secondary));
	Ok(())
}

pub fn roles() {
	print!("{}", render::role_table(DEFAULT_ROLES));
}

struct LogSelection;

impl SelectionObserver for LogSelection {
	fn on_select(&mut self, customer: &BriefCustomer) {
		info!(customer = %customer.id, name = %customer.full_name(), "search.selected");
	}

	fn on_clear(&mut self) {
		info!("search.cleared");
	}
}

fn backend(config: &Config, args: &SearchArgs) -> Result<Arc<dyn CustomerSearch>> {
	if let Some(path) = &args.directory {
		let directory = CustomerDirectory::load(path).with_context(|| format!("loading customers from {}", path.display()))?;
		return Ok(Arc::new(directory));
	}
	let base_url = args.api.as_deref().unwrap_or(&config.api.base_url);
	let client = HttpCustomerSearch::new(base_url, config.api.token()).with_context(|| format!("configuring API client for {base_url}"))?;
	debug!(endpoint = %client.endpoint(), "search.backend");
	Ok(Arc::new(client))
}

/// Types each keystroke argument in turn, waits for the resolver to settle,
/// then prints the render model (and the card when `--select` is given).
pub async fn search(config: &Config, args: SearchArgs) -> Result<()> {
	let mut typeahead = Typeahead::with_config(config.typeahead_config(), backend(config, &args)?, LogSelection);
	let pause = Duration::from_millis(args.pause_ms);

	for (i, text) in args.keystrokes.iter().enumerate() {
		if i > 0 && !pause.is_zero() {
			tokio::time::sleep(pause).await;
		}
		typeahead.set_query(text.as_str());
	}
	for event in typeahead.settle().await {
		debug!(?event, "search.event");
	}
	print!("{}", render::typeahead_view(&typeahead.view()));

	if let Some(n) = args.select {
		if !typeahead.select_index(n.get() - 1) {
			bail!("no result #{n} to select");
		}
		println!();
		print!("{}", render::typeahead_view(&typeahead.view()));
	}
	Ok(())
}
