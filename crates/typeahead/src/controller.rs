//! Debounce scheduling, generation tracking, and event application.

use std::sync::Arc;

use brigade_primitives::BriefCustomer;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::search::{CustomerSearch, SearchError, SelectionObserver};
use crate::state::{Phase, QueryState, TypeaheadConfig};

/// Message pushed from a search task back to its resolver.
#[derive(Debug)]
enum SearchMsg {
	Cancelled { generation: u64 },
	Started { generation: u64 },
	Settled {
		generation: u64,
		outcome: Result<Vec<BriefCustomer>, SearchError>,
	},
}

/// Report of one search-task event after the resolver applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadEvent {
	/// The debounce timer was cancelled before it fired.
	Cancelled { generation: u64 },
	/// The debounce timer fired and the search call was issued.
	Started { generation: u64 },
	/// The current search settled; its results are now shown.
	Applied { generation: u64, count: usize },
	/// The current search failed and was applied as an empty result set.
	Failed { generation: u64 },
	/// A superseded search settled and was discarded.
	Stale { generation: u64 },
}

struct PendingTimer {
	generation: u64,
	cancel: CancellationToken,
}

/// Customer typeahead resolver.
///
/// All methods must be called from within a tokio runtime; scheduling a
/// search spawns a task.
pub struct Typeahead {
	config: TypeaheadConfig,
	search: Arc<dyn CustomerSearch>,
	observer: Box<dyn SelectionObserver>,
	pub(crate) state: QueryState,
	/// Generation of the most recent query, selection, or clear.
	generation: u64,
	/// Generation whose settlement produced the current results.
	settled_generation: Option<u64>,
	pending: Option<PendingTimer>,
	/// Spawned tasks whose final message has not been applied yet.
	outstanding: usize,
	lifetime: CancellationToken,
	msg_tx: mpsc::UnboundedSender<SearchMsg>,
	msg_rx: mpsc::UnboundedReceiver<SearchMsg>,
}

impl std::fmt::Debug for Typeahead {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Typeahead")
			.field("config", &self.config)
			.field("state", &self.state)
			.field("generation", &self.generation)
			.field("settled_generation", &self.settled_generation)
			.field("pending", &self.pending.as_ref().map(|p| p.generation))
			.field("outstanding", &self.outstanding)
			.finish()
	}
}

impl Typeahead {
	/// Creates a resolver with default tunables.
	pub fn new(search: Arc<dyn CustomerSearch>, observer: impl SelectionObserver + 'static) -> Self {
		Self::with_config(TypeaheadConfig::default(), search, observer)
	}

	pub fn with_config(config: TypeaheadConfig, search: Arc<dyn CustomerSearch>, observer: impl SelectionObserver + 'static) -> Self {
		let (msg_tx, msg_rx) = mpsc::unbounded_channel();
		Self {
			config,
			search,
			observer: Box::new(observer),
			state: QueryState::default(),
			generation: 0,
			settled_generation: None,
			pending: None,
			outstanding: 0,
			lifetime: CancellationToken::new(),
			msg_tx,
			msg_rx,
		}
	}

	pub fn config(&self) -> &TypeaheadConfig {
		&self.config
	}

	pub fn state(&self) -> &QueryState {
		&self.state
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true while a debounce timer is pending.
	pub fn is_debouncing(&self) -> bool {
		self.pending.is_some()
	}

	/// Returns the current lifecycle phase.
	pub fn phase(&self) -> Phase {
		if self.state.selection.is_some() {
			Phase::Selected
		} else if self.state.text.is_empty() {
			Phase::Idle
		} else if self.state.text.chars().count() < self.config.min_chars {
			Phase::Typing
		} else if self.pending.is_some() {
			Phase::Debouncing
		} else if self.settled_generation != Some(self.generation) {
			Phase::Searching
		} else if self.state.is_open {
			Phase::Listing
		} else {
			Phase::Empty
		}
	}

	/// Stores a new query and (re)schedules the debounced search.
	///
	/// Queries shorter than the minimum clear the results synchronously and
	/// invalidate any search already in flight.
	///
	/// Ignored while a customer is selected; [`Self::clear_selection`] is the
	/// only way back to the input.
	pub fn set_query(&mut self, text: impl Into<String>) {
		if self.state.selection.is_some() {
			trace!(generation = self.generation, "typeahead.input_ignored");
			return;
		}
		let text = text.into();
		let len = text.chars().count();
		self.cancel_pending();
		self.advance_generation();
		self.state.text = text;

		if len < self.config.min_chars {
			self.state.clear_results();
			self.settled_generation = None;
			trace!(generation = self.generation, len, "typeahead.short_query");
			return;
		}

		self.schedule();
	}

	/// Selects `customer`, resets the query, and notifies the owner.
	pub fn select_result(&mut self, customer: BriefCustomer) {
		self.reset_query();
		debug!(generation = self.generation, customer = %customer.id, "typeahead.select");
		let selected = self.state.selection.insert(customer);
		self.observer.on_select(selected);
	}

	/// Selects the `index`-th visible result. Returns false if there is none.
	pub fn select_index(&mut self, index: usize) -> bool {
		if !self.state.is_open {
			return false;
		}
		let Some(customer) = self.state.results.get(index).cloned() else {
			return false;
		};
		self.select_result(customer);
		true
	}

	/// Drops the selection, resets the query, and notifies the owner.
	pub fn clear_selection(&mut self) {
		self.reset_query();
		self.state.selection = None;
		debug!(generation = self.generation, "typeahead.clear");
		self.observer.on_clear();
	}

	/// Closes the suggestion list after an outside interaction.
	///
	/// Results and text are kept so [`Self::focus`] can reopen the list.
	pub fn dismiss(&mut self) -> bool {
		let was_open = std::mem::replace(&mut self.state.is_open, false);
		if was_open {
			trace!(generation = self.generation, "typeahead.dismiss");
		}
		was_open
	}

	/// Reopens a dismissed list from cached results of the current query.
	pub fn focus(&mut self) -> bool {
		let reopen = !self.state.is_open
			&& self.state.selection.is_none()
			&& !self.state.results.is_empty()
			&& self.settled_generation == Some(self.generation);
		if reopen {
			self.state.is_open = true;
			trace!(generation = self.generation, "typeahead.reopen");
		}
		reopen
	}

	/// Applies every queued task event without waiting.
	///
	/// Returns true when at least one event was applied.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		while let Ok(msg) = self.msg_rx.try_recv() {
			self.apply(msg);
			changed = true;
		}
		changed
	}

	/// Waits for the next task event and applies it.
	///
	/// Returns `None` immediately when no spawned task can still report.
	pub async fn next_event(&mut self) -> Option<TypeaheadEvent> {
		if self.outstanding == 0 {
			return None;
		}
		let msg = self.msg_rx.recv().await?;
		Some(self.apply(msg))
	}

	/// Applies events until every spawned task has reported its final event.
	pub async fn settle(&mut self) -> Vec<TypeaheadEvent> {
		let mut events = Vec::new();
		while let Some(event) = self.next_event().await {
			events.push(event);
		}
		events
	}

	fn advance_generation(&mut self) {
		self.generation = self.generation.wrapping_add(1);
	}

	fn cancel_pending(&mut self) {
		if let Some(pending) = self.pending.take() {
			pending.cancel.cancel();
			trace!(generation = pending.generation, "typeahead.cancel");
		}
	}

	fn reset_query(&mut self) {
		self.cancel_pending();
		self.advance_generation();
		self.settled_generation = None;
		self.state.text.clear();
		self.state.clear_results();
	}

	fn schedule(&mut self) {
		let generation = self.generation;
		let deadline = Instant::now() + self.config.debounce;
		let cancel = self.lifetime.child_token();
		let lifetime = self.lifetime.clone();
		let query = self.state.text.clone();
		let search = Arc::clone(&self.search);
		let tx = self.msg_tx.clone();

		self.pending = Some(PendingTimer {
			generation,
			cancel: cancel.clone(),
		});
		self.outstanding += 1;
		debug!(generation, query = %query, "typeahead.schedule");

		tokio::spawn(async move {
			tokio::select! {
				biased;
				_ = cancel.cancelled() => {
					let _ = tx.send(SearchMsg::Cancelled { generation });
					return;
				}
				_ = sleep_until(deadline) => {}
			}

			if tx.send(SearchMsg::Started { generation }).is_err() {
				return;
			}

			let mut call = tokio::spawn(async move { search.search(&query).await });
			let outcome = tokio::select! {
				biased;
				_ = lifetime.cancelled() => {
					call.abort();
					return;
				}
				joined = &mut call => match joined {
					Ok(outcome) => outcome,
					Err(err) => Err(SearchError::Panicked(err.to_string())),
				},
			};
			let _ = tx.send(SearchMsg::Settled { generation, outcome });
		});
	}

	fn apply(&mut self, msg: SearchMsg) -> TypeaheadEvent {
		match msg {
			SearchMsg::Cancelled { generation } => {
				self.outstanding = self.outstanding.saturating_sub(1);
				TypeaheadEvent::Cancelled { generation }
			}
			SearchMsg::Started { generation } => {
				if self.pending.as_ref().is_some_and(|p| p.generation == generation) {
					self.pending = None;
				}
				self.state.is_searching = true;
				trace!(generation, "typeahead.search_started");
				TypeaheadEvent::Started { generation }
			}
			SearchMsg::Settled { generation, outcome } => {
				self.outstanding = self.outstanding.saturating_sub(1);
				self.state.is_searching = false;

				if generation != self.generation {
					debug!(generation, current = self.generation, "typeahead.stale");
					return TypeaheadEvent::Stale { generation };
				}

				self.settled_generation = Some(generation);
				match outcome {
					Ok(results) => {
						let count = results.len();
						self.state.is_open = count > 0 && self.state.selection.is_none();
						self.state.results = results;
						debug!(generation, count, "typeahead.applied");
						TypeaheadEvent::Applied { generation, count }
					}
					Err(error) => {
						warn!(generation, %error, "typeahead.search_failed");
						self.state.clear_results();
						TypeaheadEvent::Failed { generation }
					}
				}
			}
		}
	}
}

impl Drop for Typeahead {
	fn drop(&mut self) {
		self.lifetime.cancel();
	}
}

#[cfg(test)]
mod tests;
