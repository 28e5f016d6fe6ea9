use std::time::Duration;

use brigade_primitives::BriefCustomer;

/// Default quiet period before a search fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default minimum query length, in characters.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// Resolver tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadConfig {
	/// Quiet period after the last keystroke.
	pub debounce: Duration,
	/// Queries shorter than this never search.
	pub min_chars: usize,
}

impl Default for TypeaheadConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			min_chars: DEFAULT_MIN_CHARS,
		}
	}
}

/// Observable state of one resolver instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
	pub(crate) text: String,
	pub(crate) results: Vec<BriefCustomer>,
	pub(crate) is_open: bool,
	pub(crate) is_searching: bool,
	pub(crate) selection: Option<BriefCustomer>,
}

impl QueryState {
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Results of the most recently applied search, in server order.
	pub fn results(&self) -> &[BriefCustomer] {
		&self.results
	}

	pub fn is_open(&self) -> bool {
		self.is_open
	}

	/// True between a search firing and any search settling.
	pub fn is_searching(&self) -> bool {
		self.is_searching
	}

	pub fn selection(&self) -> Option<&BriefCustomer> {
		self.selection.as_ref()
	}

	pub(crate) fn clear_results(&mut self) {
		self.results.clear();
		self.is_open = false;
	}
}

/// Resolver lifecycle phase, derived from [`QueryState`] and scheduling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	/// No query text.
	Idle,
	/// Query shorter than the minimum.
	Typing,
	/// Debounce timer pending.
	Debouncing,
	/// Timer fired; current query has not settled.
	Searching,
	/// Current query settled with results and the list is open.
	Listing,
	/// Current query settled with no results, failed, or the list was dismissed.
	Empty,
	/// A customer is selected.
	Selected,
}
