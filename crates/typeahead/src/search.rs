use async_trait::async_trait;
use brigade_primitives::BriefCustomer;
use thiserror::Error;

/// Failures a search capability may report.
///
/// The resolver degrades every variant to an empty result set.
#[derive(Debug, Error)]
pub enum SearchError {
	/// The capability refuses queries below its minimum length.
	#[error("query has {len} characters, at least {min} required")]
	QueryTooShort { len: usize, min: usize },

	/// The request never produced a response.
	#[error("transport error: {0}")]
	Transport(String),

	/// The server answered with a non-success status.
	#[error("server returned status {status}")]
	Status { status: u16 },

	/// The response body could not be decoded.
	#[error("malformed response: {0}")]
	Decode(String),

	/// The search call panicked or was cancelled by the runtime.
	#[error("search task failed: {0}")]
	Panicked(String),
}

/// Asynchronous customer lookup.
///
/// Results are returned in server order; the resolver never reorders them.
#[async_trait]
pub trait CustomerSearch: Send + Sync + 'static {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError>;
}

/// Owner callbacks fired on explicit select/clear actions.
pub trait SelectionObserver: Send {
	fn on_select(&mut self, customer: &BriefCustomer);
	fn on_clear(&mut self);
}

impl SelectionObserver for () {
	fn on_select(&mut self, _customer: &BriefCustomer) {}
	fn on_clear(&mut self) {}
}
