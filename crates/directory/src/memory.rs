use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use brigade_primitives::BriefCustomer;
use brigade_typeahead::{CustomerSearch, SearchError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DirectoryError;

/// Queries shorter than this are rejected, as the backend does.
pub const SEARCH_MIN_CHARS: usize = 2;

/// Maximum rows returned per search.
pub const SEARCH_LIMIT: usize = 10;

/// A stored customer: the brief projection plus its active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
	#[serde(flatten)]
	pub customer: BriefCustomer,
	#[serde(default = "active_by_default")]
	pub is_active: bool,
}

fn active_by_default() -> bool {
	true
}

impl From<BriefCustomer> for DirectoryRecord {
	fn from(customer: BriefCustomer) -> Self {
		Self {
			customer,
			is_active: true,
		}
	}
}

impl DirectoryRecord {
	fn matches(&self, needle: &str) -> bool {
		let c = &self.customer;
		[Some(c.first_name.as_str()), c.last_name.as_deref(), c.phone.as_deref(), c.email.as_deref()]
			.into_iter()
			.flatten()
			.any(|field| field.to_lowercase().contains(needle))
	}
}

/// In-memory customer store with quick-search semantics.
///
/// Matches active customers whose first name, last name, phone, or email
/// contains the query, ignoring case. Rows come back in directory order,
/// capped at [`SEARCH_LIMIT`].
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
	records: Vec<DirectoryRecord>,
	latency: Duration,
}

impl CustomerDirectory {
	pub fn new(records: Vec<DirectoryRecord>) -> Self {
		Self {
			records,
			latency: Duration::ZERO,
		}
	}

	/// Parses a JSON array of records.
	pub fn from_json(input: &str) -> Result<Self, DirectoryError> {
		Ok(Self::new(serde_json::from_str(input)?))
	}

	/// Loads a JSON array of records from `path`.
	pub fn load(path: &Path) -> Result<Self, DirectoryError> {
		let input = std::fs::read_to_string(path).map_err(|error| DirectoryError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let directory = Self::from_json(&input)?;
		debug!(path = %path.display(), records = directory.len(), "directory.load");
		Ok(directory)
	}

	/// Delays every search by `latency` to mimic a network round trip.
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Runs a quick search synchronously.
	pub fn lookup(&self, query: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		let len = query.chars().count();
		if len < SEARCH_MIN_CHARS {
			return Err(SearchError::QueryTooShort {
				len,
				min: SEARCH_MIN_CHARS,
			});
		}
		let needle = query.to_lowercase();
		Ok(self
			.records
			.iter()
			.filter(|r| r.is_active && r.matches(&needle))
			.take(SEARCH_LIMIT)
			.map(|r| r.customer.clone())
			.collect())
	}
}

impl FromIterator<BriefCustomer> for CustomerDirectory {
	fn from_iter<I: IntoIterator<Item = BriefCustomer>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(DirectoryRecord::from).collect())
	}
}

#[async_trait]
impl CustomerSearch for CustomerDirectory {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		if !self.latency.is_zero() {
			tokio::time::sleep(self.latency).await;
		}
		self.lookup(text)
	}
}

#[cfg(test)]
mod tests;
