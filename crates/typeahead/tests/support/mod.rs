#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use brigade_primitives::BriefCustomer;
use brigade_typeahead::{CustomerSearch, SearchError, SelectionObserver};
use parking_lot::Mutex;
use tokio::time::Instant;

pub type CallLog = Arc<Mutex<Vec<(String, Instant)>>>;

pub fn catalogue() -> Vec<BriefCustomer> {
	vec![
		BriefCustomer::new("1", "John")
			.with_last_name("Smith")
			.with_phone("555-0100")
			.with_vip(true)
			.with_visits(12),
		BriefCustomer::new("2", "Johanna").with_last_name("Lee").with_visits(1),
		BriefCustomer::new("3", "Joan").with_last_name("Miro").with_email("joan@example.com"),
		BriefCustomer::new("4", "Bob").with_last_name("Jones").with_visits(4),
		BriefCustomer::new("5", "Éamon").with_last_name("Ó Briain"),
	]
}

/// In-process search with per-query latency and failure scripting.
pub struct ScriptedSearch {
	catalogue: Vec<BriefCustomer>,
	delays: HashMap<String, Duration>,
	failures: HashSet<String>,
	calls: CallLog,
	completed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSearch {
	pub fn new(catalogue: Vec<BriefCustomer>) -> Self {
		Self {
			catalogue,
			delays: HashMap::new(),
			failures: HashSet::new(),
			calls: CallLog::default(),
			completed: Arc::default(),
		}
	}

	pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
		self.delays.insert(query.to_string(), delay);
		self
	}

	pub fn with_failure(mut self, query: &str) -> Self {
		self.failures.insert(query.to_string());
		self
	}

	pub fn calls(&self) -> CallLog {
		Arc::clone(&self.calls)
	}

	/// Queries whose call ran to completion, including any scripted delay.
	pub fn completed(&self) -> Arc<Mutex<Vec<String>>> {
		Arc::clone(&self.completed)
	}
}

#[async_trait]
impl CustomerSearch for ScriptedSearch {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		self.calls.lock().push((text.to_string(), Instant::now()));
		if let Some(delay) = self.delays.get(text) {
			tokio::time::sleep(*delay).await;
		}
		self.completed.lock().push(text.to_string());
		if self.failures.contains(text) {
			return Err(SearchError::Transport("connection reset by peer".into()));
		}
		let needle = text.to_lowercase();
		Ok(self
			.catalogue
			.iter()
			.filter(|c| {
				c.first_name.to_lowercase().contains(&needle)
					|| c.last_name.as_deref().is_some_and(|l| l.to_lowercase().contains(&needle))
			})
			.cloned()
			.collect())
	}
}

/// Observer that records owner callbacks as strings.
#[derive(Clone, Default)]
pub struct RecordingObserver {
	pub log: Arc<Mutex<Vec<String>>>,
}

impl SelectionObserver for RecordingObserver {
	fn on_select(&mut self, customer: &BriefCustomer) {
		self.log.lock().push(format!("select:{}", customer.id));
	}

	fn on_clear(&mut self) {
		self.log.lock().push("clear".to_string());
	}
}

pub fn called_queries(calls: &CallLog) -> Vec<String> {
	calls.lock().iter().map(|(q, _)| q.clone()).collect()
}
