use std::time::Duration;

use async_trait::async_trait;

use super::*;

/// Echoes the query back as a single record.
struct Echo;

#[async_trait]
impl CustomerSearch for Echo {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		Ok(vec![BriefCustomer::new(text, text)])
	}
}

fn echo() -> Arc<dyn CustomerSearch> {
	Arc::new(Echo)
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn pump_applies_queued_events_without_waiting() {
	let mut typeahead = Typeahead::new(echo(), ());
	typeahead.set_query("ana");
	assert!(!typeahead.pump());

	tokio::time::sleep(DEBOUNCE_AND_SLACK).await;
	assert!(typeahead.pump());
	assert_eq!(typeahead.phase(), Phase::Listing);
	assert_eq!(typeahead.outstanding, 0);
	assert_eq!(typeahead.state.results[0].first_name, "ana");
}

const DEBOUNCE_AND_SLACK: Duration = Duration::from_millis(350);

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn custom_config_changes_threshold_and_delay() {
	let config = TypeaheadConfig {
		debounce: Duration::from_millis(50),
		min_chars: 3,
	};
	let mut typeahead = Typeahead::with_config(config, echo(), ());

	typeahead.set_query("an");
	assert_eq!(typeahead.phase(), Phase::Typing);
	assert!(!typeahead.is_debouncing());

	typeahead.set_query("ana");
	let start = Instant::now();
	assert_eq!(typeahead.next_event().await, Some(TypeaheadEvent::Started { generation: 2 }));
	let waited = start.elapsed();
	assert!(waited >= Duration::from_millis(50) && waited < Duration::from_millis(55), "fired after {waited:?}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn every_spawned_task_reports_exactly_once() {
	let mut typeahead = Typeahead::new(echo(), ());
	for query in ["an", "ann", "anna", "annab"] {
		typeahead.set_query(query);
	}
	assert_eq!(typeahead.outstanding, 4);

	let events = typeahead.settle().await;
	let finals = events
		.iter()
		.filter(|e| !matches!(e, TypeaheadEvent::Started { .. }))
		.count();
	assert_eq!(finals, 4);
	assert_eq!(typeahead.outstanding, 0);
	assert_eq!(typeahead.next_event().await, None);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn select_index_requires_open_list() {
	let mut typeahead = Typeahead::new(echo(), ());
	assert!(!typeahead.select_index(0));

	typeahead.set_query("ana");
	typeahead.settle().await;
	typeahead.dismiss();
	assert!(!typeahead.select_index(0));
	typeahead.focus();
	assert!(!typeahead.select_index(1));
	assert!(typeahead.select_index(0));
	assert_eq!(typeahead.phase(), Phase::Selected);
}

/// Capability whose every call panics.
struct Panics;

#[async_trait]
impl CustomerSearch for Panics {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		panic!("backend bug on {text:?}");
	}
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn panicking_search_settles_as_failure() {
	let mut typeahead = Typeahead::new(Arc::new(Panics), ());
	typeahead.set_query("ana");

	let events = typeahead.settle().await;
	assert_eq!(
		events,
		vec![
			TypeaheadEvent::Started { generation: 1 },
			TypeaheadEvent::Failed { generation: 1 },
		]
	);
	assert_eq!(typeahead.outstanding, 0);
	assert_eq!(typeahead.phase(), Phase::Empty);
	assert!(!typeahead.state.is_searching);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn current_settlement_never_opens_list_over_selection() {
	let mut typeahead = Typeahead::new(echo(), ());
	typeahead.set_query("ana");
	typeahead.state.selection = Some(BriefCustomer::new("7", "Ana"));

	let events = typeahead.settle().await;
	assert!(events.contains(&TypeaheadEvent::Applied { generation: 1, count: 1 }));
	assert!(!typeahead.state.is_open);
	assert_eq!(typeahead.phase(), Phase::Selected);
}

#[test]
fn debug_output_omits_channels() {
	let typeahead = Typeahead::new(echo(), ());
	let debug = format!("{typeahead:?}");
	assert!(debug.contains("generation: 0"));
	assert!(!debug.contains("msg_tx"));
}
