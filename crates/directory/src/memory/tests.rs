use pretty_assertions::assert_eq;

use super::*;

const FIXTURE: &str = r#"[
	{"id": "1", "first_name": "John", "last_name": "Smith", "phone": "555-0100", "vip_status": true, "total_visits": 12},
	{"id": "2", "first_name": "Johanna", "last_name": "Lee", "email": "JLEE@example.com", "total_visits": 1},
	{"id": "3", "first_name": "Joe", "last_name": "Gone", "is_active": false},
	{"id": "4", "first_name": "Bob", "last_name": "Jones", "phone": "555-0199"}
]"#;

fn ids(rows: &[BriefCustomer]) -> Vec<&str> {
	rows.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn parses_records_with_defaults() {
	let directory = CustomerDirectory::from_json(FIXTURE).expect("fixture parses");
	assert_eq!(directory.len(), 4);
	assert!(directory.records[0].is_active);
	assert!(!directory.records[2].is_active);
	assert!(!directory.records[3].customer.vip_status);
	assert_eq!(directory.records[3].customer.total_visits, 0);
}

#[test]
fn matches_any_field_ignoring_case_and_skips_inactive() {
	let directory = CustomerDirectory::from_json(FIXTURE).expect("fixture parses");
	assert_eq!(ids(&directory.lookup("JO").unwrap()), vec!["1", "2", "4"]);
	assert_eq!(ids(&directory.lookup("jlee@").unwrap()), vec!["2"]);
	assert_eq!(ids(&directory.lookup("555-01").unwrap()), vec!["1", "4"]);
	assert!(directory.lookup("zz").unwrap().is_empty());
}

#[test]
fn rejects_short_queries() {
	let directory = CustomerDirectory::from_json(FIXTURE).expect("fixture parses");
	assert!(matches!(directory.lookup("j"), Err(SearchError::QueryTooShort { len: 1, min: 2 })));
}

#[test]
fn caps_results() {
	let directory: CustomerDirectory = (0..25)
		.map(|i| BriefCustomer::new(i.to_string().as_str(), format!("Guest {i}")))
		.collect();
	let rows = directory.lookup("guest").unwrap();
	assert_eq!(rows.len(), SEARCH_LIMIT);
	assert_eq!(rows[0].id.as_str(), "0");
}

#[test]
fn load_reports_missing_file_path() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let missing = dir.path().join("customers.json");
	let err = CustomerDirectory::load(&missing).expect_err("file does not exist");
	assert!(matches!(err, DirectoryError::Io { ref path, .. } if path == &missing));
}

#[test]
fn load_reads_file() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("customers.json");
	std::fs::write(&path, FIXTURE).expect("must write fixture");
	let directory = CustomerDirectory::load(&path).expect("fixture loads");
	assert_eq!(directory.len(), 4);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn search_waits_for_configured_latency() {
	let directory = CustomerDirectory::from_json(FIXTURE)
		.expect("fixture parses")
		.with_latency(Duration::from_millis(120));
	let start = tokio::time::Instant::now();
	let rows = directory.search("smith").await.expect("search succeeds");
	assert_eq!(ids(&rows), vec!["1"]);
	assert!(start.elapsed() >= Duration::from_millis(120));
}
