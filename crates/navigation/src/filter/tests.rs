use std::fmt;

use brigade_primitives::find_role;
use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug)]
struct Unreachable;

impl fmt::Display for Unreachable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("permission service unreachable")
	}
}

impl std::error::Error for Unreachable {}

fn titles(entries: &[&MenuEntry]) -> Vec<&'static str> {
	entries.iter().map(|e| e.title).collect()
}

#[test]
fn actor_without_inventory_read_loses_only_inventory() {
	let manager = find_role("manager").expect("manager role").permission_set();
	let all = filter_for(PRIMARY_NAV, &manager).expect("infallible");
	assert!(titles(&all).contains(&"Inventory"));

	let trimmed: PermissionSet = manager.iter().filter(|p| *p != "inventory.read").collect();
	let visible = filter_for(PRIMARY_NAV, &trimmed).expect("infallible");
	assert_eq!(
		titles(&visible),
		vec!["Dashboard", "Tables", "Reservations", "Customers", "Menu", "Staff", "Analytics"]
	);
}

#[test]
fn checker_receives_split_pairs_in_order() {
	let mut seen = Vec::new();
	let visible = filter_entries(SECONDARY_NAV, |resource, action| {
		seen.push(format!("{resource}/{action}"));
		Ok::<_, Unreachable>(resource == "settings")
	})
	.expect("checker never fails");
	assert_eq!(seen, vec!["dashboard/read", "settings/write", "settings/read"]);
	assert_eq!(titles(&visible), vec!["Knowledge Base", "Settings"]);
}

#[test]
fn malformed_permission_fails_fast() {
	static BROKEN: &[MenuEntry] = &[
		MenuEntry::new("Dashboard", "/dashboard", "layout-dashboard", "dashboard.read"),
		MenuEntry::new("Reports", "/reports", "file", "reports"),
	];
	let err = filter_entries(BROKEN, |_, _| Ok::<_, Unreachable>(true)).expect_err("missing separator");
	assert!(matches!(err, NavError::MalformedPermission { title: "Reports", .. }));
}

#[test]
fn checker_errors_propagate() {
	let err = filter_entries(PRIMARY_NAV, |resource, _| {
		if resource == "tables" { Err(Unreachable) } else { Ok(true) }
	})
	.expect_err("checker fails on tables");
	match err {
		NavError::Check { permission, source } => {
			assert_eq!(permission, "tables.read");
			assert_eq!(source.to_string(), "permission service unreachable");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn menus_fail_independently() {
	let nav = visible_navigation(|resource, _| {
		if resource == "inventory" { Err(Unreachable) } else { Ok(true) }
	});
	assert!(nav.primary.is_err());
	let secondary = nav.secondary.expect("secondary menu has no inventory entry");
	assert_eq!(titles(&secondary), vec!["AI Assistant", "Knowledge Base", "Settings"]);
}

#[test]
fn empty_permission_set_sees_nothing() {
	let nav = visible_navigation(|resource, action| Ok::<_, Infallible>(PermissionSet::new().has_permission(resource, action)));
	assert!(nav.primary.expect("infallible").is_empty());
	assert!(nav.secondary.expect("infallible").is_empty());
}
