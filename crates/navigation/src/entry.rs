/// A static navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuEntry {
	/// Display label.
	pub title: &'static str,
	/// Route path the link points at.
	pub path: &'static str,
	/// Icon name in the front-end's icon set.
	pub icon: &'static str,
	/// Required permission as `resource.action`.
	pub permission: &'static str,
}

impl MenuEntry {
	pub const fn new(title: &'static str, path: &'static str, icon: &'static str, permission: &'static str) -> Self {
		Self {
			title,
			path,
			icon,
			permission,
		}
	}
}

/// Main sidebar links, in display order.
pub static PRIMARY_NAV: &[MenuEntry] = &[
	MenuEntry::new("Dashboard", "/dashboard", "layout-dashboard", "dashboard.read"),
	MenuEntry::new("Tables", "/tables", "armchair", "tables.read"),
	MenuEntry::new("Reservations", "/reservations", "calendar-days", "reservations.read"),
	MenuEntry::new("Customers", "/customers", "users", "customers.read"),
	MenuEntry::new("Menu", "/menu", "utensils-crossed", "menu.read"),
	MenuEntry::new("Inventory", "/inventory", "package", "inventory.read"),
	MenuEntry::new("Staff", "/staff", "id-card", "staff.read"),
	MenuEntry::new("Analytics", "/analytics", "chart-line", "analytics.read"),
];

/// Utility links pinned below the main menu.
pub static SECONDARY_NAV: &[MenuEntry] = &[
	MenuEntry::new("AI Assistant", "/assistant", "bot", "dashboard.read"),
	MenuEntry::new("Knowledge Base", "/knowledge-base", "book-open", "settings.write"),
	MenuEntry::new("Settings", "/settings", "settings", "settings.read"),
];
