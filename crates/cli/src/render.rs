//! Plain-text rendering for command output.

use brigade_navigation::MenuEntry;
use brigade_primitives::{BriefCustomer, RoleDef};
use brigade_typeahead::{CustomerCard, TypeaheadView};

/// One menu as an aligned `title  path` listing under a heading.
pub fn menu_section(heading: &str, entries: &[&MenuEntry]) -> String {
	let mut out = format!("{heading}\n");
	if entries.is_empty() {
		out.push_str("  (none)\n");
		return out;
	}
	let width = entries.iter().map(|e| e.title.len()).max().unwrap_or(0);
	for entry in entries {
		out.push_str(&format!("  {:<width$}  {}\n", entry.title, entry.path));
	}
	out
}

pub fn role_table(roles: &[RoleDef]) -> String {
	let width = roles.iter().map(|r| r.name.len()).max().unwrap_or(0);
	let mut out = String::new();
	for role in roles {
		out.push_str(&format!("{:<width$}  {}\n", role.name, role.description));
		out.push_str(&format!("{:<width$}  {}\n", "", role.permissions.join(", ")));
	}
	out
}

fn result_row(index: usize, customer: &BriefCustomer) -> String {
	let mut row = format!("  {}. {}", index + 1, customer.full_name());
	if customer.vip_status {
		row.push_str(" [VIP]");
	}
	if let Some(contact) = customer.contact_line() {
		row.push_str(" · ");
		row.push_str(&contact);
	}
	row.push('\n');
	row
}

pub fn customer_card(card: &CustomerCard<'_>) -> String {
	let mut out = format!("({}) {}", card.initials, card.name);
	if card.vip {
		out.push_str(" [VIP]");
	}
	out.push('\n');
	if let Some(contact) = &card.contact {
		out.push_str(&format!("     {contact}\n"));
	}
	out.push_str(&format!("     {}\n", card.visits));
	out
}

/// Input line, open dropdown rows and hint, or the selected customer card.
pub fn typeahead_view(view: &TypeaheadView<'_>) -> String {
	match view {
		TypeaheadView::Selected(card) => customer_card(card),
		TypeaheadView::Input { text, dropdown, hint } => {
			let mut out = format!("> {text}\n");
			for (index, customer) in dropdown.unwrap_or_default().iter().enumerate() {
				out.push_str(&result_row(index, customer));
			}
			if let Some(hint) = hint {
				out.push_str(&format!("  {}\n", hint.message()));
				if let Some(detail) = hint.detail() {
					out.push_str(&format!("  {detail}\n"));
				}
			}
			out
		}
	}
}
