use brigade_primitives::BriefCustomer;

use crate::controller::Typeahead;
use crate::state::Phase;

/// Inline hint shown under the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
	/// Query is shorter than the minimum.
	TypeMore { min_chars: usize },
	/// The current query has not settled yet.
	Searching,
	/// The current query settled with nothing to show.
	NoMatches,
}

impl Hint {
	pub fn message(&self) -> String {
		match self {
			Self::TypeMore { min_chars } => format!("Type at least {min_chars} characters to search"),
			Self::Searching => "Searching…".to_string(),
			Self::NoMatches => "No customers found".to_string(),
		}
	}

	/// Optional second line.
	pub fn detail(&self) -> Option<&'static str> {
		match self {
			Self::NoMatches => Some("Fill in the fields below to add a new customer"),
			_ => None,
		}
	}
}

/// Info card that replaces the input once a customer is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCard<'a> {
	pub customer: &'a BriefCustomer,
	pub name: String,
	pub initials: String,
	pub contact: Option<String>,
	pub vip: bool,
	pub visits: String,
}

impl<'a> CustomerCard<'a> {
	pub fn new(customer: &'a BriefCustomer) -> Self {
		Self {
			customer,
			name: customer.full_name(),
			initials: customer.initials(),
			contact: customer.contact_line(),
			vip: customer.vip_status,
			visits: customer.visits_label(),
		}
	}
}

/// Render model for the resolver.
///
/// The two variants encode the selection/list exclusivity: a selected
/// customer has no input and no dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadView<'a> {
	Selected(CustomerCard<'a>),
	Input {
		text: &'a str,
		/// Rows of the open suggestion list.
		dropdown: Option<&'a [BriefCustomer]>,
		hint: Option<Hint>,
	},
}

impl Typeahead {
	/// Builds the render model for the current state.
	pub fn view(&self) -> TypeaheadView<'_> {
		let state = &self.state;
		if let Some(customer) = state.selection.as_ref() {
			return TypeaheadView::Selected(CustomerCard::new(customer));
		}

		let hint = match self.phase() {
			Phase::Typing => Some(Hint::TypeMore {
				min_chars: self.config().min_chars,
			}),
			Phase::Searching => Some(Hint::Searching),
			Phase::Empty if state.results.is_empty() => Some(Hint::NoMatches),
			_ => None,
		};

		TypeaheadView::Input {
			text: &state.text,
			dropdown: state.is_open.then_some(state.results.as_slice()),
			hint,
		}
	}
}
