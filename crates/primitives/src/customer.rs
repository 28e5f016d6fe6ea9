use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque customer identity as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for CustomerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for CustomerId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

/// Minimal customer projection used by search results and dropdowns.
///
/// Field names follow the backend's JSON payload so records deserialize
/// directly from the quick-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefCustomer {
	pub id: CustomerId,
	pub first_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default)]
	pub vip_status: bool,
	#[serde(default)]
	pub total_visits: u32,
}

impl BriefCustomer {
	/// Creates a non-VIP record with no contact details and no visits.
	pub fn new(id: impl Into<CustomerId>, first_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			first_name: first_name.into(),
			last_name: None,
			phone: None,
			email: None,
			vip_status: false,
			total_visits: 0,
		}
	}

	pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
		self.last_name = Some(last_name.into());
		self
	}

	pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
		self.phone = Some(phone.into());
		self
	}

	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	pub fn with_vip(mut self, vip: bool) -> Self {
		self.vip_status = vip;
		self
	}

	pub fn with_visits(mut self, visits: u32) -> Self {
		self.total_visits = visits;
		self
	}

	/// Returns `"first last"`, or just the first name when no last name is on file.
	pub fn full_name(&self) -> String {
		match self.last_name.as_deref().filter(|s| !s.is_empty()) {
			Some(last) => format!("{} {last}", self.first_name),
			None => self.first_name.clone(),
		}
	}

	/// Uppercased first letters of the first and last name.
	pub fn initials(&self) -> String {
		self.first_name
			.chars()
			.next()
			.into_iter()
			.chain(self.last_name.as_deref().and_then(|s| s.chars().next()))
			.flat_map(char::to_uppercase)
			.collect()
	}

	/// Visit-count badge text.
	pub fn visits_label(&self) -> String {
		match self.total_visits {
			1 => "1 visit".to_string(),
			n => format!("{n} visits"),
		}
	}

	/// Secondary line shown under the name: phone, then email, whichever exist.
	pub fn contact_line(&self) -> Option<String> {
		let parts: Vec<&str> = [self.phone.as_deref(), self.email.as_deref()]
			.into_iter()
			.flatten()
			.filter(|s| !s.is_empty())
			.collect();
		(!parts.is_empty()).then(|| parts.join(" · "))
	}
}
