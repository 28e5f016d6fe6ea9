use crate::permission::{ADMIN_ALL, PermissionSet};

/// Definition of a role seeded for every new company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDef {
	/// Role identifier (e.g. "host").
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Granted `resource.action` keys.
	pub permissions: &'static [&'static str],
}

impl RoleDef {
	pub fn permission_set(&self) -> PermissionSet {
		self.permissions.iter().copied().collect()
	}
}

/// Default roles, in the order the backend creates them.
pub static DEFAULT_ROLES: &[RoleDef] = &[
	RoleDef {
		name: "owner",
		description: "Restaurant owner with full access",
		permissions: &[ADMIN_ALL],
	},
	RoleDef {
		name: "manager",
		description: "Restaurant manager",
		permissions: &[
			"dashboard.read",
			"tables.read",
			"tables.write",
			"tables.delete",
			"menu.read",
			"menu.write",
			"menu.delete",
			"reservations.read",
			"reservations.write",
			"reservations.delete",
			"inventory.read",
			"inventory.write",
			"staff.read",
			"staff.write",
			"customers.read",
			"customers.write",
			"settings.read",
			"analytics.read",
		],
	},
	RoleDef {
		name: "host",
		description: "Front desk / Host",
		permissions: &[
			"dashboard.read",
			"tables.read",
			"tables.write",
			"reservations.read",
			"reservations.write",
			"reservations.delete",
			"customers.read",
			"customers.write",
			"menu.read",
		],
	},
	RoleDef {
		name: "waiter",
		description: "Waiter / Server",
		permissions: &["dashboard.read", "tables.read", "reservations.read", "menu.read", "customers.read"],
	},
	RoleDef {
		name: "chef",
		description: "Kitchen chef",
		permissions: &["dashboard.read", "menu.read", "menu.write", "inventory.read", "inventory.write"],
	},
];

/// Looks up a default role by name (case-insensitive).
pub fn find_role(name: &str) -> Option<&'static RoleDef> {
	DEFAULT_ROLES.iter().find(|role| role.name.eq_ignore_ascii_case(name))
}

/// Merges the permissions of every named role into one set.
///
/// Returns the first unknown role name as the error.
pub fn permissions_for_roles<'a, I>(names: I) -> Result<PermissionSet, &'a str>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut set = PermissionSet::new();
	for name in names {
		let role = find_role(name).ok_or(name)?;
		set.extend(role.permissions.iter().copied());
	}
	Ok(set)
}
