//! The administrator allow-list.

use derive_more::Debug;

/// The credentials identifying the administrator account.
///
/// There is exactly one designated administrator, identified two ways: by the email address of
/// their Google login, or by the Discord ID of their Discord login. Both literals come from the
/// environment (see [`Config`]) and never change at runtime.
///
/// Matching is an exact comparison. Historically individual handlers compared against inlined
/// literals (some only the email, some only the Discord ID); this type is the single rule every
/// privileged route consults.
///
/// [`Config`]: crate::Config
#[derive(Debug, Clone)]
pub struct AdminAllowList {
	/// The administrator's email address.
	#[debug("*****")]
	email: String,

	/// The administrator's Discord ID.
	#[debug("*****")]
	discord_id: String,
}

impl AdminAllowList {
	/// Creates a new [`AdminAllowList`].
	pub fn new(email: String, discord_id: String) -> Self {
		Self { email, discord_id }
	}

	/// Checks whether the given account credentials belong to the administrator.
	pub fn matches(&self, email: Option<&str>, discord_id: Option<&str>) -> bool {
		email.is_some_and(|email| email == self.email)
			|| discord_id.is_some_and(|discord_id| discord_id == self.discord_id)
	}
}

#[cfg(test)]
mod tests {
	use super::AdminAllowList;

	#[allow(clippy::missing_docs_in_private_items)]
	fn allow_list() -> AdminAllowList {
		AdminAllowList::new(String::from("admin@szoniska.hu"), String::from("1234567890"))
	}

	#[test]
	fn matches_by_email() {
		assert!(allow_list().matches(Some("admin@szoniska.hu"), None));
	}

	#[test]
	fn matches_by_discord_id() {
		assert!(allow_list().matches(None, Some("1234567890")));
	}

	#[test]
	fn either_credential_is_enough() {
		assert!(allow_list().matches(Some("someone-else@example.com"), Some("1234567890")));
	}

	#[test]
	fn rejects_unknown_credentials() {
		assert!(!allow_list().matches(Some("someone-else@example.com"), Some("42")));
	}

	#[test]
	fn rejects_accounts_without_credentials() {
		assert!(!allow_list().matches(None, None));
	}

	#[test]
	fn comparison_is_exact() {
		assert!(!allow_list().matches(Some("ADMIN@SZONISKA.HU"), None));
		assert!(!allow_list().matches(Some(" admin@szoniska.hu"), None));
	}
}
