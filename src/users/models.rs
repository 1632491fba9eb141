//! Types for modeling users.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{Error, Result};

/// A user's unique ID.
///
/// These are UUIDs issued by the authentication collaborator when an account is first created.
#[repr(transparent)]
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	derive_more::Display,
	derive_more::Into,
	derive_more::From,
	Serialize,
	Deserialize,
	sqlx::Type,
	ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserID(pub Uuid);

/// The publicly visible part of a user.
///
/// The account's email address and Discord ID are deliberately not part of this type; they must
/// never appear in a public response body.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PublicUser {
	/// The user's ID.
	pub id: UserID,

	/// The user's display name.
	pub name: String,

	/// The user's Discord username, if they logged in via Discord.
	pub discord_username: Option<String>,

	/// When this account was created.
	#[serde(with = "time::serde::rfc3339")]
	pub created_on: OffsetDateTime,
}

/// Request payload for updating your own profile.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileUpdate {
	/// The new display name.
	pub name: String,
}

/// The smallest accepted display name length, in characters.
const MIN_NAME_LEN: usize = 2;

/// The largest accepted display name length, in characters.
const MAX_NAME_LEN: usize = 50;

impl ProfileUpdate {
	/// Validates the submitted display name and returns it with surrounding whitespace removed.
	///
	/// The trimmed name must be between 2 and 50 characters (inclusive).
	pub fn validated_name(&self) -> Result<&str> {
		let name = self.name.trim();
		let length = name.chars().count();

		if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&length) {
			Ok(name)
		} else {
			Err(Error::invalid("display name"))
		}
	}
}

/// Response payload after updating your own profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileUpdated {
	/// Always `true`.
	pub success: bool,

	/// The display name that was saved.
	pub name: String,
}

#[cfg(test)]
mod tests {
	use super::ProfileUpdate;

	#[allow(clippy::missing_docs_in_private_items)]
	fn validate(name: &str) -> Option<String> {
		ProfileUpdate { name: name.to_owned() }
			.validated_name()
			.ok()
			.map(ToOwned::to_owned)
	}

	#[test]
	fn name_of_one_character_is_rejected() {
		assert_eq!(validate("a"), None);
	}

	#[test]
	fn name_of_two_characters_is_accepted() {
		assert_eq!(validate("ab").as_deref(), Some("ab"));
	}

	#[test]
	fn name_of_fifty_characters_is_accepted() {
		let name = "x".repeat(50);

		assert_eq!(validate(&name).as_deref(), Some(name.as_str()));
	}

	#[test]
	fn name_of_fifty_one_characters_is_rejected() {
		assert_eq!(validate(&"x".repeat(51)), None);
	}

	#[test]
	fn surrounding_whitespace_is_trimmed_before_the_length_check() {
		assert_eq!(validate("  ab  ").as_deref(), Some("ab"));
		assert_eq!(validate("  a  "), None);
	}

	#[test]
	fn whitespace_only_name_is_rejected() {
		assert_eq!(validate("     "), None);
	}
}
