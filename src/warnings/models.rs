//! Types for modeling warnings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::make_id;
use crate::users::UserID;
use crate::{Error, Result};

make_id!(WarningID);

/// A warning issued against a user.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Warning {
	/// The warning's ID.
	pub id: WarningID,

	/// The user this warning was issued against.
	pub user_id: UserID,

	/// Why this warning was issued.
	pub reason: String,

	/// The admin who issued this warning.
	pub issued_by: UserID,

	/// When this warning was issued.
	#[serde(with = "time::serde::rfc3339")]
	pub created_on: OffsetDateTime,
}

/// The largest accepted warning reason length, in characters.
const MAX_REASON_LEN: usize = 500;

/// Request payload for issuing a new warning.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewWarning {
	/// Why this warning is being issued.
	pub reason: String,
}

impl NewWarning {
	/// Validates the submitted reason and returns it with surrounding whitespace removed.
	///
	/// The trimmed reason must be non-empty and at most 500 characters.
	pub fn validated_reason(&self) -> Result<&str> {
		let reason = self.reason.trim();
		let length = reason.chars().count();

		if (1..=MAX_REASON_LEN).contains(&length) {
			Ok(reason)
		} else {
			Err(Error::invalid("warning reason"))
		}
	}
}

/// Response payload after issuing a new warning.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CreatedWarning {
	/// The warning's ID.
	pub warning_id: WarningID,
}

#[cfg(test)]
mod tests {
	use super::NewWarning;

	#[test]
	fn empty_reason_is_rejected() {
		assert!(NewWarning { reason: String::new() }.validated_reason().is_err());
	}

	#[test]
	fn whitespace_only_reason_is_rejected() {
		assert!(NewWarning { reason: "   ".to_owned() }.validated_reason().is_err());
	}

	#[test]
	fn reason_of_five_hundred_characters_is_accepted() {
		let warning = NewWarning { reason: "x".repeat(500) };

		assert!(warning.validated_reason().is_ok());
	}

	#[test]
	fn reason_of_five_hundred_one_characters_is_rejected() {
		let warning = NewWarning { reason: "x".repeat(501) };

		assert!(warning.validated_reason().is_err());
	}

	#[test]
	fn reason_is_trimmed() {
		let warning = NewWarning { reason: "  spamming the feed  ".to_owned() };

		assert_eq!(warning.validated_reason().ok(), Some("spamming the feed"));
	}
}
