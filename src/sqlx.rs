//! Helpers and extension traits for [`sqlx`].

use sqlx::mysql::MySqlQueryResult;

use crate::{Error, Result};

/// Extracts the `LAST_INSERT_ID()` from a query result and wraps it in some `ID` type.
pub fn last_insert_id<ID>(query_result: MySqlQueryResult) -> Result<ID>
where
	ID: From<u64>,
{
	match query_result.last_insert_id() {
		0 => Err(Error::logic("PKs cannot be 0")),
		id => Ok(ID::from(id)),
	}
}

/// Maps a mutation that affected zero rows to a "not found" error.
///
/// `DELETE` and `UPDATE` succeed with zero affected rows when the target row does not exist, so
/// deleting the same entity twice behaves the same as deleting one that never existed.
#[track_caller]
pub fn ensure_affected(rows_affected: u64, what: &str) -> Result<()> {
	if rows_affected == 0 {
		return Err(Error::not_found(what));
	}

	Ok(())
}

/// Extension trait for dealing with SQL errors.
pub trait SqlErrorExt {
	/// Checks if this is a foreign key violation of a specific key.
	fn is_fk_violation_of(&self, fk: &str) -> bool;
}

impl SqlErrorExt for sqlx::Error {
	fn is_fk_violation_of(&self, fk: &str) -> bool {
		self.as_database_error()
			.map(|err| err.is_foreign_key_violation() && err.message().contains(fk))
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use axum::http::StatusCode;
	use axum::response::IntoResponse;

	use super::ensure_affected;

	#[test]
	fn zero_affected_rows_is_a_not_found() {
		let error = ensure_affected(0, "post").unwrap_err();

		assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn a_second_delete_of_the_same_entity_reports_not_found() {
		// first delete removes the row, second one affects nothing
		assert!(ensure_affected(1, "post").is_ok());
		assert!(ensure_affected(0, "post").is_err());
	}
}
