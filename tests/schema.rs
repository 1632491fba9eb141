//! Sanity checks on the database schema.

/// Deleting a user account is a single `DELETE FROM Users` statement; every table referencing
/// `Users` must cascade, or the statement fails with a constraint error (MySQL defaults foreign
/// keys to `RESTRICT`) for any account that has ever posted or been warned.
#[test]
fn deleting_a_user_cascades_to_everything_referencing_them() {
	let schema = include_str!("../database/migrations/0001-initial-schema.sql");

	let mut user_fks = 0;

	for line in schema.lines() {
		let line = line.trim().trim_end_matches(',');

		if !line.starts_with("FOREIGN KEY") || !line.contains("REFERENCES Users") {
			continue;
		}

		user_fks += 1;

		assert!(
			line.ends_with("ON DELETE CASCADE"),
			"`{line}` does not cascade; deleting a referenced user would fail",
		);
	}

	// Sessions, Posts.author_id, Warnings.user_id, Warnings.issued_by
	assert_eq!(user_fks, 4);
}
