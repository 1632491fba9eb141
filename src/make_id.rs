//! Helper macro to make "ID" types.
//!
//! Defining concrete types for different kinds of IDs makes it harder to accidentally mix them up.

/// A helper macro for defining an "ID" type.
///
/// All database tables with an auto-increment `id` column get their own types defined by this
/// macro in their respective modules. User IDs are UUIDs issued by the authentication
/// collaborator and have a hand-written type instead, see [`crate::users::UserID`].
///
/// # Example
///
/// ```rust,ignore
/// // This will expand to a unit struct called `PostID` that wraps a `u64` and implements various
/// // traits so it can be treated like a `u64`, but still expresses a semantic difference.
/// make_id!(PostID);
/// ```
#[macro_export]
macro_rules! make_id {
	($name:ident) => {
		#[allow(missing_docs, clippy::missing_docs_in_private_items)]
		#[repr(transparent)]
		#[derive(
			Debug,
			Clone,
			Copy,
			PartialEq,
			Eq,
			PartialOrd,
			Ord,
			Hash,
			::derive_more::Display,
			::derive_more::Into,
			::derive_more::From,
			::serde::Serialize,
			::serde::Deserialize,
			::sqlx::Type,
			::utoipa::ToSchema,
		)]
		#[serde(transparent)]
		#[sqlx(transparent)]
		#[display("{_0}")]
		pub struct $name(pub u64);

		impl ::std::ops::Deref for $name {
			type Target = u64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
	};
}
