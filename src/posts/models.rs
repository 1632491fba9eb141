//! Types for modeling posts.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::make_id;
use crate::users::UserID;
use crate::{Error, Result};

make_id!(PostID);

/// The moderation status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PostStatus {
	/// The post is visible to everyone.
	Published,

	/// The post was rejected by the administrator and is hidden from public listings.
	Rejected,
}

/// A post.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Post {
	/// The post's ID.
	pub id: PostID,

	/// The user who wrote this post.
	pub author_id: UserID,

	/// The post's content.
	pub content: String,

	/// The post's moderation status.
	pub status: PostStatus,

	/// When this post was created.
	#[serde(with = "time::serde::rfc3339")]
	pub created_on: OffsetDateTime,
}

/// The largest accepted post content length, in characters.
const MAX_CONTENT_LEN: usize = 2000;

/// Request payload for creating a new post.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewPost {
	/// The post's content.
	pub content: String,
}

impl NewPost {
	/// Validates the submitted content and returns it with surrounding whitespace removed.
	///
	/// The trimmed content must be non-empty and at most 2000 characters.
	pub fn validated_content(&self) -> Result<&str> {
		let content = self.content.trim();
		let length = content.chars().count();

		if (1..=MAX_CONTENT_LEN).contains(&length) {
			Ok(content)
		} else {
			Err(Error::invalid("post content"))
		}
	}
}

/// Response payload after creating a new post.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CreatedPost {
	/// The post's ID.
	pub post_id: PostID,
}

#[cfg(test)]
mod tests {
	use super::NewPost;

	#[test]
	fn empty_content_is_rejected() {
		assert!(NewPost { content: String::new() }.validated_content().is_err());
	}

	#[test]
	fn whitespace_only_content_is_rejected() {
		assert!(NewPost { content: "\n\t  ".to_owned() }.validated_content().is_err());
	}

	#[test]
	fn single_character_content_is_accepted() {
		assert_eq!(NewPost { content: "!".to_owned() }.validated_content().ok(), Some("!"));
	}

	#[test]
	fn content_of_two_thousand_characters_is_accepted() {
		let post = NewPost { content: "x".repeat(2000) };

		assert!(post.validated_content().is_ok());
	}

	#[test]
	fn content_of_two_thousand_one_characters_is_rejected() {
		let post = NewPost { content: "x".repeat(2001) };

		assert!(post.validated_content().is_err());
	}
}
