//! Everything related to logged-in users.

use derive_more::Debug;

use crate::users::UserID;

/// Information about a logged-in user.
///
/// This is produced by the [`Session`] extractor, lives for one request, and is never persisted
/// by the API.
///
/// [`Session`]: crate::authentication::Session
#[derive(Debug, Clone)]
pub struct Identity {
	/// The user's ID.
	#[debug("{user_id}")]
	user_id: UserID,

	/// The user's email address, if they logged in via Google.
	#[debug("*****")]
	email: Option<String>,

	/// The user's Discord ID, if they logged in via Discord.
	discord_id: Option<String>,

	/// The user's Discord username, if they logged in via Discord.
	discord_username: Option<String>,
}

impl Identity {
	/// Creates a new [`Identity`] object.
	pub fn new(
		user_id: UserID,
		email: Option<String>,
		discord_id: Option<String>,
		discord_username: Option<String>,
	) -> Self {
		Self {
			user_id,
			email,
			discord_id,
			discord_username,
		}
	}

	/// Returns the user's ID.
	pub const fn user_id(&self) -> UserID {
		self.user_id
	}

	/// Returns the user's email address, if any.
	pub fn email(&self) -> Option<&str> {
		self.email.as_deref()
	}

	/// Returns the user's Discord ID, if any.
	pub fn discord_id(&self) -> Option<&str> {
		self.discord_id.as_deref()
	}

	/// Returns the user's Discord username, if any.
	pub fn discord_username(&self) -> Option<&str> {
		self.discord_username.as_deref()
	}
}
