//! An authorization method that ensures the user is the administrator.

use axum::http::request;
use sqlx::{FromRow, MySql, Transaction};

use super::AuthorizeSession;
use crate::{authentication, Error, Result, State};

/// Ensure the user is the administrator.
///
/// The account record is re-fetched from the database on every check rather than trusting the
/// credentials carried by the session: the allow-list match must reflect the *current* account
/// row, since an account's email or Discord ID could have changed after the session was created.
///
/// A database failure during the lookup propagates as an internal error. It must never be
/// collapsed into an allow (a security hole) or a deny (which would mask outages).
#[derive(Debug, Clone, Copy)]
pub struct IsAdmin;

/// The account credentials relevant for the allow-list match.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(FromRow)]
struct AccountCredentials {
	email: Option<String>,
	discord_id: Option<String>,
}

impl AuthorizeSession for IsAdmin {
	#[tracing::instrument(level = "debug", name = "auth::is_admin", skip_all, fields(
		user.id = %identity.user_id(),
		is_admin = tracing::field::Empty,
	))]
	async fn authorize_session(
		identity: &authentication::Identity,
		_req: &mut request::Parts,
		state: &State,
		transaction: &mut Transaction<'static, MySql>,
	) -> Result<()> {
		let account = sqlx::query_as::<_, AccountCredentials>(
			r"
			SELECT
			  email,
			  discord_id
			FROM
			  Users
			WHERE
			  id = ?
			",
		)
		.bind(identity.user_id())
		.fetch_optional(transaction.as_mut())
		.await?
		.ok_or_else(|| Error::forbidden().context("session user has no account row"))?;

		let is_admin = state
			.config()
			.admin_allow_list
			.matches(account.email.as_deref(), account.discord_id.as_deref());

		tracing::Span::current().record("is_admin", is_admin);

		if is_admin {
			Ok(())
		} else {
			Err(Error::forbidden())
		}
	}
}
