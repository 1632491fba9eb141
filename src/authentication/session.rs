//! Session authentication.
//!
//! This module contains the [`Session`] type, which acts as an [extractor].
//!
//! # Life Cycle
//!
//! The typical life cycle of a session is as follows:
//!    1. A request comes in, with a [session ID] inside a [cookie]
//!    2. [`Session`] acts as an [extractor] via its [`FromRequestParts`] implementation
//!       2.1. The auth [cookie] value will be extracted from the request headers and parsed into
//!            a UUID
//!       2.2. The session is looked up in the database, joined with the account it belongs to
//!       2.3. The session is authorized by invoking [`AuthorizeSession::authorize_session()`]
//!    3. The [session ID] and [identity] can be accessed by the request handler
//!
//! Sessions are created and refreshed by the OAuth login flow, which is not part of this API;
//! the extractor never writes to the `Sessions` table.
//!
//! Authorization decisions are computed fresh on every request. Nothing in this module caches a
//! decision across requests; a stale approval after the underlying account changed would be a
//! security defect.
//!
//! [extractor]: axum::extract
//! [session ID]: SessionID
//! [cookie]: COOKIE_NAME
//! [identity]: Identity

use std::marker::PhantomData;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request, HeaderMap};
use axum_extra::extract::cookie::Cookie;
use derive_more::{Debug, Display, From, Into};
use sqlx::FromRow;
use uuid::Uuid;

use crate::authentication::Identity;
use crate::authorization::{self, AuthorizeSession};
use crate::users::UserID;
use crate::{Error, Result, State};

/// The HTTP cookie name that stores the user's [session ID].
///
/// [session ID]: SessionID
pub const COOKIE_NAME: &str = "szoniska-auth";

/// A session's unique ID.
#[repr(transparent)]
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	From,
	Into,
	serde::Serialize,
	serde::Deserialize,
	sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct SessionID(Uuid);

/// A user session.
///
/// This type acts as an [extractor] for session authentication. The type parameter `A` decides
/// the authorization strategy that runs after the session is resolved; the default requires
/// nothing beyond a valid session.
///
/// [extractor]: axum::extract
#[derive(Debug, Clone)]
pub struct Session<A = authorization::None> {
	/// The session's ID.
	id: SessionID,

	/// The identity associated with this session.
	identity: Identity,

	/// Marker to tie an authorization method to any given [`Session`] without actually storing
	/// anything.
	#[debug(skip)]
	_authorization: PhantomData<A>,
}

impl<A> Session<A> {
	/// Returns this session's ID.
	pub const fn id(&self) -> SessionID {
		self.id
	}

	/// Returns the identity associated with this session.
	pub const fn identity(&self) -> &Identity {
		&self.identity
	}
}

/// A database row describing a live session and the account it belongs to.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(FromRow)]
struct SessionRow {
	id: SessionID,
	user_id: UserID,
	email: Option<String>,
	discord_id: Option<String>,
	discord_username: Option<String>,
}

/// Extracts a [session ID](SessionID) from the request's cookies.
///
/// Malformed cookie values are treated the same as a missing cookie.
fn find_session_id(headers: &HeaderMap) -> Option<Uuid> {
	headers
		.get_all(header::COOKIE)
		.into_iter()
		.flat_map(|value| value.to_str())
		.flat_map(|value| Cookie::split_parse_encoded(value.trim().to_owned()))
		.flatten()
		.find_map(|cookie| {
			if cookie.name() != COOKIE_NAME {
				return None;
			}

			cookie
				.value()
				.parse::<Uuid>()
				.inspect_err(|error| {
					tracing::debug! {
						cookie.value = %cookie.value(),
						%error,
						"found cookie but failed to parse value",
					}
				})
				.ok()
		})
}

#[async_trait]
impl<A> FromRequestParts<State> for Session<A>
where
	A: AuthorizeSession,
{
	type Rejection = Error;

	#[tracing::instrument(
		level = "debug",
		name = "auth::session::from_request_parts",
		skip_all,
		fields(session.id = tracing::field::Empty, session.user.id = tracing::field::Empty),
		err(level = "debug"),
	)]
	async fn from_request_parts(request: &mut request::Parts, state: &State) -> Result<Self> {
		let session_id =
			find_session_id(&request.headers).ok_or_else(|| Error::missing_session())?;

		let current_span = tracing::Span::current();

		current_span.record("session.id", format_args!("{session_id}"));

		let mut transaction = state.transaction().await?;

		tracing::debug!("fetching session from database");

		let session = sqlx::query_as::<_, SessionRow>(
			r"
			SELECT
			  s.id,
			  u.id AS user_id,
			  u.email,
			  u.discord_id,
			  u.discord_username
			FROM
			  Sessions s
			  JOIN Users u ON u.id = s.user_id
			WHERE
			  s.id = ?
			  AND s.expires_on > NOW()
			",
		)
		.bind(session_id)
		.fetch_optional(transaction.as_mut())
		.await?
		.ok_or_else(|| Error::invalid_session())?;

		current_span.record("session.user.id", format_args!("{}", session.user_id));

		tracing::debug!("successfully authenticated session");

		let session = Self {
			id: session.id,
			identity: Identity::new(
				session.user_id,
				session.email,
				session.discord_id,
				session.discord_username,
			),
			_authorization: PhantomData,
		};

		tracing::debug! {
			method = std::any::type_name::<A>().split("::").last().unwrap(),
			"authorizing session",
		};

		A::authorize_session(&session.identity, request, state, &mut transaction).await?;

		transaction.commit().await?;

		Ok(session)
	}
}

#[cfg(test)]
mod tests {
	use axum::http::{header, HeaderMap, HeaderValue};
	use uuid::Uuid;

	use super::find_session_id;

	#[test]
	fn finds_the_auth_cookie_among_others() {
		let session_id = Uuid::new_v4();
		let mut headers = HeaderMap::new();

		headers.insert(
			header::COOKIE,
			format!("theme=dark; szoniska-auth={session_id}; lang=hu")
				.parse::<HeaderValue>()
				.unwrap(),
		);

		assert_eq!(find_session_id(&headers), Some(session_id));
	}

	#[test]
	fn missing_cookie_means_no_session() {
		let headers = HeaderMap::new();

		assert_eq!(find_session_id(&headers), None);
	}

	#[test]
	fn malformed_session_id_is_ignored() {
		let mut headers = HeaderMap::new();

		headers.insert(
			header::COOKIE,
			HeaderValue::from_static("szoniska-auth=not-a-uuid"),
		);

		assert_eq!(find_session_id(&headers), None);
	}
}
