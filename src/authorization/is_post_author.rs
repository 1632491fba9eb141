//! Authorization for `/posts` routes, checking if the requesting user is either the
//! administrator or the author of the post that is being modified.

use axum::extract::{FromRequestParts, Path};
use axum::http::request;
use sqlx::{MySql, Transaction};

use super::AuthorizeSession;
use crate::authorization;
use crate::posts::PostID;
use crate::{authentication, Error, Result, State};

/// An authorization method that checks if the requesting user is either the administrator, or
/// the author of the post that is supposed to be modified by the request.
#[derive(Debug, Clone, Copy)]
pub struct IsPostAuthor;

impl AuthorizeSession for IsPostAuthor {
	#[tracing::instrument(
		level = "debug",
		name = "auth::is_post_author",
		skip_all,
		fields(
			user.id = %identity.user_id(),
			is_admin = tracing::field::Empty,
			post.id = tracing::field::Empty,
			is_author = tracing::field::Empty,
		),
	)]
	async fn authorize_session(
		identity: &authentication::Identity,
		req: &mut request::Parts,
		state: &State,
		transaction: &mut Transaction<'static, MySql>,
	) -> Result<()> {
		let current_span = tracing::Span::current();

		match authorization::IsAdmin::authorize_session(identity, req, state, transaction).await {
			Ok(()) => {
				current_span.record("is_admin", true);

				return Ok(());
			}

			// A regular user may still be the author. Anything other than a denial (e.g. a
			// failed account lookup) must propagate instead of masquerading as one.
			Err(error) if error.is_forbidden() => {
				current_span.record("is_admin", false);
			}

			Err(error) => return Err(error),
		}

		let Path(post_id) = Path::<PostID>::from_request_parts(req, &()).await?;

		current_span.record("post.id", format_args!("{post_id}"));

		let is_author = sqlx::query_scalar::<_, u64>(
			r"
			SELECT
			  id
			FROM
			  Posts
			WHERE
			  id = ?
			  AND author_id = ?
			",
		)
		.bind(post_id)
		.bind(identity.user_id())
		.fetch_optional(transaction.as_mut())
		.await?
		.is_some();

		current_span.record("is_author", is_author);

		if !is_author {
			return Err(Error::forbidden().context("user is not the post's author"));
		}

		Ok(())
	}
}
