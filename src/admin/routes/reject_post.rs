//! HTTP handlers for the `/admin/posts/{post_id}/reject` route.

use axum::extract::Path;
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::posts::{Post, PostID};
use crate::{responses, Error, Result};

/// Reject a post.
///
/// The post stays in the database but disappears from public listings. Rejecting an already
/// rejected post is a no-op and still returns the post.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  post,
  path = "/admin/posts/{post_id}/reject",
  tag = "Admin",
  security(("session" = [])),
  params(("post_id" = PostID, Path, description = "The post's ID")),
  responses(
    responses::Ok<Post>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn reject_post(
	state: AppState,
	session: Session<IsAdmin>,
	Path(post_id): Path<PostID>,
) -> Result<Json<Post>> {
	let mut transaction = state.transaction().await?;

	sqlx::query(
		r"
		UPDATE
		  Posts
		SET
		  status = 'rejected'
		WHERE
		  id = ?
		",
	)
	.bind(post_id)
	.execute(transaction.as_mut())
	.await?;

	let post = sqlx::query_as::<_, Post>(
		r"
		SELECT
		  id,
		  author_id,
		  content,
		  status,
		  created_on
		FROM
		  Posts
		WHERE
		  id = ?
		",
	)
	.bind(post_id)
	.fetch_optional(transaction.as_mut())
	.await?
	.ok_or_else(|| Error::not_found("post"))?;

	transaction.commit().await?;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%post_id,
		admin_id = %session.identity().user_id(),
		"rejected post",
	};

	Ok(Json(post))
}
