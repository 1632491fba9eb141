//! HTTP handlers for the `/posts/{post_id}` route.

use axum::extract::Path;
use axum::Json;

use crate::extractors::AppState;
use crate::posts::{Post, PostID};
use crate::{responses, Error, Result};

/// Fetch a single published post.
///
/// Rejected posts are not publicly visible, so they produce a 404 here just like posts that
/// never existed.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/posts/{post_id}",
  tag = "Posts",
  params(("post_id" = PostID, Path, description = "The post's ID")),
  responses(
    responses::Ok<Post>,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn get_single(state: AppState, Path(post_id): Path<PostID>) -> Result<Json<Post>> {
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
		  AND status = 'published'
		",
	)
	.bind(post_id)
	.fetch_optional(state.database())
	.await?
	.ok_or_else(|| Error::not_found("post"))?;

	Ok(Json(post))
}
