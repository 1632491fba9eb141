//! HTTP handlers for the `/posts` route.

use axum::extract::Query;
use axum::Json;

use crate::extractors::AppState;
use crate::parameters::{Limit, Offset};
use crate::posts::Post;
use crate::{responses, Result};

/// Query parameters for `/posts`.
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct GetPostsParams {
	/// Maximum number of results to return.
	#[serde(default)]
	pub limit: Limit,

	/// Pagination offset.
	#[serde(default)]
	pub offset: Offset,
}

/// Fetch published posts, newest first.
///
/// Rejected posts are never part of the public feed.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/posts",
  tag = "Posts",
  params(GetPostsParams),
  responses(
    responses::Ok<Post>,
    responses::InternalServerError,
  ),
)]
pub async fn get_many(
	state: AppState,
	Query(GetPostsParams { limit, offset }): Query<GetPostsParams>,
) -> Result<Json<Vec<Post>>> {
	let posts = sqlx::query_as::<_, Post>(
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
		  status = 'published'
		ORDER BY
		  created_on DESC
		LIMIT
		  ? OFFSET ?
		",
	)
	.bind(limit.0)
	.bind(offset.0)
	.fetch_all(state.database())
	.await?;

	Ok(Json(posts))
}
