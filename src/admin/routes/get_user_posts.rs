//! HTTP handlers for the `/admin/users/{user_id}/posts` route.

use axum::extract::{Path, Query};
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::parameters::{Limit, Offset};
use crate::posts::Post;
use crate::users::UserID;
use crate::{responses, Result};

/// Query parameters for `/admin/users/{user_id}/posts`.
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct GetUserPostsParams {
	/// Maximum number of results to return.
	#[serde(default)]
	pub limit: Limit,

	/// Pagination offset.
	#[serde(default)]
	pub offset: Offset,
}

/// Fetch a user's posts, rejected ones included.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/admin/users/{user_id}/posts",
  tag = "Admin",
  security(("session" = [])),
  params(("user_id" = UserID, Path, description = "The user's ID"), GetUserPostsParams),
  responses(
    responses::Ok<Post>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::InternalServerError,
  ),
)]
pub async fn get_user_posts(
	state: AppState,
	session: Session<IsAdmin>,
	Path(user_id): Path<UserID>,
	Query(GetUserPostsParams { limit, offset }): Query<GetUserPostsParams>,
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
		  author_id = ?
		ORDER BY
		  created_on DESC
		LIMIT
		  ? OFFSET ?
		",
	)
	.bind(user_id)
	.bind(limit.0)
	.bind(offset.0)
	.fetch_all(state.database())
	.await?;

	Ok(Json(posts))
}
