//! HTTP handlers for the `/admin/posts/{post_id}` route.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::posts::PostID;
use crate::sqlx::ensure_affected;
use crate::{responses, Result};

/// Response payload after deleting a post.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostDeleted {
	/// A human readable confirmation.
	pub message: String,
}

/// Delete any user's post.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  delete,
  path = "/admin/posts/{post_id}",
  tag = "Admin",
  security(("session" = [])),
  params(("post_id" = PostID, Path, description = "The post's ID")),
  responses(
    responses::Ok<PostDeleted>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn delete_post(
	state: AppState,
	session: Session<IsAdmin>,
	Path(post_id): Path<PostID>,
) -> Result<Json<PostDeleted>> {
	let query_result = sqlx::query(
		r"
		DELETE FROM
		  Posts
		WHERE
		  id = ?
		",
	)
	.bind(post_id)
	.execute(state.database())
	.await?;

	ensure_affected(query_result.rows_affected(), "post")?;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%post_id,
		admin_id = %session.identity().user_id(),
		"deleted post",
	};

	Ok(Json(PostDeleted { message: format!("deleted post {post_id}") }))
}
