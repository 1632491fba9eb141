//! HTTP handlers for the `/posts/{post_id}` route.

use axum::extract::Path;
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsPostAuthor;
use crate::extractors::AppState;
use crate::posts::PostID;
use crate::responses::{self, Success};
use crate::sqlx::ensure_affected;
use crate::Result;

/// Delete one of your own posts.
///
/// The administrator may delete anyone's post through this route as well, though the dedicated
/// `/admin/posts/{post_id}` route exists for that.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  delete,
  path = "/posts/{post_id}",
  tag = "Posts",
  security(("session" = [])),
  params(("post_id" = PostID, Path, description = "The post's ID")),
  responses(
    responses::Ok<Success>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn delete(
	state: AppState,
	session: Session<IsPostAuthor>,
	Path(post_id): Path<PostID>,
) -> Result<Json<Success>> {
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

	tracing::debug! {
		target: "szoniska_api::audit_log",
		%post_id,
		user_id = %session.identity().user_id(),
		"deleted post",
	};

	Ok(Json(Success::new()))
}
