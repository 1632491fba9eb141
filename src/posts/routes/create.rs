//! HTTP handlers for the `/posts` route.

use axum::Json;

use crate::authentication::Session;
use crate::extractors::AppState;
use crate::posts::{CreatedPost, NewPost};
use crate::sqlx::last_insert_id;
use crate::{responses, Result};

/// Create a new post.
///
/// The post is published immediately; moderation happens after the fact via the `/admin` routes.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  post,
  path = "/posts",
  tag = "Posts",
  security(("session" = [])),
  request_body = NewPost,
  responses(
    responses::Created<CreatedPost>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::InternalServerError,
  ),
)]
pub async fn create(
	state: AppState,
	session: Session,
	Json(new_post): Json<NewPost>,
) -> Result<responses::Created<Json<CreatedPost>>> {
	let content = new_post.validated_content()?;

	let post_id = sqlx::query(
		r"
		INSERT INTO
		  Posts (author_id, content, status)
		VALUES
		  (?, ?, 'published')
		",
	)
	.bind(session.identity().user_id())
	.bind(content)
	.execute(state.database())
	.await
	.map(last_insert_id)??;

	tracing::debug! {
		target: "szoniska_api::audit_log",
		%post_id,
		author_id = %session.identity().user_id(),
		"created post",
	};

	Ok(responses::Created(Json(CreatedPost { post_id })))
}
