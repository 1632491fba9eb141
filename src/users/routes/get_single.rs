//! HTTP handlers for the `/users/{user_id}` route.

use axum::extract::Path;
use axum::Json;

use crate::extractors::AppState;
use crate::users::{PublicUser, UserID};
use crate::{responses, Error, Result};

/// Fetch a user's public profile.
///
/// The response only contains fields that are safe to show to anyone; in particular, it never
/// contains the user's email address.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/users/{user_id}",
  tag = "Users",
  params(("user_id" = UserID, Path, description = "The user's ID")),
  responses(
    responses::Ok<PublicUser>,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn get_single(
	state: AppState,
	Path(user_id): Path<UserID>,
) -> Result<Json<PublicUser>> {
	let user = sqlx::query_as::<_, PublicUser>(
		r"
		SELECT
		  id,
		  name,
		  discord_username,
		  created_on
		FROM
		  Users
		WHERE
		  id = ?
		",
	)
	.bind(user_id)
	.fetch_optional(state.database())
	.await?
	.ok_or_else(|| Error::not_found("user"))?;

	Ok(Json(user))
}
