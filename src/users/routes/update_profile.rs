//! HTTP handlers for the `/user/profile` route.

use axum::Json;

use crate::authentication::Session;
use crate::extractors::AppState;
use crate::users::{ProfileUpdate, ProfileUpdated};
use crate::{responses, Error, Result};

/// Update your own profile.
///
/// Currently the only editable field is the display name.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  patch,
  path = "/user/profile",
  tag = "Users",
  security(("session" = [])),
  request_body = ProfileUpdate,
  responses(
    responses::Ok<ProfileUpdated>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::InternalServerError,
  ),
)]
pub async fn update_profile(
	state: AppState,
	session: Session,
	Json(profile_update): Json<ProfileUpdate>,
) -> Result<Json<ProfileUpdated>> {
	let name = profile_update.validated_name()?;

	let query_result = sqlx::query(
		r"
		UPDATE
		  Users
		SET
		  name = ?
		WHERE
		  id = ?
		",
	)
	.bind(name)
	.bind(session.identity().user_id())
	.execute(state.database())
	.await?;

	if query_result.rows_affected() == 0 {
		return Err(Error::logic("session user has no account row")
			.context(format!("user_id: {}", session.identity().user_id())));
	}

	tracing::debug! {
		target: "szoniska_api::audit_log",
		user_id = %session.identity().user_id(),
		new_name = %name,
		"updated display name",
	};

	Ok(Json(ProfileUpdated { success: true, name: name.to_owned() }))
}
