//! HTTP handlers for the `/admin/users/{user_id}/warnings` route.

use axum::extract::Path;
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::sqlx::{last_insert_id, SqlErrorExt};
use crate::users::UserID;
use crate::warnings::{CreatedWarning, NewWarning};
use crate::{responses, Error, Result};

/// Issue a warning against a user.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  post,
  path = "/admin/users/{user_id}/warnings",
  tag = "Admin",
  security(("session" = [])),
  params(("user_id" = UserID, Path, description = "The user's ID")),
  request_body = NewWarning,
  responses(
    responses::Created<CreatedWarning>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn create_warning(
	state: AppState,
	session: Session<IsAdmin>,
	Path(user_id): Path<UserID>,
	Json(new_warning): Json<NewWarning>,
) -> Result<responses::Created<Json<CreatedWarning>>> {
	let reason = new_warning.validated_reason()?;

	let warning_id = sqlx::query(
		r"
		INSERT INTO
		  Warnings (user_id, reason, issued_by)
		VALUES
		  (?, ?, ?)
		",
	)
	.bind(user_id)
	.bind(reason)
	.bind(session.identity().user_id())
	.execute(state.database())
	.await
	.map_err(|error| {
		if error.is_fk_violation_of("user_id") {
			Error::not_found("user")
		} else {
			Error::from(error)
		}
	})
	.map(last_insert_id)??;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%warning_id,
		%user_id,
		admin_id = %session.identity().user_id(),
		"issued warning",
	};

	Ok(responses::Created(Json(CreatedWarning { warning_id })))
}
