//! HTTP handlers for the `/admin/users/{user_id}/warnings` route.

use axum::extract::{Path, Query};
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::parameters::{Limit, Offset};
use crate::users::UserID;
use crate::warnings::Warning;
use crate::{responses, Result};

/// Query parameters for `/admin/users/{user_id}/warnings`.
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct GetUserWarningsParams {
	/// Maximum number of results to return.
	#[serde(default)]
	pub limit: Limit,

	/// Pagination offset.
	#[serde(default)]
	pub offset: Offset,
}

/// Fetch the warnings issued against a user.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/admin/users/{user_id}/warnings",
  tag = "Admin",
  security(("session" = [])),
  params(("user_id" = UserID, Path, description = "The user's ID"), GetUserWarningsParams),
  responses(
    responses::Ok<Warning>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::InternalServerError,
  ),
)]
pub async fn get_user_warnings(
	state: AppState,
	session: Session<IsAdmin>,
	Path(user_id): Path<UserID>,
	Query(GetUserWarningsParams { limit, offset }): Query<GetUserWarningsParams>,
) -> Result<Json<Vec<Warning>>> {
	let warnings = sqlx::query_as::<_, Warning>(
		r"
		SELECT
		  id,
		  user_id,
		  reason,
		  issued_by,
		  created_on
		FROM
		  Warnings
		WHERE
		  user_id = ?
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

	Ok(Json(warnings))
}
