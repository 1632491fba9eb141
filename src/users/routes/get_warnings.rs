//! HTTP handlers for the `/user/warnings` route.

use axum::extract::Query;
use axum::Json;

use crate::authentication::Session;
use crate::extractors::AppState;
use crate::parameters::{Limit, Offset};
use crate::warnings::Warning;
use crate::{responses, Result};

/// Query parameters for `/user/warnings`.
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct GetWarningsParams {
	/// Maximum number of results to return.
	#[serde(default)]
	pub limit: Limit,

	/// Pagination offset.
	#[serde(default)]
	pub offset: Offset,
}

/// Fetch the warnings issued against your own account.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/user/warnings",
  tag = "Users",
  security(("session" = [])),
  params(GetWarningsParams),
  responses(
    responses::Ok<Warning>,
    responses::Unauthorized,
    responses::InternalServerError,
  ),
)]
pub async fn get_warnings(
	state: AppState,
	session: Session,
	Query(GetWarningsParams { limit, offset }): Query<GetWarningsParams>,
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
	.bind(session.identity().user_id())
	.bind(limit.0)
	.bind(offset.0)
	.fetch_all(state.database())
	.await?;

	Ok(Json(warnings))
}
