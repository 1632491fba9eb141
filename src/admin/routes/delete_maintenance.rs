//! HTTP handlers for the `/admin/maintenance/{window_id}` route.

use axum::extract::Path;
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::maintenance::MaintenanceWindowID;
use crate::responses::{self, Success};
use crate::sqlx::ensure_affected;
use crate::Result;

/// End a maintenance window early.
///
/// The window row is kept for the record; it is merely deactivated.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  delete,
  path = "/admin/maintenance/{window_id}",
  tag = "Admin",
  security(("session" = [])),
  params(("window_id" = MaintenanceWindowID, Path, description = "The maintenance window's ID")),
  responses(
    responses::Ok<Success>,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn delete_maintenance(
	state: AppState,
	session: Session<IsAdmin>,
	Path(window_id): Path<MaintenanceWindowID>,
) -> Result<Json<Success>> {
	let query_result = sqlx::query(
		r"
		UPDATE
		  MaintenanceWindows
		SET
		  is_active = FALSE
		WHERE
		  id = ?
		  AND is_active = TRUE
		",
	)
	.bind(window_id)
	.execute(state.database())
	.await?;

	ensure_affected(query_result.rows_affected(), "maintenance window")?;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%window_id,
		admin_id = %session.identity().user_id(),
		"ended maintenance window",
	};

	Ok(Json(Success::new()))
}
