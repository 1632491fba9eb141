//! HTTP handlers for the `/admin/maintenance` route.

use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::maintenance::{MaintenanceWindow, MaintenanceWindowID, NewMaintenanceWindow};
use crate::sqlx::last_insert_id;
use crate::{responses, Error, Result};

/// Schedule a new maintenance window.
///
/// The window takes effect immediately and ends at the submitted end time.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  post,
  path = "/admin/maintenance",
  tag = "Admin",
  security(("session" = [])),
  request_body = NewMaintenanceWindow,
  responses(
    responses::Created<MaintenanceWindow>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::Forbidden,
    responses::InternalServerError,
  ),
)]
pub async fn create_maintenance(
	state: AppState,
	session: Session<IsAdmin>,
	Json(new_window): Json<NewMaintenanceWindow>,
) -> Result<responses::Created<Json<MaintenanceWindow>>> {
	let ends_on = new_window.validated_ends_on()?;

	let mut transaction = state.transaction().await?;

	let window_id: MaintenanceWindowID = sqlx::query(
		r"
		INSERT INTO
		  MaintenanceWindows (kind, reason, is_active, ends_on)
		VALUES
		  (?, ?, TRUE, ?)
		",
	)
	.bind(new_window.kind)
	.bind(new_window.reason.as_deref())
	.bind(ends_on)
	.execute(transaction.as_mut())
	.await
	.map(last_insert_id)??;

	let window = sqlx::query_as::<_, MaintenanceWindow>(
		r"
		SELECT
		  id,
		  kind,
		  reason,
		  is_active,
		  ends_on,
		  created_on
		FROM
		  MaintenanceWindows
		WHERE
		  id = ?
		",
	)
	.bind(window_id)
	.fetch_optional(transaction.as_mut())
	.await?
	.ok_or_else(|| Error::logic("inserted maintenance window is missing"))?;

	transaction.commit().await?;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%window_id,
		kind = ?new_window.kind,
		admin_id = %session.identity().user_id(),
		"scheduled maintenance window",
	};

	Ok(responses::Created(Json(window)))
}
