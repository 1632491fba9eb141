//! Everything related to maintenance windows.
//!
//! The administrator can schedule maintenance windows for parts of the site (profile editing,
//! posting). The website polls `/maintenance/{kind}` to decide whether to lock the corresponding
//! UI. Checking the current status must never take the site down with it, so a failed lookup is
//! reported as "no maintenance".

use axum::{routing, Router};
use sqlx::{MySql, Pool};

use crate::middleware::cors;
use crate::State;

pub mod models;
pub use models::{MaintenanceStatus, MaintenanceWindow, MaintenanceWindowID, NewMaintenanceWindow, WindowKind};

pub mod routes;

/// Returns a router with routes for `/maintenance`.
pub fn router(state: State) -> Router {
	Router::new()
		.route("/:kind", routing::get(routes::get_status))
		.route_layer(cors::permissive())
		.with_state(state)
}

/// Returns the current maintenance status for the given `kind`.
///
/// A window counts as active if it is flagged active and has not ended yet. If several qualify,
/// the most recently created one wins. Database errors are logged and reported as "no
/// maintenance" so that an outage of this table never blocks the rest of the site.
#[tracing::instrument(level = "debug", skip(database))]
pub async fn current_status(kind: WindowKind, database: &Pool<MySql>) -> MaintenanceStatus {
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
		  kind = ?
		  AND is_active = TRUE
		  AND ends_on > NOW()
		ORDER BY
		  created_on DESC
		LIMIT
		  1
		",
	)
	.bind(kind)
	.fetch_optional(database)
	.await;

	match window {
		Ok(Some(window)) => MaintenanceStatus::active(&window),
		Ok(None) => MaintenanceStatus::inactive(),
		Err(error) => {
			tracing::error!(%error, ?kind, "failed to look up maintenance window");

			MaintenanceStatus::inactive()
		}
	}
}
