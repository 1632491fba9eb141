//! HTTP handlers for the `/maintenance/{kind}` route.

use axum::extract::Path;
use axum::Json;

use crate::extractors::AppState;
use crate::maintenance::{self, MaintenanceStatus, WindowKind};
use crate::responses;

/// Fetch the current maintenance status for a part of the site.
///
/// This route is infallible on purpose: the website calls it before profile edits and post
/// submissions, and an error here would lock users out of working features.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/maintenance/{kind}",
  tag = "Maintenance",
  params(("kind" = WindowKind, Path, description = "The part of the site to check")),
  responses(responses::Ok<MaintenanceStatus>),
)]
pub async fn get_status(
	state: AppState,
	Path(kind): Path<WindowKind>,
) -> Json<MaintenanceStatus> {
	Json(maintenance::current_status(kind, state.database()).await)
}
