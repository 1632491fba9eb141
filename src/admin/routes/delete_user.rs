//! HTTP handlers for the `/admin/users/{user_id}/delete` route.

use axum::extract::Path;
use axum::Json;

use crate::authentication::Session;
use crate::authorization::IsAdmin;
use crate::extractors::AppState;
use crate::responses::{self, Success};
use crate::sqlx::ensure_affected;
use crate::users::UserID;
use crate::{Error, Result};

/// Delete a user account.
///
/// Everything referencing the account (sessions, posts, warnings) is removed along with it by
/// the schema's cascading foreign keys.
///
/// The administrator cannot delete their own account through this route; that would revoke the
/// session performing the request and leave the platform without an admin.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  delete,
  path = "/admin/users/{user_id}/delete",
  tag = "Admin",
  security(("session" = [])),
  params(("user_id" = UserID, Path, description = "The user's ID")),
  responses(
    responses::Ok<Success>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::Forbidden,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn delete_user(
	state: AppState,
	session: Session<IsAdmin>,
	Path(user_id): Path<UserID>,
) -> Result<Json<Success>> {
	ensure_not_self(user_id, session.identity().user_id())?;

	let query_result = sqlx::query(
		r"
		DELETE FROM
		  Users
		WHERE
		  id = ?
		",
	)
	.bind(user_id)
	.execute(state.database())
	.await?;

	ensure_affected(query_result.rows_affected(), "user")?;

	tracing::info! {
		target: "szoniska_api::audit_log",
		%user_id,
		admin_id = %session.identity().user_id(),
		"deleted user",
	};

	Ok(Json(Success::new()))
}

/// Rejects the administrator deleting their own account.
///
/// Authorization alone would allow it, so this runs before the delete is issued.
fn ensure_not_self(target: UserID, admin: UserID) -> Result<()> {
	if target == admin {
		return Err(Error::cannot_delete_self());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use axum::http::StatusCode;
	use axum::response::IntoResponse;
	use uuid::Uuid;

	use super::ensure_not_self;
	use crate::users::UserID;

	#[test]
	fn admins_cannot_delete_their_own_account() {
		let admin = UserID(Uuid::new_v4());

		let error = ensure_not_self(admin, admin).unwrap_err();

		assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn other_accounts_pass_the_guard() {
		let admin = UserID(Uuid::new_v4());
		let target = UserID(Uuid::new_v4());

		assert!(ensure_not_self(target, admin).is_ok());
	}
}
