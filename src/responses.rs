//! Response helpers shared by the route handlers.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use serde::Serialize;
use utoipa::openapi::response::Response as OpenApiResponse;
use utoipa::openapi::RefOr;
use utoipa::{IntoResponses, ToSchema};

/// A plain `{ "success": true }` response body.
///
/// Several `DELETE` handlers have nothing meaningful to return; they respond with this marker
/// instead so clients always get a JSON body.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Success {
	/// Always `true`.
	pub success: bool,
}

impl Success {
	/// Creates a new [`Success`] marker.
	pub const fn new() -> Self {
		Self { success: true }
	}
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = OK)]
pub struct Ok<T: ToSchema<'static>>(#[to_schema] T);

/// Wrapper struct for turning any `T` into a [Response] with status code 201.
///
/// [Response]: axum::response::Response
#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T> IntoResponses for Created<T>
where
	T: ToSchema<'static>,
{
	fn responses() -> BTreeMap<String, RefOr<OpenApiResponse>> {
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(IntoResponses)]
		#[response(status = CREATED)]
		struct Helper<T: ToSchema<'static>>(#[to_schema] T);

		Helper::<T>::responses()
	}
}

impl<T> IntoResponse for Created<T>
where
	T: IntoResponse,
{
	fn into_response(self) -> AxumResponse {
		(StatusCode::CREATED, self.0).into_response()
	}
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = BAD_REQUEST)]
pub struct BadRequest;

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = UNAUTHORIZED)]
pub struct Unauthorized;

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = FORBIDDEN)]
pub struct Forbidden;

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = NOT_FOUND)]
pub struct NotFound;

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
#[derive(IntoResponses)]
#[response(status = INTERNAL_SERVER_ERROR, description = "Something unexpected happened. This is a bug; please report it.")]
pub struct InternalServerError;
