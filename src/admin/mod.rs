//! Routes reserved for the administrator.
//!
//! Everything nested under `/admin` requires a session whose account matches the admin
//! allow-list; see [`crate::authorization::IsAdmin`]. The handlers themselves are thin: the
//! authorization work happens in the session extractor before any of them run.

use axum::http::Method;
use axum::{routing, Router};

use crate::middleware::cors;
use crate::State;

pub mod routes;

/// Returns a router with routes for `/admin`.
pub fn router(state: State) -> Router {
	Router::new()
		.route("/posts/:post_id/reject", routing::post(routes::reject_post))
		.route("/posts/:post_id", routing::delete(routes::delete_post))
		.route("/users/:user_id/delete", routing::delete(routes::delete_user))
		.route("/users/:user_id/posts", routing::get(routes::get_user_posts))
		.route(
			"/users/:user_id/warnings",
			routing::get(routes::get_user_warnings).post(routes::create_warning),
		)
		.route("/maintenance", routing::post(routes::create_maintenance))
		.route("/maintenance/:window_id", routing::delete(routes::delete_maintenance))
		.route_layer(cors::website([
			Method::OPTIONS,
			Method::GET,
			Method::POST,
			Method::DELETE,
		]))
		.with_state(state)
}
