//! Everything related to users.
//!
//! Accounts are created by the OAuth login flow; this module reads them, lets users update their
//! own profile, and lets them review warnings issued against them.

use axum::http::Method;
use axum::{routing, Router};

use crate::middleware::cors;
use crate::State;

pub mod models;
pub use models::{ProfileUpdate, ProfileUpdated, PublicUser, UserID};

pub mod routes;

/// Returns a router with routes for `/users`.
pub fn router(state: State) -> Router {
	Router::new()
		.route("/:user_id", routing::get(routes::get_single))
		.route_layer(cors::permissive())
		.with_state(state)
}

/// Returns a router with routes for `/user` (the currently logged-in user).
pub fn self_router(state: State) -> Router {
	Router::new()
		.route("/profile", routing::patch(routes::update_profile))
		.route("/warnings", routing::get(routes::get_warnings))
		.route_layer(cors::website([Method::OPTIONS, Method::GET, Method::PATCH]))
		.with_state(state)
}
