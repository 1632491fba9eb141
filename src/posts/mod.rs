//! Everything related to posts.
//!
//! Posts are the content users share on the platform. Anyone can read published posts; authors
//! can create and delete their own, and the administrator can additionally reject or delete any
//! post via the `/admin` routes.

use axum::http::Method;
use axum::{routing, Router};

use crate::middleware::cors;
use crate::State;

pub mod models;
pub use models::{CreatedPost, NewPost, Post, PostID, PostStatus};

pub mod routes;

/// Returns a router with routes for `/posts`.
pub fn router(state: State) -> Router {
	let delete = Router::new()
		.route("/:post_id", routing::delete(routes::delete))
		.route_layer(cors::website([Method::OPTIONS, Method::DELETE]))
		.with_state(state.clone());

	Router::new()
		.route("/", routing::get(routes::get_many))
		.route("/:post_id", routing::get(routes::get_single))
		.route_layer(cors::permissive())
		.route("/", routing::post(routes::create))
		.route_layer(cors::website(Method::POST))
		.with_state(state)
		.merge(delete)
}
