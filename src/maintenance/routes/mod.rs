//! HTTP handlers for maintenance routes.

mod get_status;
pub use get_status::*;
