//! Everything related to warnings.
//!
//! Warnings are moderation notes issued against a user by the administrator. They have no
//! routes of their own; users read their own warnings via `/user/warnings` and the
//! administrator manages them via `/admin/users/{user_id}/warnings`.

pub mod models;
pub use models::{CreatedWarning, NewWarning, Warning, WarningID};
