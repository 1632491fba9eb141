//! HTTP handlers for admin routes.

mod reject_post;
pub use reject_post::*;

mod delete_post;
pub use delete_post::*;

mod delete_user;
pub use delete_user::*;

mod get_user_posts;
pub use get_user_posts::*;

mod get_user_warnings;
pub use get_user_warnings::*;

mod create_warning;
pub use create_warning::*;

mod create_maintenance;
pub use create_maintenance::*;

mod delete_maintenance;
pub use delete_maintenance::*;
