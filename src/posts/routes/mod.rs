//! HTTP handlers for post routes.

mod get_many;
pub use get_many::*;

mod get_single;
pub use get_single::*;

mod create;
pub use create::*;

mod delete;
pub use delete::*;
