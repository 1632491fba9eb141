//! HTTP handlers for user routes.

mod get_single;
pub use get_single::*;

mod update_profile;
pub use update_profile::*;

mod get_warnings;
pub use get_warnings::*;
