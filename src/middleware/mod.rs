//! Custom middleware.

pub mod cors;
pub mod logging;
