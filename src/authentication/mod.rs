//! Everything related to authentication.
//!
//! Sessions are *issued* by the OAuth collaborator (the website's login flow writes a row into
//! the `Sessions` table and hands the browser a cookie). This module only *resolves* them: it
//! turns an inbound request into an [`Identity`], or rejects the request as unauthenticated.

mod identity;

#[doc(inline)]
pub use identity::Identity;

pub mod session;

#[doc(inline)]
pub use session::Session;
