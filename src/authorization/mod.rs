//! Everything related to authorization.
//!
//! Routes declare the capability they require by picking an authorization strategy for their
//! [`Session`] extractor. Strategies run *before* the handler body, so a denied request never
//! reaches the data operation.
//!
//! [`Session`]: crate::authentication::Session

use std::future::Future;

use axum::http::request;
use sqlx::{MySql, Transaction};

use crate::{authentication, Result, State};

mod allow_list;
pub use allow_list::AdminAllowList;

mod none;
pub use none::None;

mod is_admin;
pub use is_admin::IsAdmin;

mod is_post_author;
pub use is_post_author::IsPostAuthor;

/// Used for deciding an authorization strategy when doing [session authentication].
///
/// [session authentication]: crate::authentication::session
pub trait AuthorizeSession: Send + Sync + 'static {
	/// Authorize a session for the given `identity`.
	fn authorize_session(
		identity: &authentication::Identity,
		req: &mut request::Parts,
		state: &State,
		transaction: &mut Transaction<'static, MySql>,
	) -> impl Future<Output = Result<()>> + Send;
}
