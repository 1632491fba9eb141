//! No authorization.
//!
//! This is the default authorization method. A valid session is still required; this strategy
//! corresponds to routes that any logged-in user may call.

use axum::http::request;
use sqlx::{MySql, Transaction};

use super::AuthorizeSession;
use crate::{authentication, Result, State};

/// An authorization method which always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct None;

impl AuthorizeSession for None {
	async fn authorize_session(
		_identity: &authentication::Identity,
		_req: &mut request::Parts,
		_state: &State,
		_transaction: &mut Transaction<'static, MySql>,
	) -> Result<()> {
		Ok(())
	}
}
