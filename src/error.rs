//! Runtime errors.
//!
//! This module exposes the [`Error`] type that is used across the code base for bubbling up
//! errors. Any foreign errors that can occur at runtime can be turned into an [`Error`]. Specific
//! error cases have dedicated constructors, see all the public methods on [`Error`].
//!
//! [`Error`] implements [`IntoResponse`], which means it can be returned from HTTP handlers,
//! middleware, etc. Every response produced here is a JSON object with a single `error` field and
//! the matching HTTP status; error sources are logged server-side but never included in the
//! response body.
//!
//! This module also exposes a [`Result`] type alias, which sets [`Error`] as the default `E` type
//! parameter.
//!
//! [`Error`]: struct@Error

use std::fmt::{self, Display, Formatter};
use std::panic::Location;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result`]: std::result::Result
/// [`Error`]: struct@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The API's core error type.
///
/// Any errors that ever reach the outside should be this type.
/// It carries information about the kind of error that occurred, where it occurred, and any extra
/// information like error sources or debug messages.
///
/// This type implements [`IntoResponse`], which means it can be returned from HTTP handlers,
/// middleware, etc.
#[derive(Debug, Error)]
pub struct Error {
	/// The kind of error that occurred.
	///
	/// This is used for determining the HTTP status code and error message for the response
	/// body, when an error is returned from a request.
	kind: ErrorKind,

	/// The source code location of where the error occurred.
	///
	/// This is used for debugging / troubleshooting, and is included in logs.
	location: Location<'static>,

	/// Extra information about the error, like source errors or debug messages.
	attachments: Vec<Attachment>,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self {
			kind,
			location,
			attachments,
		} = self;

		write!(f, "[{location}] {kind}")?;

		if !attachments.is_empty() {
			write!(f, ":")?;

			for attachment in attachments.iter().rev() {
				write!(f, "\n  - {attachment}")?;
			}
		}

		Ok(())
	}
}

#[allow(clippy::missing_docs_in_private_items)]
const FORBIDDEN_MSG: &str = "you are not permitted to perform this action";

/// The different kinds of errors that can occur at runtime.
///
/// Every individual error case should be covered by this enum, with its own error message and any
/// extra information that is necessary to keep around.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Error)]
enum ErrorKind {
	#[error("you are not logged in")]
	MissingSession,

	#[error("you are not logged in")]
	InvalidSession,

	#[error("{FORBIDDEN_MSG}")]
	Forbidden,

	#[error("invalid {what}")]
	InvalidInput { what: String },

	#[error("could not find {what}")]
	NotFound { what: String },

	#[error("cannot delete your own account")]
	CannotDeleteSelf,

	#[error("internal server error")]
	Logic(String),

	#[error("internal server error")]
	Database(#[from] sqlx::Error),

	#[error(transparent)]
	Path(#[from] PathRejection),
}

#[allow(clippy::missing_docs_in_private_items)]
type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Generic error attachments.
#[derive(Debug)]
struct Attachment {
	/// The attachment context.
	///
	/// This could be a more concrete error type, e.g. from a third party crate, or simply an
	/// error message.
	context: BoxedError,

	/// The source code location of where this attachment was created.
	location: Location<'static>,
}

impl Display for Attachment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' at {}", self.context, self.location)
	}
}

impl Attachment {
	/// Creates a new [`Attachment`].
	#[track_caller]
	fn new<C>(context: C) -> Self
	where
		C: Into<BoxedError>,
	{
		Self {
			context: context.into(),
			location: *Location::caller(),
		}
	}
}

impl Error {
	/// Creates a new [`Error`] of the given [`ErrorKind`].
	///
	/// [`Error`]: struct@Error
	#[track_caller]
	fn new<E>(kind: E) -> Self
	where
		E: Into<ErrorKind>,
	{
		Self {
			kind: kind.into(),
			location: *Location::caller(),
			attachments: Vec::new(),
		}
	}

	/// Attach additional context to an error.
	///
	/// This can be another, more concrete, error type, or simply an error message.
	/// If `ctx` is also an [`Error`], it will have its attachments transferred to `self`.
	///
	/// [`Error`]: struct@Error
	#[track_caller]
	pub(crate) fn context<E>(mut self, ctx: E) -> Self
	where
		E: Into<BoxedError>,
	{
		match Into::<BoxedError>::into(ctx).downcast::<Self>() {
			Ok(mut err) => {
				self.attachments.append(&mut err.attachments);
				self.attachments.push(Attachment::new(err.kind));
			}
			Err(other) => {
				self.attachments.push(Attachment::new(other));
			}
		}

		self
	}

	/// An error signaling that a request did not contain a session cookie.
	///
	/// For more information about session authentication, see
	/// [`crate::authentication::session`].
	///
	/// Produces a `401 Unauthorized` status.
	#[track_caller]
	pub(crate) fn missing_session() -> Self {
		Self::new(ErrorKind::MissingSession)
	}

	/// An error signaling that a session cookie did not correspond to a live session.
	///
	/// This covers both unknown and expired session IDs; the two are deliberately not
	/// distinguishable from the outside.
	///
	/// Produces a `401 Unauthorized` status.
	#[track_caller]
	pub(crate) fn invalid_session() -> Self {
		Self::new(ErrorKind::InvalidSession)
	}

	/// An error signaling an authorization failure.
	///
	/// If you can, you should [attach additional context][context] to such an error to make
	/// debugging the cause of the error easier later.
	///
	/// Produces a `403 Forbidden` status.
	///
	/// [context]: Error::context()
	#[track_caller]
	pub(crate) fn forbidden() -> Self {
		Self::new(ErrorKind::Forbidden)
	}

	/// An error signaling invalid user input.
	///
	/// Produces a `400 Bad Request` status.
	#[track_caller]
	pub(crate) fn invalid<T>(what: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::InvalidInput {
			what: what.to_string(),
		})
	}

	/// An error signaling that a resource could not be found.
	///
	/// Produces a `404 Not Found` status.
	#[track_caller]
	pub(crate) fn not_found<T>(what: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::NotFound {
			what: what.to_string(),
		})
	}

	/// Checks whether this error is an authorization failure.
	///
	/// Composite authorization strategies use this to tell "denied" apart from an error during
	/// the check itself; only the former may fall through to the next rule.
	pub(crate) fn is_forbidden(&self) -> bool {
		matches!(self.kind, ErrorKind::Forbidden)
	}

	/// An error for when an administrator attempts to delete their own account.
	///
	/// Authorization would otherwise allow the operation, so handlers check for this case
	/// explicitly before the delete is issued.
	///
	/// Produces a `400 Bad Request` status.
	#[track_caller]
	pub(crate) fn cannot_delete_self() -> Self {
		Self::new(ErrorKind::CannotDeleteSelf)
	}

	/// A generic `500 Internal Server Error`.
	///
	/// This constructor is reserved for errors that _should not_ occur, but _may_ occur. If
	/// such an error is ever returned, that's a bug.
	#[track_caller]
	pub(crate) fn logic<T>(message: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::Logic(message.to_string()))
	}
}

impl IntoResponse for Error {
	#[track_caller]
	fn into_response(self) -> Response {
		use ErrorKind as E;

		let message = self.kind.to_string();
		let status = match self.kind {
			E::MissingSession | E::InvalidSession => StatusCode::UNAUTHORIZED,
			E::Forbidden => StatusCode::FORBIDDEN,
			E::InvalidInput { .. } | E::CannotDeleteSelf => StatusCode::BAD_REQUEST,
			E::NotFound { .. } => StatusCode::NOT_FOUND,
			E::Logic(_) | E::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
			E::Path(ref rej) => rej.status(),
		};

		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(?self, "internal server error occurred");
		} else {
			tracing::debug! {
				location = %self.location,
				kind = ?self.kind,
				attachments = ?self.attachments,
				error_message = %message,
				"returning error from request handler",
			};
		}

		(status, Json(json!({ "error": message }))).into_response()
	}
}

impl From<sqlx::Error> for Error {
	#[track_caller]
	fn from(error: sqlx::Error) -> Self {
		Self::new(error)
	}
}

impl From<PathRejection> for Error {
	#[track_caller]
	fn from(rejection: PathRejection) -> Self {
		Self::new(rejection)
	}
}

#[cfg(test)]
mod tests {
	use axum::http::StatusCode;
	use axum::response::IntoResponse;

	use super::Error;

	#[test]
	fn statuses_follow_the_error_taxonomy() {
		assert_eq!(status_of(Error::missing_session()), StatusCode::UNAUTHORIZED);
		assert_eq!(status_of(Error::invalid_session()), StatusCode::UNAUTHORIZED);
		assert_eq!(status_of(Error::forbidden()), StatusCode::FORBIDDEN);
		assert_eq!(status_of(Error::invalid("display name")), StatusCode::BAD_REQUEST);
		assert_eq!(status_of(Error::cannot_delete_self()), StatusCode::BAD_REQUEST);
		assert_eq!(status_of(Error::not_found("user")), StatusCode::NOT_FOUND);
		assert_eq!(status_of(Error::logic("oops")), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			status_of(Error::from(sqlx::Error::PoolClosed)),
			StatusCode::INTERNAL_SERVER_ERROR,
		);
	}

	#[test]
	fn database_errors_do_not_leak_details() {
		let error = Error::from(sqlx::Error::PoolClosed);

		assert_eq!(error.kind.to_string(), "internal server error");
	}

	#[test]
	fn only_authorization_failures_count_as_forbidden() {
		assert!(Error::forbidden().is_forbidden());
		assert!(!Error::missing_session().is_forbidden());
		assert!(!Error::from(sqlx::Error::PoolClosed).is_forbidden());
	}

	#[test]
	fn attachments_are_not_part_of_the_client_message() {
		let error = Error::forbidden().context("session belongs to a regular user");

		assert_eq!(error.kind.to_string(), "you are not permitted to perform this action");
	}

	#[allow(clippy::missing_docs_in_private_items)]
	fn status_of(error: Error) -> StatusCode {
		error.into_response().status()
	}
}
