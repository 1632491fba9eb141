//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI specification from code.
//! The [`Spec`] struct in this module lists out all the relevant types, routes, and other metadata
//! that will be included in the spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use derive_more::{Deref, DerefMut};
use itertools::Itertools;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Registers the session cookie as a security scheme.
struct Security;

impl Modify for Security {
	fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
		let session = SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
			crate::authentication::session::COOKIE_NAME,
		)));

		let components = openapi.components.get_or_insert_with(Default::default);

		components.add_security_schemes_from_iter([("session", session)]);
	}
}

#[derive(Debug, Clone, Deref, DerefMut, OpenApi)]
#[openapi(
  info(
    title = "Szoniska API",
    description = "The HTTP API powering the Szoniska website.",
  ),
  modifiers(&Security),
  paths(
    crate::users::routes::get_single,
    crate::users::routes::update_profile,
    crate::users::routes::get_warnings,

    crate::posts::routes::get_many,
    crate::posts::routes::get_single,
    crate::posts::routes::create,
    crate::posts::routes::delete,

    crate::admin::routes::reject_post,
    crate::admin::routes::delete_post,
    crate::admin::routes::delete_user,
    crate::admin::routes::get_user_posts,
    crate::admin::routes::get_user_warnings,
    crate::admin::routes::create_warning,
    crate::admin::routes::create_maintenance,
    crate::admin::routes::delete_maintenance,

    crate::maintenance::routes::get_status,
  ),
  components(
    schemas(
      crate::parameters::Offset,
      crate::parameters::Limit,
      crate::responses::Success,

      crate::users::UserID,
      crate::users::PublicUser,
      crate::users::ProfileUpdate,
      crate::users::ProfileUpdated,

      crate::posts::PostID,
      crate::posts::PostStatus,
      crate::posts::Post,
      crate::posts::NewPost,
      crate::posts::CreatedPost,

      crate::warnings::WarningID,
      crate::warnings::Warning,
      crate::warnings::NewWarning,
      crate::warnings::CreatedWarning,

      crate::admin::routes::PostDeleted,

      crate::maintenance::MaintenanceWindowID,
      crate::maintenance::WindowKind,
      crate::maintenance::MaintenanceWindow,
      crate::maintenance::NewMaintenanceWindow,
      crate::maintenance::MaintenanceStatus,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec {
	/// Creates a new [`Spec`].
	pub fn new() -> Self {
		Self(Self::openapi())
	}

	/// Returns an iterator over the registered API routes and their allowed HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)> {
		self.paths.paths.iter().map(|(path, handler)| {
			let methods = handler
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Creates a [`SwaggerUi`], which can be turned into an [`axum::Router`], that will serve
	/// a SwaggerUI web page and a JSON file representing this OpenAPI spec.
	pub fn swagger_ui(self) -> SwaggerUi {
		SwaggerUi::new("/docs/swagger-ui").url("/docs/openapi.json", self.0)
	}
}

impl Default for Spec {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::Spec;

	#[test]
	fn every_admin_route_requires_a_session() {
		let spec = Spec::new();

		for (path, handler) in spec.paths.paths.iter() {
			if !path.starts_with("/admin") {
				continue;
			}

			for (method, operation) in handler.operations.iter() {
				assert!(
					operation.security.is_some(),
					"{method:?} {path} is missing a security requirement",
				);
			}
		}
	}

	#[test]
	fn all_routes_are_registered() {
		let spec = Spec::new();

		// 3 user paths, 2 post paths, 7 admin paths, 1 maintenance path
		assert_eq!(spec.routes().count(), 13);
	}
}
