//! Helper types for query parameters.

use derive_more::Display;
use serde::{Deserialize, Deserializer};
use utoipa::openapi::schema::Schema;
use utoipa::openapi::{ObjectBuilder, RefOr, SchemaType};
use utoipa::ToSchema;

/// An offset used for pagination.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(pub i64);

impl<'de> Deserialize<'de> for Offset {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Option::<i64>::deserialize(deserializer)
			.map(Option::unwrap_or_default)
			.map(Self)
	}
}

impl<'s> ToSchema<'s> for Offset {
	fn schema() -> (&'s str, RefOr<Schema>) {
		(
			"Offset",
			Schema::Object(
				ObjectBuilder::new()
					.description(Some("used for pagination"))
					.schema_type(SchemaType::Number)
					.default(Some(0.into()))
					.build(),
			)
			.into(),
		)
	}
}

/// A limit on the amount of returned results from a request.
///
/// This will default to `DEFAULT` (which is 50 by default), and max out at `MAX` (which is 500 by
/// default). These values can be overridden as necessary.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit<const MAX: u64 = 500, const DEFAULT: u64 = 50>(pub u64);

impl<const MAX: u64, const DEFAULT: u64> Default for Limit<MAX, DEFAULT> {
	fn default() -> Self {
		Self(DEFAULT)
	}
}

impl<'de, const MAX: u64, const DEFAULT: u64> Deserialize<'de> for Limit<MAX, DEFAULT> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		use serde::de::Error;

		match Option::deserialize(deserializer).map(|value| value.unwrap_or(DEFAULT))? {
			value if value <= MAX => Ok(Self(value)),
			value => Err(Error::custom(format_args!(
				"invalid limit `{value}`; cannot exceed `{MAX}`"
			))),
		}
	}
}

impl<'s, const MAX: u64, const DEFAULT: u64> ToSchema<'s> for Limit<MAX, DEFAULT> {
	fn schema() -> (&'s str, RefOr<Schema>) {
		(
			"Limit",
			Schema::Object(
				ObjectBuilder::new()
					.description(Some("limits the amount of returned values"))
					.schema_type(SchemaType::Number)
					.minimum(Some(0.0))
					.build(),
			)
			.into(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::{Limit, Offset};

	#[test]
	fn limit_defaults_when_missing() {
		let limit = serde_json::from_str::<Limit>("null").unwrap();

		assert_eq!(limit, Limit::default());
		assert_eq!(limit.0, 50);
	}

	#[test]
	fn limit_rejects_values_above_max() {
		assert!(serde_json::from_str::<Limit>("501").is_err());
		assert!(serde_json::from_str::<Limit>("500").is_ok());
	}

	#[test]
	fn offset_defaults_to_zero() {
		let offset = serde_json::from_str::<Offset>("null").unwrap();

		assert_eq!(offset.0, 0);
	}
}
