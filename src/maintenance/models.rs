//! Types for modeling maintenance windows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::make_id;
use crate::{Error, Result};

make_id!(MaintenanceWindowID);

/// The part of the site a maintenance window applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum WindowKind {
	/// Profile editing is locked.
	Profile,

	/// Creating posts is locked.
	Posts,
}

/// A maintenance window.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MaintenanceWindow {
	/// The window's ID.
	pub id: MaintenanceWindowID,

	/// The part of the site this window applies to.
	pub kind: WindowKind,

	/// Why this maintenance is happening, if the admin provided a reason.
	pub reason: Option<String>,

	/// Whether this window is currently in effect.
	pub is_active: bool,

	/// When this window ends.
	#[serde(with = "time::serde::rfc3339")]
	pub ends_on: OffsetDateTime,

	/// When this window was created.
	#[serde(with = "time::serde::rfc3339")]
	pub created_on: OffsetDateTime,
}

/// Request payload for scheduling a new maintenance window.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewMaintenanceWindow {
	/// The part of the site to lock.
	pub kind: WindowKind,

	/// Why this maintenance is happening.
	pub reason: Option<String>,

	/// When this window ends.
	#[serde(with = "time::serde::rfc3339")]
	pub ends_on: OffsetDateTime,
}

impl NewMaintenanceWindow {
	/// Validates that the submitted window ends in the future.
	pub fn validated_ends_on(&self) -> Result<OffsetDateTime> {
		if self.ends_on > OffsetDateTime::now_utc() {
			Ok(self.ends_on)
		} else {
			Err(Error::invalid("maintenance end time"))
		}
	}
}

/// The current maintenance status for one [`WindowKind`].
///
/// The field names are part of the wire contract with the website, hence the camelCase.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatus {
	/// Whether maintenance is currently in effect.
	pub is_maintenance: bool,

	/// Why this maintenance is happening.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,

	/// When the maintenance ends.
	#[serde(
		with = "time::serde::rfc3339::option",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub end_time: Option<OffsetDateTime>,
}

impl MaintenanceStatus {
	/// The status reported while `window` is in effect.
	pub fn active(window: &MaintenanceWindow) -> Self {
		Self {
			is_maintenance: true,
			reason: window.reason.clone(),
			end_time: Some(window.ends_on),
		}
	}

	/// The status reported when no window is in effect.
	pub const fn inactive() -> Self {
		Self { is_maintenance: false, reason: None, end_time: None }
	}
}

#[cfg(test)]
mod tests {
	use time::OffsetDateTime;

	use super::{MaintenanceStatus, MaintenanceWindow, MaintenanceWindowID, WindowKind};

	#[allow(clippy::missing_docs_in_private_items)]
	fn window(reason: Option<&str>) -> MaintenanceWindow {
		MaintenanceWindow {
			id: MaintenanceWindowID(1),
			kind: WindowKind::Posts,
			reason: reason.map(ToOwned::to_owned),
			is_active: true,
			ends_on: OffsetDateTime::from_unix_timestamp(1735689600).unwrap(),
			created_on: OffsetDateTime::from_unix_timestamp(1735603200).unwrap(),
		}
	}

	#[test]
	fn inactive_status_serializes_to_the_minimal_shape() {
		let json = serde_json::to_value(MaintenanceStatus::inactive()).unwrap();

		assert_eq!(json, serde_json::json!({ "isMaintenance": false }));
	}

	#[test]
	fn active_status_uses_camel_case_keys_and_rfc3339_timestamps() {
		let json = serde_json::to_value(MaintenanceStatus::active(&window(Some("db upgrade"))))
			.unwrap();

		assert_eq!(
			json,
			serde_json::json!({
				"isMaintenance": true,
				"reason": "db upgrade",
				"endTime": "2025-01-01T00:00:00Z",
			}),
		);
	}

	#[test]
	fn active_status_without_a_reason_omits_the_key() {
		let json = serde_json::to_value(MaintenanceStatus::active(&window(None))).unwrap();

		assert_eq!(json.get("reason"), None);
		assert_eq!(json["isMaintenance"], serde_json::json!(true));
	}

	#[test]
	fn window_kinds_serialize_lowercase() {
		assert_eq!(serde_json::to_value(WindowKind::Profile).unwrap(), "profile");
		assert_eq!(serde_json::to_value(WindowKind::Posts).unwrap(), "posts");
	}
}
