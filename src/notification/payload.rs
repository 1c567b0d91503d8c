//! The wire format of a cargo notification.
//!
//! The legacy FCM HTTP API expects a `to` target plus a human-readable
//! `notification` block and a structured `data` block. Receiving clients
//! parse `data` programmatically, so the booking fields are duplicated there
//! even though the body text repeats two of them.

use serde::{Deserialize, Serialize};

/// The title shown to subscribers by receiving clients.
pub const NOTIFICATION_TITLE: &str = "New Cargo Available!";

/// The full JSON document POSTed to the messaging endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoPayload {
    pub to: String,
    pub notification: NotificationContent,
    pub data: CargoData,
}

/// The human-readable portion of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

/// Structured fields delivered alongside the notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoData {
    pub booking_id: String,
    pub cargo_location: String,
    pub cargo_type: String,
}

impl CargoPayload {
    /// Builds the payload for a topic broadcast.
    ///
    /// The caller-supplied strings are taken as-is; serde escaping keeps the
    /// serialized document valid JSON for arbitrary input text.
    pub fn for_topic(
        topic: &str,
        cargo_location: &str,
        cargo_type: &str,
        booking_id: &str,
    ) -> Self {
        Self {
            to: format!("/topics/{topic}"),
            notification: NotificationContent {
                title: NOTIFICATION_TITLE.to_string(),
                body: format!("Cargo from {cargo_location} ({cargo_type}) is ready for delivery."),
            },
            data: CargoData {
                booking_id: booking_id.to_string(),
                cargo_location: cargo_location.to_string(),
                cargo_type: cargo_type.to_string(),
            },
        }
    }
}
