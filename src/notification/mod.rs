//! Handles the dispatching of cargo notifications to the messaging service.
//!
//! This module defines the notification payload types and the FCM client.
//! The client is fronted by a trait so callers can swap in a fake
//! implementation in tests.

pub mod fcm;
pub mod payload;

pub use fcm::{FcmClient, TopicNotifier};
pub use payload::CargoPayload;
