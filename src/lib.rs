//! CargoNotify - a push-notification client for cargo availability.
//!
//! This library sends a single FCM topic notification announcing that new
//! cargo is ready for pickup. Each call performs exactly one outbound HTTP
//! POST and reports the numeric response status back to the caller.

pub mod cli;
pub mod config;
pub mod notification;
