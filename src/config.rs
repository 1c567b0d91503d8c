//! Configuration management for CargoNotify
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `cargonotify.toml` file and merge it
//! with environment variables and command-line arguments.

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for the FCM messaging client.
    pub fcm: FcmConfig,
}

/// Configuration for the FCM messaging client.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FcmConfig {
    /// The URL of the FCM send endpoint.
    pub endpoint_url: String,
    /// The server key used in the `Authorization` header. Required; there is
    /// no usable default, and it must never be committed as a source literal.
    pub server_key: String,
    /// The topic whose subscribers receive cargo notifications.
    pub topic: String,
    /// Request timeout in seconds for the HTTP call.
    pub timeout_seconds: u64,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// TOML file, environment variables, and CLI arguments.
    ///
    /// Environment variables use the `CARGONOTIFY_` prefix with `__` as the
    /// section separator, e.g. `CARGONOTIFY_FCM__SERVER_KEY`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        figment = match &cli.config {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file("cargonotify.toml")),
        };
        let config: Config = figment
            .merge(Env::prefixed("CARGONOTIFY_").split("__"))
            .merge(cli.clone())
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce an authorized request.
    fn validate(&self) -> Result<()> {
        if self.fcm.server_key.is_empty() {
            bail!(
                "fcm.server_key is not set; provide it via cargonotify.toml \
                 or the CARGONOTIFY_FCM__SERVER_KEY environment variable"
            );
        }
        Ok(())
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fcm: FcmConfig {
                endpoint_url: "https://fcm.googleapis.com/fcm/send".to_string(),
                server_key: String::new(),
                topic: "truck_owner".to_string(),
                timeout_seconds: 10,
            },
        }
    }
}
