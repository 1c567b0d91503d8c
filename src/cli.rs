//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. These arguments are parsed at startup and then merged with
//! the configuration from the `cargonotify.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Notifies topic subscribers that new cargo is available for delivery.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where the cargo is picked up from.
    pub cargo_location: String,

    /// What kind of cargo it is.
    pub cargo_type: String,

    /// The booking this cargo belongs to.
    pub booking_id: String,

    /// Topic to notify instead of the configured one.
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Messaging endpoint URL to use instead of the configured one.
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(topic) = &self.topic {
            dict.insert("fcm.topic".into(), Value::from(topic.clone()));
        }

        if let Some(url) = &self.endpoint_url {
            dict.insert("fcm.endpoint_url".into(), Value::from(url.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
