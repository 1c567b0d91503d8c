//! CargoNotify - cargo availability notifier
//!
//! A small command-line tool that announces newly available cargo to the
//! subscribers of a messaging topic with a single push-notification request.

use anyhow::Result;
use cargonotify::{
    cli::Cli,
    config::Config,
    notification::{FcmClient, TopicNotifier},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment,
    // and CLI args. Exit if configuration fails, as it's a critical step.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });

    // Initialize logging, letting RUST_LOG override the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("CargoNotify starting up...");
    info!("Endpoint: {}", config.fcm.endpoint_url);
    info!("Topic: {}", config.fcm.topic);

    let client = FcmClient::new(&config.fcm);
    let status = client
        .notify_topic_subscribers(&cli.cargo_location, &cli.cargo_type, &cli.booking_id)
        .await?;

    info!(status, "Notification request completed.");
    Ok(())
}
