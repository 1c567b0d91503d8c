//! A client for publishing cargo notifications to an FCM topic.

use crate::config::FcmConfig;
use crate::notification::payload::CargoPayload;
use async_trait::async_trait;
use tokio::task;
use tracing::{error, info, instrument, warn};

/// A trait for clients that can notify topic subscribers about cargo.
#[async_trait]
pub trait TopicNotifier: Send + Sync {
    /// Sends one notification and returns the HTTP response status code.
    async fn notify_topic_subscribers(
        &self,
        cargo_location: &str,
        cargo_type: &str,
        booking_id: &str,
    ) -> anyhow::Result<u16>;
}

/// A client for the legacy FCM HTTP send endpoint.
pub struct FcmClient {
    endpoint_url: String,
    server_key: String,
    topic: String,
    timeout: std::time::Duration,
}

impl FcmClient {
    /// Creates a new `FcmClient` from the loaded configuration.
    pub fn new(config: &FcmConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            server_key: config.server_key.clone(),
            topic: config.topic.clone(),
            timeout: std::time::Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Performs the request in a blocking manner.
    ///
    /// The status code is returned whatever it is; interpreting non-success
    /// statuses is the caller's concern. Only transport failures are errors.
    fn send_request(
        client: reqwest::blocking::Client,
        endpoint_url: &str,
        server_key: &str,
        payload: &CargoPayload,
    ) -> anyhow::Result<u16> {
        let response = client
            .post(endpoint_url)
            .header(reqwest::header::AUTHORIZATION, format!("key={server_key}"))
            .json(payload)
            .send()?;
        Ok(response.status().as_u16())
    }
}

#[async_trait]
impl TopicNotifier for FcmClient {
    /// Builds the payload and POSTs it to the configured endpoint.
    ///
    /// Exactly one round trip per call: no retries, and the response body is
    /// never read. The connection is released on every exit path.
    #[instrument(skip(self))]
    async fn notify_topic_subscribers(
        &self,
        cargo_location: &str,
        cargo_type: &str,
        booking_id: &str,
    ) -> anyhow::Result<u16> {
        let payload = CargoPayload::for_topic(&self.topic, cargo_location, cargo_type, booking_id);

        let endpoint_url = self.endpoint_url.clone();
        let server_key = self.server_key.clone();
        let timeout = self.timeout;
        let result = task::spawn_blocking(move || {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?;
            Self::send_request(client, &endpoint_url, &server_key, &payload)
        })
        .await;

        match result {
            Ok(Ok(status)) => {
                if (200..300).contains(&status) {
                    info!(status, topic = %self.topic, "Notification sent to topic.");
                } else {
                    warn!(status, topic = %self.topic, "Messaging service returned a non-success status.");
                }
                Ok(status)
            }
            Ok(Err(e)) => {
                error!(error = %e, "HTTP request to messaging endpoint failed");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Notification task failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod fcm_client_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint_url: String) -> FcmConfig {
        FcmConfig {
            endpoint_url,
            server_key: "test-key".to_string(),
            topic: "truck_owner".to_string(),
            timeout_seconds: 10,
        }
    }

    #[tokio::test]
    async fn test_notify_sends_exact_payload_once() {
        // Arrange
        let server = MockServer::start().await;
        let expected_body = json!({
            "to": "/topics/truck_owner",
            "notification": {
                "title": "New Cargo Available!",
                "body": "Cargo from Mumbai (Electronics) is ready for delivery."
            },
            "data": {
                "bookingId": "BK123",
                "cargoLocation": "Mumbai",
                "cargoType": "Electronics"
            }
        });

        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .and(header("Authorization", "key=test-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = FcmClient::new(&test_config(format!("{}/fcm/send", server.uri())));

        // Act
        let result = client
            .notify_topic_subscribers("Mumbai", "Electronics", "BK123")
            .await;

        // Assert
        assert_eq!(result.unwrap(), 200);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_notify_returns_non_success_status_as_value() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = FcmClient::new(&test_config(format!("{}/fcm/send", server.uri())));

        // Act
        let result = client
            .notify_topic_subscribers("Mumbai", "Electronics", "BK123")
            .await;

        // Assert: an authorization rejection is still a completed round trip.
        assert_eq!(result.unwrap(), 401);
    }

    #[tokio::test]
    async fn test_notify_propagates_connect_failure() {
        // Nothing is listening here, so the connection itself fails.
        let client = FcmClient::new(&test_config("http://127.0.0.1:9/fcm/send".to_string()));

        let result = client
            .notify_topic_subscribers("Mumbai", "Electronics", "BK123")
            .await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        let is_transport = err
            .chain()
            .any(|cause| cause.downcast_ref::<reqwest::Error>().is_some());
        assert!(is_transport, "Error should carry the transport failure, but was: {}", err);
    }

    #[test]
    fn test_notify_respects_request_timeout() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            // Arrange
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(
                    ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(2)),
                )
                .mount(&server)
                .await;

            let mut client = FcmClient::new(&test_config(server.uri()));
            client.timeout = std::time::Duration::from_millis(500);

            // Act
            let result = client
                .notify_topic_subscribers("Mumbai", "Electronics", "BK123")
                .await;

            // Assert
            assert!(result.is_err());
            let err = result.unwrap_err();
            let is_timeout = err.chain().any(|cause| {
                cause
                    .downcast_ref::<reqwest::Error>()
                    .map_or(false, |e| e.is_timeout())
            });
            assert!(is_timeout, "Error should be a timeout error, but was: {}", err);
        });
    }
}
