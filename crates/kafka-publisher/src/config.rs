use rdkafka::ClientConfig;
use std::time::Duration;

/// Default time librdkafka keeps trying to deliver a message.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed for the initial metadata round trip.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`KafkaPublisher`](crate::KafkaPublisher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Kafka bootstrap servers (comma-separated, e.g. "localhost:9092")
    pub bootstrap_servers: String,
    /// Delivery timeout per message
    pub message_timeout: Duration,
    /// Timeout for establishing the session
    pub connect_timeout: Duration,
}

impl PublisherConfig {
    pub fn new(bootstrap_servers: impl Into<String>) -> Self {
        Self {
            bootstrap_servers: bootstrap_servers.into(),
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Build the librdkafka client configuration.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.bootstrap_servers)
            .set(
                "message.timeout.ms",
                self.message_timeout.as_millis().to_string(),
            );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PublisherConfig::new("localhost:9092");
        assert_eq!(config.bootstrap_servers, "localhost:9092");
        assert_eq!(config.message_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_config() {
        let config = PublisherConfig::new("broker1:9092,broker2:9092")
            .with_message_timeout(Duration::from_millis(2500))
            .with_connect_timeout(Duration::from_secs(1));
        let client_config = config.client_config();

        assert_eq!(
            client_config.get("bootstrap.servers"),
            Some("broker1:9092,broker2:9092")
        );
        assert_eq!(client_config.get("message.timeout.ms"), Some("2500"));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }
}
