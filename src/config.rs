//! Command-line and environment configuration.
//!
//! Every setting resolves with the precedence flag > environment variable >
//! built-in default, which is what clap's `env` support gives us. An empty
//! broker address or topic name counts as unset.

mod duration;

pub use duration::parse_duration;

use clap::Parser;
use retail_kafka_publisher::PublisherConfig;
use std::time::Duration;

/// Broker address used when neither flag nor environment provides one.
pub const DEFAULT_BOOTSTRAP_SERVER: &str = "localhost:9092";

/// Topic used when neither flag nor environment provides one.
pub const DEFAULT_TOPIC_NAME: &str = "retail_data";

/// A simple application that generates random retail transactions and writes
/// them to a Kafka topic.
#[derive(Parser, Debug, Clone)]
#[command(name = "retail-feed")]
#[command(version)]
#[command(args_override_self = true)]
pub struct FeedArgs {
    /// The Kafka bootstrap server(s)
    #[arg(
        long = "bootstrap-server",
        short = 'b',
        env = "BOOTSTRAP_SERVER",
        default_value = DEFAULT_BOOTSTRAP_SERVER
    )]
    pub bootstrap_server: String,

    /// The Kafka topic name
    #[arg(
        long = "topic-name",
        short = 't',
        env = "TOPIC_NAME",
        default_value = DEFAULT_TOPIC_NAME
    )]
    pub topic_name: String,

    /// Time between transactions (e.g. "500ms", "1s", "1m")
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pub interval: Duration,

    /// Random seed for deterministic generation (same seed = same transactions)
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Create the topic before publishing if it doesn't exist
    #[arg(long)]
    pub create_topic: bool,

    /// Partition count used with --create-topic
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(i32).range(1..))]
    pub partitions: i32,

    /// How long the producer keeps trying to deliver a single message
    #[arg(long, default_value = "5s", value_parser = parse_duration)]
    pub message_timeout: Duration,

    /// How long to wait for the broker session to be established
    #[arg(long, default_value = "10s", value_parser = parse_duration)]
    pub connect_timeout: Duration,

    /// How long to flush in-flight messages on shutdown
    #[arg(long, default_value = "5s", value_parser = parse_duration)]
    pub shutdown_timeout: Duration,
}

/// Fully resolved feed settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub broker_address: String,
    pub topic_name: String,
    pub interval: Duration,
    pub seed: Option<u64>,
    /// Partition count when the topic should be created up front.
    pub create_topic: Option<i32>,
    pub message_timeout: Duration,
    pub connect_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl FeedArgs {
    pub fn resolve(&self) -> FeedConfig {
        FeedConfig {
            broker_address: non_empty_or(&self.bootstrap_server, DEFAULT_BOOTSTRAP_SERVER),
            topic_name: non_empty_or(&self.topic_name, DEFAULT_TOPIC_NAME),
            interval: self.interval,
            seed: self.seed,
            create_topic: self.create_topic.then_some(self.partitions),
            message_timeout: self.message_timeout,
            connect_timeout: self.connect_timeout,
            shutdown_timeout: self.shutdown_timeout,
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl FeedConfig {
    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig::new(self.broker_address.clone())
            .with_message_timeout(self.message_timeout)
            .with_connect_timeout(self.connect_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> FeedConfig {
        let mut argv = vec!["retail-feed"];
        argv.extend_from_slice(args);
        FeedArgs::try_parse_from(argv).unwrap().resolve()
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["-b", "broker1:9092", "-t", "sales"]);
        assert_eq!(config.broker_address, "broker1:9092");
        assert_eq!(config.topic_name, "sales");
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&["--bootstrap-server", "broker2:9093", "--topic-name", "pos"]);
        assert_eq!(config.broker_address, "broker2:9093");
        assert_eq!(config.topic_name, "pos");
    }

    #[test]
    fn test_repeated_flag_last_wins() {
        let config = parse(&["-t", "first", "-t", "second", "-b", "a:1", "-b", "b:2"]);
        assert_eq!(config.topic_name, "second");
        assert_eq!(config.broker_address, "b:2");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = parse(&["-b", "", "-t", ""]);
        assert_eq!(config.broker_address, DEFAULT_BOOTSTRAP_SERVER);
        assert_eq!(config.topic_name, DEFAULT_TOPIC_NAME);

        let config = parse(&["--bootstrap-server=", "-t", "sales"]);
        assert_eq!(config.broker_address, DEFAULT_BOOTSTRAP_SERVER);
        assert_eq!(config.topic_name, "sales");
    }

    #[test]
    fn test_supplementary_defaults() {
        let config = parse(&["-b", "broker1:9092", "-t", "sales"]);
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.create_topic, None);
        assert_eq!(config.message_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_supplementary_flags() {
        let config = parse(&[
            "--interval",
            "250ms",
            "--seed",
            "42",
            "--create-topic",
            "--partitions",
            "6",
            "--connect-timeout",
            "2s",
        ]);
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.create_topic, Some(6));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_partitions_ignored_without_create_topic() {
        let config = parse(&["--partitions", "6"]);
        assert_eq!(config.create_topic, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(FeedArgs::try_parse_from(["retail-feed", "--interval", "0s"]).is_err());
        assert!(FeedArgs::try_parse_from(["retail-feed", "--interval", "soon"]).is_err());
        assert!(FeedArgs::try_parse_from(["retail-feed", "--partitions", "0"]).is_err());
        assert!(FeedArgs::try_parse_from(["retail-feed", "--bogus"]).is_err());
    }

    #[test]
    fn test_help_exits_successfully() {
        for flag in ["--help", "-h"] {
            let err = FeedArgs::try_parse_from(["retail-feed", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert_eq!(err.exit_code(), 0);

            let usage = err.to_string();
            assert!(usage.contains("--bootstrap-server"));
            assert!(usage.contains("BOOTSTRAP_SERVER"));
            assert!(usage.contains("--topic-name"));
            assert!(usage.contains("TOPIC_NAME"));
        }
    }

    #[test]
    fn test_publisher_config() {
        let config = parse(&["-b", "broker1:9092", "--message-timeout", "3s"]);
        let publisher = config.publisher_config();
        assert_eq!(publisher.bootstrap_servers, "broker1:9092");
        assert_eq!(publisher.message_timeout, Duration::from_secs(3));
        assert_eq!(publisher.connect_timeout, Duration::from_secs(10));
    }
}
