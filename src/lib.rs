//! Retail transaction feed.
//!
//! Generates synthetic point-of-sale transactions and publishes them as JSON
//! to a Kafka topic at a fixed cadence, as a test feed for downstream
//! ingestion pipelines.
//!
//! # Components
//!
//! - `retail_types` - transaction model, identifier pools and JSON codec
//! - `retail_generator` - seeded transaction generator
//! - `retail_kafka_publisher` - broker session and fire-and-forget publishing
//! - [`scheduler`] - the fixed-interval loop tying them together
//! - [`config`] - flag / environment / default resolution
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: localhost:9092, topic retail_data, one transaction per second
//! retail-feed
//!
//! # Explicit broker and topic
//! retail-feed -b broker1:9092 -t sales
//!
//! # From the environment
//! BOOTSTRAP_SERVER=envhost:9092 TOPIC_NAME=sales retail-feed
//!
//! # Reproducible, faster feed that creates its topic
//! retail-feed --seed 42 --interval 200ms --create-topic
//! ```
//!
//! Delivery is best-effort and at-most-once: a message the broker rejects is
//! logged and dropped.

pub mod config;
pub mod feed;
pub mod scheduler;
pub mod shutdown;

pub use config::{FeedArgs, FeedConfig};
pub use feed::run_feed;
pub use scheduler::{Scheduler, SchedulerReport};
pub use shutdown::shutdown_on_signal;
