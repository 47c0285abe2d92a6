//! Kafka publisher for the retail transaction feed.
//!
//! This crate owns the broker session. It hands out three things:
//!
//! - **Session events**: [`KafkaPublisher::connect`] reports readiness or a
//!   connection failure as a [`SessionEvent`] over a channel
//! - **Fire-and-forget publishing**: [`Publish::publish`] enqueues a payload and
//!   returns immediately; delivery failures are logged and the message dropped
//! - **Topic management**: creating the feed topic if it doesn't exist
//!
//! ## Usage
//!
//! ```rust,no_run
//! use retail_kafka_publisher::{KafkaPublisher, Publish, PublisherConfig, SessionEvent};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let publisher = KafkaPublisher::new(PublisherConfig::new("localhost:9092"))?;
//!
//!     let (events_tx, mut events_rx) = mpsc::channel(4);
//!     publisher.connect(events_tx);
//!
//!     if let Some(SessionEvent::Ready) = events_rx.recv().await {
//!         publisher.publish("retail_data", br#"{"transaction_id":"T12345"}"#.to_vec())?;
//!     }
//!
//!     publisher.close(std::time::Duration::from_secs(5)).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod context;
mod error;
mod metrics;
mod publisher;
mod session;
mod traits;

pub use config::PublisherConfig;
pub use context::FeedClientContext;
pub use error::{PublisherError, Result};
pub use metrics::{MetricsSnapshot, PublishMetrics};
pub use publisher::KafkaPublisher;
pub use session::{SessionEvent, SessionState};
pub use traits::Publish;
