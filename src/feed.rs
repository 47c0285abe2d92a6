//! Wiring of publisher, generator and scheduler for one feed run.

use crate::config::FeedConfig;
use crate::scheduler::{Scheduler, SchedulerReport};
use anyhow::Context;
use retail_generator::TransactionGenerator;
use retail_kafka_publisher::KafkaPublisher;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Run the feed until `shutdown` is cancelled.
///
/// Only building the producer can fail; connection, topic creation and
/// per-message errors are logged and the feed carries on.
pub async fn run_feed(
    config: FeedConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<SchedulerReport> {
    let publisher = KafkaPublisher::new(config.publisher_config()).with_context(|| {
        format!("Failed to create Kafka producer for {}", config.broker_address)
    })?;
    let publisher = Arc::new(publisher);

    if let Some(partitions) = config.create_topic {
        if let Err(e) = publisher
            .create_topic_if_not_exists(&config.topic_name, partitions)
            .await
        {
            error!("{e}");
        }
    }

    let generator = match config.seed {
        Some(seed) => {
            info!("Generating transactions with seed {seed}");
            TransactionGenerator::new(seed)
        }
        None => TransactionGenerator::from_entropy(),
    };

    let (events_tx, events_rx) = mpsc::channel(4);
    publisher.connect(events_tx);

    let scheduler = Scheduler::new(
        generator,
        Arc::clone(&publisher),
        config.topic_name.clone(),
        config.interval,
    );
    let report = scheduler.run(events_rx, shutdown).await;

    if let Err(e) = publisher.close(config.shutdown_timeout).await {
        warn!("{e}");
    }

    let metrics = publisher.metrics().snapshot();
    info!(
        "Feed finished: {} tick(s), {} delivered, {} dropped, {} undelivered at exit",
        report.ticks,
        metrics.delivered,
        report.dropped + metrics.failed,
        metrics.in_flight()
    );

    Ok(report)
}
