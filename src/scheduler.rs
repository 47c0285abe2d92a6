//! Fixed-interval generate → serialize → publish loop.

use retail_generator::TransactionGenerator;
use retail_kafka_publisher::{Publish, SessionEvent};
use retail_types::encode_transaction;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Summary of a scheduler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerReport {
    /// Whether the session became ready and ticking started.
    pub started: bool,
    /// Ticks executed.
    pub ticks: u64,
    /// Transactions handed to the publisher.
    pub enqueued: u64,
    /// Transactions dropped because encoding or enqueueing failed.
    pub dropped: u64,
}

/// Drives the feed once the broker session is ready.
///
/// The first tick fires one interval after the session becomes ready. Ticks
/// are serialized: each one generates, encodes and enqueues a single
/// transaction without awaiting delivery, and a late tick pushes the schedule
/// back rather than bursting to catch up.
pub struct Scheduler<P: Publish> {
    generator: TransactionGenerator,
    publisher: P,
    topic: String,
    interval: Duration,
}

impl<P: Publish> Scheduler<P> {
    pub fn new(
        generator: TransactionGenerator,
        publisher: P,
        topic: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            generator,
            publisher,
            topic: topic.into(),
            interval,
        }
    }

    /// Wait for [`SessionEvent::Ready`], then tick until `shutdown` is cancelled.
    ///
    /// Connection failures are logged and the scheduler keeps waiting; if the
    /// session never becomes ready it idles until shutdown.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<SessionEvent>,
        shutdown: CancellationToken,
    ) -> SchedulerReport {
        let mut report = SchedulerReport::default();

        if !wait_until_ready(&mut events, &shutdown).await {
            return report;
        }
        report.started = true;

        info!(
            "Producer is ready, sending a transaction to '{}' every {:?}",
            self.topic, self.interval
        );

        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => self.tick(&mut report),
            }
        }

        info!(
            "Scheduler stopped after {} tick(s): {} enqueued, {} dropped",
            report.ticks, report.enqueued, report.dropped
        );
        report
    }

    fn tick(&mut self, report: &mut SchedulerReport) {
        report.ticks += 1;

        let transaction = self.generator.next_transaction();
        let payload = match encode_transaction(&transaction) {
            Ok(payload) => payload,
            Err(e) => {
                report.dropped += 1;
                error!(
                    "Failed to encode transaction {}: {e}",
                    transaction.transaction_id()
                );
                return;
            }
        };

        match self.publisher.publish(&self.topic, payload) {
            Ok(()) => {
                report.enqueued += 1;
                debug!(
                    transaction_id = transaction.transaction_id(),
                    items = transaction.items().len(),
                    total_amount = transaction.total_amount(),
                    "Message enqueued"
                );
            }
            Err(e) => {
                report.dropped += 1;
                error!("Error sending message to Kafka: {e}");
            }
        }
    }
}

/// Returns `true` once the session is ready, `false` on shutdown.
async fn wait_until_ready(
    events: &mut mpsc::Receiver<SessionEvent>,
    shutdown: &CancellationToken,
) -> bool {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("Shutdown requested before the producer became ready");
                return false;
            }
            event = events.recv() => match event {
                Some(SessionEvent::Ready) => return true,
                Some(SessionEvent::Failed(e)) => {
                    error!("Producer error: {e}");
                    warn!("No transactions will be sent until the session is ready");
                }
                None => {
                    warn!(
                        "Session events closed before the producer became ready, \
                         idling until shutdown"
                    );
                    shutdown.cancelled().await;
                    return false;
                }
            },
        }
    }
}
