//! Delivery counters for the publisher.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the publisher and its delivery tasks.
#[derive(Debug, Default)]
pub struct PublishMetrics {
    enqueued: AtomicU64,
    rejected: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time copy of [`PublishMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Messages accepted into the producer queue.
    pub enqueued: u64,
    /// Messages the producer refused to enqueue.
    pub rejected: u64,
    /// Messages acknowledged by the broker.
    pub delivered: u64,
    /// Enqueued messages whose delivery failed.
    pub failed: u64,
}

impl MetricsSnapshot {
    /// Messages enqueued but not yet acknowledged or failed.
    pub fn in_flight(&self) -> u64 {
        self.enqueued
            .saturating_sub(self.delivered)
            .saturating_sub(self.failed)
    }

    /// Messages that will never reach the broker.
    pub fn dropped(&self) -> u64 {
        self.rejected + self.failed
    }
}

impl PublishMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            enqueued: self.enqueued.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = PublishMetrics::new();
        metrics.record_enqueued();
        metrics.record_enqueued();
        metrics.record_enqueued();
        metrics.record_delivered();
        metrics.record_failed();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.enqueued, 3);
        assert_eq!(snapshot.delivered, 1);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.in_flight(), 1);
        assert_eq!(snapshot.dropped(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MetricsSnapshot::default();
        assert_eq!(snapshot.in_flight(), 0);
        assert_eq!(snapshot.dropped(), 0);
    }
}
