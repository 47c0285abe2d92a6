//! Time sources for transaction timestamps.

use chrono::{DateTime, Utc};

/// Source of the generation-time instant stamped on each transaction.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Clock frozen at the Unix epoch.
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
