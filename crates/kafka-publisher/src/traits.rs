//! Publish trait definition.

use crate::error::Result;

/// Non-blocking publish to a broker topic.
///
/// Implementations enqueue the payload and return without waiting for the
/// broker. An `Err` means the payload was refused before it was queued; a
/// failure after that point is the implementation's to log, and the message is
/// dropped. Nothing is retried.
///
/// The scheduler is generic over this trait so it can run against an in-memory
/// recorder in tests.
pub trait Publish: Send + Sync {
    fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<()>;
}

impl<P: Publish + ?Sized> Publish for std::sync::Arc<P> {
    fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<()> {
        (**self).publish(topic, payload)
    }
}
