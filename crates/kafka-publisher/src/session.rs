use crate::error::PublisherError;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Lifecycle of the broker session.
///
/// `Connecting` → `Ready` → `Closed`. A failed connect leaves the session in
/// `Connecting`; nothing retries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Ready,
    Closed,
}

impl SessionState {
    fn as_u8(self) -> u8 {
        match self {
            SessionState::Connecting => 0,
            SessionState::Ready => 1,
            SessionState::Closed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => SessionState::Ready,
            2 => SessionState::Closed,
            _ => SessionState::Connecting,
        }
    }
}

/// Outcome of a connect attempt, delivered over a channel.
#[derive(Debug)]
pub enum SessionEvent {
    Ready,
    Failed(PublisherError),
}

/// Session state shared between the publisher and its connect task.
#[derive(Debug, Clone)]
pub(crate) struct SharedState(Arc<AtomicU8>);

impl SharedState {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(SessionState::Connecting.as_u8())))
    }

    pub(crate) fn get(&self) -> SessionState {
        SessionState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, state: SessionState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }

    /// Move to `Ready` unless the session was already closed.
    pub(crate) fn mark_ready(&self) -> bool {
        self.0
            .compare_exchange(
                SessionState::Connecting.as_u8(),
                SessionState::Ready.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}
