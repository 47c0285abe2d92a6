//! Synthetic transaction generator for the retail feed.
//!
//! This crate provides the `TransactionGenerator` which builds one random
//! [`Transaction`](retail_types::Transaction) per call. The generator owns a
//! seeded RNG so that runs with the same seed (and the same [`Clock`]) yield
//! the same sequence of transactions.
//!
//! # Architecture
//!
//! ```text
//! identifier pools (retail_types::pools)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ TransactionGenerator │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - clock             │
//! │  - generated count   │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     Transaction { id, customer, timestamp, items, total, store }
//! ```
//!
//! # Example
//!
//! ```rust
//! use retail_generator::{FixedClock, TransactionGenerator};
//!
//! let mut generator = TransactionGenerator::new(42).with_clock(FixedClock::epoch());
//! let tx = generator.next_transaction();
//! assert!(!tx.items().is_empty());
//! ```

pub mod clock;
pub mod generator;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{TransactionGenerator, TransactionIterator};
