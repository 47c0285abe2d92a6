//! Data model for the retail transaction feed.
//!
//! This crate holds the records that flow through the feed and the JSON
//! encoding used on the wire. It has no I/O of its own: the generator crate
//! builds [`Transaction`] values and the publisher ships the bytes produced by
//! [`encode_transaction`].
//!
//! # Wire format
//!
//! One JSON object per broker message:
//!
//! ```text
//! {
//!   "transaction_id": "T48213",
//!   "customer_id": "C003",
//!   "timestamp": "2024-05-01T12:00:00.123Z",
//!   "items": [ { "item_id": "I007", "quantity": 2, "price": 30 } ],
//!   "total_amount": 60,
//!   "store_id": "S001"
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use retail_types::{decode_transaction, encode_transaction, LineItem, Transaction};
//!
//! let tx = Transaction::new(
//!     "T12345",
//!     "C001",
//!     Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
//!     vec![LineItem::new("I003", 2, 30)],
//!     "S002",
//! )
//! .unwrap();
//! assert_eq!(tx.total_amount(), 60);
//!
//! let bytes = encode_transaction(&tx).unwrap();
//! assert_eq!(decode_transaction(&bytes).unwrap(), tx);
//! ```

pub mod codec;
pub mod error;
pub mod pools;
pub mod transaction;

// Re-exports for convenience
pub use codec::{decode_transaction, encode_transaction, format_timestamp};
pub use error::{Result, RetailTypesError};
pub use pools::{CUSTOMER_IDS, ITEM_IDS, PRICES, QUANTITIES, STORE_IDS};
pub use transaction::{LineItem, Transaction};
