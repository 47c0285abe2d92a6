//! Transaction and line item records.

use crate::codec::serialize_timestamp;
use crate::error::{Result, RetailTypesError};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single product line on a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: String,
    pub quantity: u32,
    /// Unit price in whole currency units.
    pub price: u32,
}

impl LineItem {
    pub fn new(item_id: impl Into<String>, quantity: u32, price: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            price,
        }
    }

    /// Line total, `price * quantity`.
    pub fn amount(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// One synthetic point-of-sale transaction.
///
/// A transaction is immutable once built. `total_amount` is always the sum of
/// the line amounts; it is computed by [`Transaction::new`] and cannot be set
/// independently. Field declaration order is the order of the JSON object on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    transaction_id: String,
    customer_id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<Utc>,
    items: Vec<LineItem>,
    total_amount: u64,
    store_id: String,
}

impl Transaction {
    /// Build a transaction, deriving `total_amount` from `items`.
    ///
    /// Fails with [`RetailTypesError::Overflow`] if the line amounts do not
    /// sum within `u64`. The timestamp is truncated to milliseconds, the
    /// resolution of the wire format.
    pub fn new(
        transaction_id: impl Into<String>,
        customer_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        items: Vec<LineItem>,
        store_id: impl Into<String>,
    ) -> Result<Self> {
        let total_amount = items
            .iter()
            .try_fold(0u64, |total, item| total.checked_add(item.amount()))
            .ok_or(RetailTypesError::Overflow)?;

        Ok(Self {
            transaction_id: transaction_id.into(),
            customer_id: customer_id.into(),
            timestamp: timestamp.trunc_subsecs(3),
            items,
            total_amount,
            store_id: store_id.into(),
        })
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Line items in generation order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }
}
