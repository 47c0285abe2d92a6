//! JSON wire codec.
//!
//! Encoding is a straight serde pass over [`Transaction`]. Decoding goes
//! through [`WireTransaction`] so the total invariant can be checked before a
//! [`Transaction`] is handed out.

use crate::error::{Result, RetailTypesError};
use crate::transaction::{LineItem, Transaction};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serializer};

/// Encode a transaction as a UTF-8 JSON object.
pub fn encode_transaction(transaction: &Transaction) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(transaction)?)
}

/// Decode a JSON message produced by [`encode_transaction`].
///
/// Rejects messages with no items, whose line amounts overflow the total, or
/// whose `total_amount` does not match the line items.
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction> {
    let wire: WireTransaction = serde_json::from_slice(bytes)?;
    Transaction::try_from(wire)
}

/// Render a timestamp as ISO-8601 UTC with millisecond precision.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_timestamp<S>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RetailTypesError::Timestamp {
            value: value.to_string(),
            message: e.to_string(),
        })
}

#[derive(Debug, Deserialize)]
struct WireTransaction {
    transaction_id: String,
    customer_id: String,
    timestamp: String,
    items: Vec<LineItem>,
    total_amount: u64,
    store_id: String,
}

impl TryFrom<WireTransaction> for Transaction {
    type Error = RetailTypesError;

    fn try_from(wire: WireTransaction) -> Result<Self> {
        if wire.items.is_empty() {
            return Err(RetailTypesError::EmptyItems);
        }

        let timestamp = parse_timestamp(&wire.timestamp)?;
        let transaction = Transaction::new(
            wire.transaction_id,
            wire.customer_id,
            timestamp,
            wire.items,
            wire.store_id,
        )?;

        if transaction.total_amount() != wire.total_amount {
            return Err(RetailTypesError::TotalMismatch {
                expected: transaction.total_amount(),
                actual: wire.total_amount,
            });
        }

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn sample() -> Transaction {
        let ts = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(123))
            .unwrap();
        Transaction::new(
            "T48213",
            "C003",
            ts,
            vec![LineItem::new("I007", 2, 30), LineItem::new("I001", 1, 100)],
            "S001",
        )
        .unwrap()
    }

    #[test]
    fn test_encode_shape() {
        let bytes = encode_transaction(&sample()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            json!({
                "transaction_id": "T48213",
                "customer_id": "C003",
                "timestamp": "2024-05-01T12:00:00.123Z",
                "items": [
                    { "item_id": "I007", "quantity": 2, "price": 30 },
                    { "item_id": "I001", "quantity": 1, "price": 100 }
                ],
                "total_amount": 160,
                "store_id": "S001"
            })
        );
    }

    #[test]
    fn test_encode_field_order() {
        let text = String::from_utf8(encode_transaction(&sample()).unwrap()).unwrap();
        let positions: Vec<usize> = [
            "\"transaction_id\"",
            "\"customer_id\"",
            "\"timestamp\"",
            "\"items\"",
            "\"total_amount\"",
            "\"store_id\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_decode_encoded() {
        let tx = sample();
        let decoded = decode_transaction(&encode_transaction(&tx).unwrap()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_decode_rejects_total_mismatch() {
        let payload = json!({
            "transaction_id": "T10000",
            "customer_id": "C001",
            "timestamp": "2024-05-01T12:00:00.000Z",
            "items": [ { "item_id": "I003", "quantity": 2, "price": 30 } ],
            "total_amount": 61,
            "store_id": "S002"
        });

        let err = decode_transaction(payload.to_string().as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            RetailTypesError::TotalMismatch {
                expected: 60,
                actual: 61
            }
        ));
    }

    #[test]
    fn test_decode_rejects_empty_items() {
        let payload = json!({
            "transaction_id": "T10000",
            "customer_id": "C001",
            "timestamp": "2024-05-01T12:00:00.000Z",
            "items": [],
            "total_amount": 0,
            "store_id": "S002"
        });

        let err = decode_transaction(payload.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, RetailTypesError::EmptyItems));
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let payload = json!({
            "transaction_id": "T10000",
            "customer_id": "C001",
            "timestamp": "yesterday",
            "items": [ { "item_id": "I001", "quantity": 1, "price": 10 } ],
            "total_amount": 10,
            "store_id": "S002"
        });

        let err = decode_transaction(payload.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, RetailTypesError::Timestamp { .. }));
    }

    #[test]
    fn test_decode_rejects_overflowing_total() {
        let payload = json!({
            "transaction_id": "T10000",
            "customer_id": "C001",
            "timestamp": "2024-05-01T12:00:00.000Z",
            "items": [
                { "item_id": "I001", "quantity": 4294967295u32, "price": 4294967295u32 },
                { "item_id": "I002", "quantity": 4294967295u32, "price": 4294967295u32 }
            ],
            "total_amount": 0,
            "store_id": "S002"
        });

        let err = decode_transaction(payload.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, RetailTypesError::Overflow));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode_transaction(b"{not json").unwrap_err();
        assert!(matches!(err, RetailTypesError::Json(_)));
    }

    #[test]
    fn test_format_timestamp_zero_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-02T03:04:05.000Z");
    }
}
