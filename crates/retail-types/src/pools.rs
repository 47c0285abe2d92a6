//! Fixed identifier pools used as sampling universes.
//!
//! Every generated value is drawn uniformly from one of these slices.

/// Customers that can appear on a transaction.
pub const CUSTOMER_IDS: &[&str] = &["C001", "C002", "C003", "C004", "C005"];

/// Stores a transaction can be rung up at.
pub const STORE_IDS: &[&str] = &["S001", "S002", "S003", "S004", "S005"];

/// Catalogue items that can appear as line items.
pub const ITEM_IDS: &[&str] = &[
    "I001", "I002", "I003", "I004", "I005", "I006", "I007", "I008", "I009", "I010",
];

/// Unit prices, whole multiples of 10.
pub const PRICES: &[u32] = &[10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Quantities a single line item can carry.
pub const QUANTITIES: &[u32] = &[1, 2, 3];

/// Smallest number of line items on a transaction.
pub const MIN_ITEMS: usize = 1;

/// Largest number of line items on a transaction.
pub const MAX_ITEMS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(CUSTOMER_IDS.len(), 5);
        assert_eq!(STORE_IDS.len(), 5);
        assert_eq!(ITEM_IDS.len(), 10);
        assert_eq!(PRICES.len(), 10);
        assert_eq!(QUANTITIES, &[1, 2, 3]);
    }

    #[test]
    fn test_pools_have_no_duplicates() {
        for pool in [CUSTOMER_IDS, STORE_IDS, ITEM_IDS] {
            let unique: HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len());
        }
    }

    #[test]
    fn test_prices_are_multiples_of_ten() {
        for (i, price) in PRICES.iter().enumerate() {
            assert_eq!(*price, (i as u32 + 1) * 10);
        }
    }
}
