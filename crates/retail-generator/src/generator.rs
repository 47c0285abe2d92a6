//! Main generator for producing synthetic transactions.

use crate::clock::{Clock, SystemClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use retail_types::pools::{MAX_ITEMS, MIN_ITEMS};
use retail_types::{LineItem, Transaction, CUSTOMER_IDS, ITEM_IDS, PRICES, QUANTITIES, STORE_IDS};

/// Range of the numeric part of a transaction id, `T10000`..`T99999`.
const TRANSACTION_NUMBER_MIN: u32 = 10_000;
const TRANSACTION_NUMBER_MAX: u32 = 99_999;

/// Generator that produces random point-of-sale transactions.
///
/// All randomness comes from a single `StdRng`. Seeding it with
/// [`TransactionGenerator::new`] and fixing the clock makes the output fully
/// reproducible.
pub struct TransactionGenerator {
    /// Random source for every sampled field
    rng: StdRng,
    /// Source of transaction timestamps
    clock: Box<dyn Clock>,
    /// Number of transactions produced so far
    generated: u64,
}

impl TransactionGenerator {
    /// Create a generator with a deterministic seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            clock: Box::new(SystemClock),
            generated: 0,
        }
    }

    /// Replace the wall clock used for timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Number of transactions generated so far.
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Generate the next transaction.
    pub fn next_transaction(&mut self) -> Transaction {
        let item_count = self.rng.gen_range(MIN_ITEMS..=MAX_ITEMS);
        let items: Vec<LineItem> = (0..item_count).map(|_| self.line_item()).collect();

        let number = self
            .rng
            .gen_range(TRANSACTION_NUMBER_MIN..=TRANSACTION_NUMBER_MAX);
        let transaction_id = format!("T{number}");
        let customer_id = pick(&mut self.rng, CUSTOMER_IDS);
        let store_id = pick(&mut self.rng, STORE_IDS);

        self.generated += 1;

        // At most MAX_ITEMS lines of pool quantity and price, far below u64::MAX.
        Transaction::new(
            transaction_id,
            *customer_id,
            self.clock.now(),
            items,
            *store_id,
        )
        .unwrap_or_else(|_| unreachable!("pool values cannot overflow the total"))
    }

    /// Generate `count` transactions lazily.
    pub fn transactions(&mut self, count: u64) -> TransactionIterator<'_> {
        TransactionIterator {
            generator: self,
            remaining: count,
        }
    }

    fn line_item(&mut self) -> LineItem {
        let item_id = pick(&mut self.rng, ITEM_IDS);
        let quantity = pick(&mut self.rng, QUANTITIES);
        let price = pick(&mut self.rng, PRICES);
        LineItem::new(*item_id, *quantity, *price)
    }
}

/// Uniform draw from a non-empty pool.
fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Iterator that lazily generates transactions.
pub struct TransactionIterator<'a> {
    generator: &'a mut TransactionGenerator,
    remaining: u64,
}

impl Iterator for TransactionIterator<'_> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_transaction())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TransactionIterator<'_> {}
