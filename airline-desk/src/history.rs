//! Bounded cancellation history.
//!
//! Every successful cancellation, on any flight, is pushed here in the order
//! it happened. Popping a record only reports what was cancelled; it does not
//! bring the reservation back.

use crate::domain::Pnr;

/// Default number of records the history keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One cancelled reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationRecord {
    pub pnr: Pnr,
    pub name: String,
}

/// Error returned when pushing onto a full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cancellation history full ({capacity} records)")]
pub struct HistoryFull {
    pub capacity: usize,
}

/// Fixed-capacity LIFO of cancellation records.
///
/// Once full, further pushes are rejected rather than evicting old records.
#[derive(Debug, Clone)]
pub struct CancelHistory {
    records: Vec<CancellationRecord>,
    capacity: usize,
}

impl CancelHistory {
    /// Create an empty history holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a cancellation on top of the stack.
    pub fn push(&mut self, record: CancellationRecord) -> Result<(), HistoryFull> {
        if self.is_full() {
            return Err(HistoryFull {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove and return the most recent record.
    pub fn pop(&mut self) -> Option<CancellationRecord> {
        self.records.pop()
    }

    /// The most recent record, without removing it.
    pub fn peek(&self) -> Option<&CancellationRecord> {
        self.records.last()
    }

    /// Records from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &CancellationRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for CancelHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Pops return accepted pushes in exact reverse order
        #[test]
        fn pops_reverse_pushes(capacity in 1usize..12, n in 0u64..30) {
            let mut history = CancelHistory::new(capacity);
            let mut accepted = Vec::new();
            for pnr in 0..n {
                let rec = CancellationRecord { pnr: Pnr::new(pnr), name: format!("P{pnr}") };
                if history.push(rec.clone()).is_ok() {
                    accepted.push(rec);
                }
            }
            prop_assert!(history.len() <= capacity);

            let mut popped = Vec::new();
            while let Some(rec) = history.pop() {
                popped.push(rec);
            }
            accepted.reverse();
            prop_assert_eq!(popped, accepted);
        }
    }
}
