//! The order identifier sequencer.
//!
//! Deriving the next counter by reading the most recently created order's
//! name and parsing its trailing integer is a read-then-write race: two
//! concurrent creations for the same key can observe the same "last order"
//! and mint a duplicate. The sequencer replaces that with an atomic
//! increment-and-fetch per (company, year, month) key — same-key callers are
//! serialized by the key's entry lock, different keys proceed in parallel.

use dashmap::DashMap;
use faktura_shared::types::{CompanyId, YearMonth};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SequencerError;

/// Scope of one counter: a company within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterKey {
    /// The company orders are numbered for.
    pub company: CompanyId,
    /// The calendar month of the numbering sequence.
    pub period: YearMonth,
}

/// Persisted counter state: the last integer issued for a key.
///
/// The only state this subsystem owns. Counters are never reused after
/// order deletions; gaps are acceptable, duplicates are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// The counter's scope.
    pub key: CounterKey,
    /// The last integer issued; the next call yields `last_issued + 1`.
    pub last_issued: u32,
}

/// Issues unique, monotonic, contiguous-from-1 counters per
/// (company, year, month) key.
#[derive(Debug, Default)]
pub struct OrderSequencer {
    counters: DashMap<CounterKey, u32>,
}

impl OrderSequencer {
    /// Creates a sequencer with every key at `NOT_STARTED`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a sequencer from persisted counter rows.
    #[must_use]
    pub fn seed(states: impl IntoIterator<Item = CounterState>) -> Self {
        let sequencer = Self::new();
        for state in states {
            sequencer.counters.insert(state.key, state.last_issued);
        }
        sequencer
    }

    /// Atomically issues the next counter for the key.
    ///
    /// First call for a key yields 1, each subsequent call the next integer.
    /// The increment happens under the key's entry lock, so concurrent
    /// callers for the same key never observe a stale counter.
    ///
    /// # Errors
    ///
    /// `Contention` if the key's shard lock could not be acquired without
    /// blocking; the counter is unchanged and the caller may retry.
    pub fn next_id(&self, company: CompanyId, period: YearMonth) -> Result<u32, SequencerError> {
        let key = CounterKey { company, period };

        let Some(entry) = self.counters.try_entry(key) else {
            return Err(SequencerError::Contention { company, period });
        };

        let mut counter = entry.or_insert(0);
        *counter += 1;
        let issued = *counter;
        drop(counter);

        debug!(%company, %period, counter = issued, "issued order counter");
        Ok(issued)
    }

    /// Snapshot of every started counter, ordered by key for deterministic
    /// persistence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CounterState> {
        let mut states: Vec<CounterState> = self
            .counters
            .iter()
            .map(|entry| CounterState {
                key: *entry.key(),
                last_issued: *entry.value(),
            })
            .collect();
        states.sort_by_key(|state| (state.key.company, state.key.period));
        states
    }
}
