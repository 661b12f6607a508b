//! # Persistence Boundary — Repository Traits
//!
//! The custody core produces and consumes well-formed values; where they
//! live is the persistence collaborator's concern. These traits are the
//! entire contract: a store keyed by evidence id that appends atomically
//! and returns ordered entry lists, and a sequence allocator that hands
//! out unique case sequence numbers per (year, month, domain).
//!
//! The in-memory implementations back the test suite and stand in for a
//! real backend. Both serialize access with a mutex, which also gives
//! the per-evidence single-writer ordering the ledger's monotonicity
//! check relies on.

use std::collections::HashMap;

use parking_lot::Mutex;

use jaic_core::{CaseDomain, EvidenceId};

use crate::entry::{CustodyAction, CustodyEntry};
use crate::error::CustodyError;

/// Ordered, append-atomic storage for custody entries.
pub trait CustodyStore {
    /// Append an entry to its evidence item's log.
    ///
    /// Appends for one evidence id are serialized; the lifecycle policy
    /// (RECEIVED first, DESTROYED terminal) is enforced here too, so a
    /// store never accumulates a log the verifier must reject on policy
    /// grounds.
    ///
    /// # Errors
    ///
    /// Returns the same policy errors as
    /// [`crate::ledger::CustodyLedger::append()`].
    fn append_entry(&self, entry: CustodyEntry) -> Result<(), CustodyError>;

    /// The ordered entry list for an evidence item (empty if unknown).
    fn entries_for_evidence(&self, evidence_id: &EvidenceId) -> Vec<CustodyEntry>;
}

/// Allocator of case sequence numbers, unique per (year, month, domain).
pub trait SequenceSource {
    /// The next unused sequence for the tuple, starting at 1.
    fn next_sequence(&self, year: u16, month: u8, domain: CaseDomain) -> u32;
}

/// In-memory custody store keyed by evidence id.
#[derive(Default)]
pub struct InMemoryCustodyStore {
    logs: Mutex<HashMap<String, Vec<CustodyEntry>>>,
}

impl InMemoryCustodyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustodyStore for InMemoryCustodyStore {
    fn append_entry(&self, entry: CustodyEntry) -> Result<(), CustodyError> {
        let mut logs = self.logs.lock();
        let log = logs
            .entry(entry.evidence_id.as_str().to_string())
            .or_default();

        if let Some(last) = log.last() {
            if last.action == CustodyAction::Destroyed {
                return Err(CustodyError::EvidenceDestroyed {
                    evidence_id: entry.evidence_id.to_string(),
                });
            }
        } else if entry.action != CustodyAction::Received {
            return Err(CustodyError::MissingProvenance {
                evidence_id: entry.evidence_id.to_string(),
                action: entry.action.code().to_string(),
            });
        }

        log.push(entry);
        Ok(())
    }

    fn entries_for_evidence(&self, evidence_id: &EvidenceId) -> Vec<CustodyEntry> {
        self.logs
            .lock()
            .get(evidence_id.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for InMemoryCustodyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCustodyStore")
            .field("evidence_items", &self.logs.lock().len())
            .finish()
    }
}

/// In-memory sequence allocator with one counter per tuple.
#[derive(Default)]
pub struct InMemorySequenceSource {
    counters: Mutex<HashMap<(u16, u8, CaseDomain), u32>>,
}

impl InMemorySequenceSource {
    /// Create an allocator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceSource for InMemorySequenceSource {
    fn next_sequence(&self, year: u16, month: u8, domain: CaseDomain) -> u32 {
        let mut counters = self.counters.lock();
        let counter = counters.entry((year, month, domain)).or_insert(0);
        *counter += 1;
        *counter
    }
}

impl std::fmt::Debug for InMemorySequenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySequenceSource")
            .field("tuples", &self.counters.lock().len())
            .finish()
    }
}
