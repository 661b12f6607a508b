//! # Chain Verification
//!
//! Verifies the integrity of an ordered custody entry list. The
//! verification function is total — it never errors and never stops at
//! the first finding. Every violation is accumulated so a reviewer sees
//! the full extent of corruption in one pass, with ordering problems
//! reported distinctly from hash mismatches: "out of order" and
//! "altered" are different findings.

use serde::Serialize;

use crate::entry::{CustodyAction, CustodyEntry};

/// One verification finding, anchored to the entry that triggered it
/// where applicable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChainViolation {
    /// An entry is timestamped before its predecessor.
    OrderingViolation {
        /// The out-of-order entry.
        entry_id: String,
        /// Its timestamp.
        timestamp: String,
        /// The predecessor's timestamp it falls behind.
        previous: String,
    },
    /// An entry's stored hash does not match its fields — possible
    /// tampering with that specific entry.
    PossibleTampering {
        /// The entry whose hash failed recomputation.
        entry_id: String,
    },
    /// A non-empty ledger has no RECEIVED entry, so provenance is
    /// unestablished.
    MissingProvenance,
    /// An entry follows a DESTROYED event, which is terminal.
    EntryAfterDestruction {
        /// The entry recorded after destruction.
        entry_id: String,
    },
}

impl std::fmt::Display for ChainViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderingViolation {
                entry_id,
                timestamp,
                previous,
            } => write!(
                f,
                "ordering violation: entry {entry_id} at {timestamp} precedes prior entry at {previous}"
            ),
            Self::PossibleTampering { entry_id } => {
                write!(f, "possible tampering: entry {entry_id} failed hash verification")
            }
            Self::MissingProvenance => {
                write!(f, "missing provenance: no RECEIVED entry in a non-empty ledger")
            }
            Self::EntryAfterDestruction { entry_id } => {
                write!(f, "entry {entry_id} recorded after evidence destruction")
            }
        }
    }
}

/// The structured result of a chain verification pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainVerification {
    /// True when no violation was found.
    pub valid: bool,
    /// Every violation found, in detection order.
    pub violations: Vec<ChainViolation>,
}

impl ChainVerification {
    /// The violations rendered as display strings, for report embedding.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

/// Verify an ordered custody entry list.
///
/// Checks, accumulating every finding:
///
/// 1. **Ordering** — each timestamp is ≥ its predecessor's; inversions
///    are reported per entry, not silently tolerated.
/// 2. **Hashes** — each stored hash equals the recomputation from the
///    entry's bound fields; mismatches name the specific entry and leave
///    the others' status unaffected.
/// 3. **Provenance** — a non-empty list must contain at least one
///    RECEIVED entry.
/// 4. **Terminality** — nothing may follow a DESTROYED entry.
///
/// An empty list is trivially valid.
pub fn verify_chain(entries: &[CustodyEntry]) -> ChainVerification {
    let mut violations = Vec::new();

    let mut prev_timestamp = None;
    let mut destroyed_seen = false;

    for entry in entries {
        if let Some(prev) = prev_timestamp {
            if entry.timestamp < prev {
                violations.push(ChainViolation::OrderingViolation {
                    entry_id: entry.id.clone(),
                    timestamp: entry.timestamp.to_iso8601(),
                    previous: prev.to_iso8601(),
                });
            }
        }
        prev_timestamp = Some(entry.timestamp);

        if !entry.verify_hash() {
            violations.push(ChainViolation::PossibleTampering {
                entry_id: entry.id.clone(),
            });
        }

        if destroyed_seen {
            violations.push(ChainViolation::EntryAfterDestruction {
                entry_id: entry.id.clone(),
            });
        }
        if entry.action == CustodyAction::Destroyed {
            destroyed_seen = true;
        }
    }

    if !entries.is_empty() && !entries.iter().any(|e| e.action == CustodyAction::Received) {
        violations.push(ChainViolation::MissingProvenance);
    }

    if !violations.is_empty() {
        tracing::warn!(
            violation_count = violations.len(),
            "custody chain failed verification"
        );
    }

    ChainVerification {
        valid: violations.is_empty(),
        violations,
    }
}
