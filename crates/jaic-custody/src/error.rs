//! # Custody Error Types
//!
//! Structured errors for custody ledger operations. These cover the
//! append-time lifecycle policy only — chain *verification* never errors;
//! it accumulates findings into a [`crate::verify::ChainVerification`]
//! instead.

use thiserror::Error;

/// Errors from custody ledger append operations.
#[derive(Error, Debug)]
pub enum CustodyError {
    /// The first entry for an evidence item must be RECEIVED.
    #[error("missing provenance: first custody entry for {evidence_id} must be RECEIVED, got {action}")]
    MissingProvenance {
        /// The evidence item the append targeted.
        evidence_id: String,
        /// The action that was attempted.
        action: String,
    },

    /// DESTROYED is terminal: nothing may be appended after it.
    #[error("evidence {evidence_id} is destroyed; no further custody entries may be appended")]
    EvidenceDestroyed {
        /// The evidence item whose ledger is closed.
        evidence_id: String,
    },

    /// The entry belongs to a different case or evidence item.
    #[error("entry {entry_id} does not belong to this ledger ({reason})")]
    ForeignEntry {
        /// The rejected entry's id.
        entry_id: String,
        /// Which binding did not match.
        reason: String,
    },

    /// The entry's stored hash does not match its fields.
    #[error("entry {entry_id} failed hash verification on append")]
    HashMismatch {
        /// The rejected entry's id.
        entry_id: String,
    },

    /// The entry's timestamp predates the current ledger head.
    #[error("entry {entry_id} is timestamped before the ledger head")]
    NonMonotonicTimestamp {
        /// The rejected entry's id.
        entry_id: String,
    },
}
