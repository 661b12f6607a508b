//! # Custody Ledger — Per-Evidence Append-Only Log
//!
//! One `CustodyLedger` owns the ordered custody entries of exactly one
//! evidence item. Appends enforce the lifecycle policy at write time:
//! the first entry must be RECEIVED and nothing follows DESTROYED.
//! Entries are immutable once appended; there is no removal operation.
//!
//! Concurrent appends for the same evidence item must be serialized by
//! the caller (the in-memory store in [`crate::store`] does this with a
//! mutex) so that the timestamp-monotonicity check in
//! [`crate::verify::verify_chain`] stays meaningful.
//!
//! ## Thread Safety
//!
//! This struct is not `Sync`. Use external synchronisation if sharing
//! across threads (e.g., `Arc<Mutex<CustodyLedger>>`).

use jaic_core::{CaseNumber, EvidenceId, Timestamp};

use crate::entry::{CustodyAction, CustodyEntry};
use crate::error::CustodyError;
use crate::export::export_human_readable;
use crate::verify::{verify_chain, ChainVerification};

/// The append-only custody log for a single evidence item.
#[derive(Debug, Clone)]
pub struct CustodyLedger {
    case_number: CaseNumber,
    evidence_id: EvidenceId,
    entries: Vec<CustodyEntry>,
}

impl CustodyLedger {
    /// Create an empty ledger bound to one case and one evidence item.
    pub fn new(case_number: CaseNumber, evidence_id: EvidenceId) -> Self {
        Self {
            case_number,
            evidence_id,
            entries: Vec::new(),
        }
    }

    /// The case this ledger belongs to.
    pub fn case_number(&self) -> &CaseNumber {
        &self.case_number
    }

    /// The evidence item this ledger tracks.
    pub fn evidence_id(&self) -> &EvidenceId {
        &self.evidence_id
    }

    /// All entries, in append order.
    pub fn entries(&self) -> &[CustodyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record and append a custody event at the current time.
    ///
    /// The entry timestamp is clamped to the ledger head if the wall
    /// clock reads earlier than the last entry — a clock regression must
    /// not corrupt the append order of an otherwise serial writer.
    ///
    /// # Errors
    ///
    /// - [`CustodyError::MissingProvenance`] if the ledger is empty and
    ///   `action` is not [`CustodyAction::Received`].
    /// - [`CustodyError::EvidenceDestroyed`] if a DESTROYED entry has
    ///   already been appended.
    pub fn append(
        &mut self,
        action: CustodyAction,
        actor: impl Into<String>,
        location: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) -> Result<&CustodyEntry, CustodyError> {
        self.check_policy(action)?;

        let mut timestamp = Timestamp::now();
        if let Some(last) = self.entries.last() {
            if timestamp < last.timestamp {
                timestamp = last.timestamp;
            }
        }

        let entry = CustodyEntry::record_at(
            &self.case_number,
            &self.evidence_id,
            action,
            actor,
            location,
            metadata,
            timestamp,
        );
        tracing::debug!(
            entry_id = %entry.id,
            action = %action,
            evidence_id = %self.evidence_id,
            "custody entry appended"
        );
        self.entries.push(entry);
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Append an entry recorded elsewhere (e.g., signed out-of-band).
    ///
    /// Beyond the lifecycle policy, the entry must belong to this ledger,
    /// carry a hash that verifies, and not predate the ledger head.
    ///
    /// # Errors
    ///
    /// The policy errors of [`CustodyLedger::append()`], plus
    /// [`CustodyError::ForeignEntry`], [`CustodyError::HashMismatch`],
    /// and [`CustodyError::NonMonotonicTimestamp`].
    pub fn append_recorded(&mut self, entry: CustodyEntry) -> Result<&CustodyEntry, CustodyError> {
        if entry.case_number != self.case_number {
            return Err(CustodyError::ForeignEntry {
                entry_id: entry.id,
                reason: "case number mismatch".to_string(),
            });
        }
        if entry.evidence_id != self.evidence_id {
            return Err(CustodyError::ForeignEntry {
                entry_id: entry.id,
                reason: "evidence id mismatch".to_string(),
            });
        }
        if !entry.verify_hash() {
            return Err(CustodyError::HashMismatch { entry_id: entry.id });
        }
        if let Some(last) = self.entries.last() {
            if entry.timestamp < last.timestamp {
                return Err(CustodyError::NonMonotonicTimestamp { entry_id: entry.id });
            }
        }
        self.check_policy(entry.action)?;

        self.entries.push(entry);
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Verify the full chain of this ledger.
    pub fn verify(&self) -> ChainVerification {
        verify_chain(&self.entries)
    }

    /// Render this ledger's report text.
    pub fn export(&self) -> String {
        export_human_readable(&self.entries)
    }

    /// Lifecycle policy shared by both append paths.
    fn check_policy(&self, action: CustodyAction) -> Result<(), CustodyError> {
        if let Some(last) = self.entries.last() {
            if last.action == CustodyAction::Destroyed {
                tracing::warn!(
                    evidence_id = %self.evidence_id,
                    attempted = %action,
                    "append refused: evidence already destroyed"
                );
                return Err(CustodyError::EvidenceDestroyed {
                    evidence_id: self.evidence_id.to_string(),
                });
            }
        } else if action != CustodyAction::Received {
            tracing::warn!(
                evidence_id = %self.evidence_id,
                attempted = %action,
                "append refused: first entry must be RECEIVED"
            );
            return Err(CustodyError::MissingProvenance {
                evidence_id: self.evidence_id.to_string(),
                action: action.code().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaic_core::CaseDomain;

    fn ledger() -> CustodyLedger {
        let ts = Timestamp::parse("2025-03-01T08:00:00Z").unwrap();
        let case = CaseNumber::generate_at(CaseDomain::Misconduct, 3, 2025, 3, ts).unwrap();
        CustodyLedger::new(case, EvidenceId::new("ev-ledger-1").unwrap())
    }

    #[test]
    fn first_append_must_be_received() {
        let mut ledger = ledger();
        let err = ledger
            .append(CustodyAction::Accessed, "analyst-2", "lab", None)
            .unwrap_err();
        assert!(matches!(err, CustodyError::MissingProvenance { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn received_then_events_build_a_valid_chain() {
        let mut ledger = ledger();
        ledger
            .append(CustodyAction::Received, "officer-khan", "intake", None)
            .unwrap();
        ledger
            .append(CustodyAction::Accessed, "analyst-2", "lab", None)
            .unwrap();
        ledger
            .append(CustodyAction::Stored, "clerk-1", "vault", None)
            .unwrap();

        assert_eq!(ledger.len(), 3);
        let result = ledger.verify();
        assert!(result.valid, "violations: {:?}", result.violations);
    }

    #[test]
    fn nothing_follows_destruction() {
        let mut ledger = ledger();
        ledger
            .append(CustodyAction::Received, "officer-khan", "intake", None)
            .unwrap();
        ledger
            .append(CustodyAction::Destroyed, "disposal-unit", "incinerator", None)
            .unwrap();

        let err = ledger
            .append(CustodyAction::Accessed, "analyst-2", "lab", None)
            .unwrap_err();
        assert!(matches!(err, CustodyError::EvidenceDestroyed { .. }));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn entries_carry_ledger_bindings() {
        let mut ledger = ledger();
        let entry = ledger
            .append(CustodyAction::Received, "officer-khan", "intake", None)
            .unwrap();
        let entry_case_number = entry.case_number.clone();
        let entry_evidence_id = entry.evidence_id.clone();
        let entry_hash_ok = entry.verify_hash();
        assert_eq!(&entry_case_number, ledger.case_number());
        assert_eq!(&entry_evidence_id, ledger.evidence_id());
        assert!(entry_hash_ok);
    }

    #[test]
    fn append_recorded_accepts_matching_entry() {
        let mut ledger = ledger();
        let entry = CustodyEntry::record(
            ledger.case_number(),
            ledger.evidence_id(),
            CustodyAction::Received,
            "officer-khan",
            "intake",
            None,
        );
        ledger.append_recorded(entry).unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn append_recorded_rejects_foreign_evidence() {
        let mut ledger = ledger();
        let other = EvidenceId::new("ev-other").unwrap();
        let entry = CustodyEntry::record(
            ledger.case_number(),
            &other,
            CustodyAction::Received,
            "officer-khan",
            "intake",
            None,
        );
        assert!(matches!(
            ledger.append_recorded(entry).unwrap_err(),
            CustodyError::ForeignEntry { .. }
        ));
    }

    #[test]
    fn append_recorded_rejects_tampered_entry() {
        let mut ledger = ledger();
        let mut entry = CustodyEntry::record(
            ledger.case_number(),
            ledger.evidence_id(),
            CustodyAction::Received,
            "officer-khan",
            "intake",
            None,
        );
        entry.actor = "impostor".to_string();
        assert!(matches!(
            ledger.append_recorded(entry).unwrap_err(),
            CustodyError::HashMismatch { .. }
        ));
    }

    #[test]
    fn append_recorded_rejects_backdated_entry() {
        let mut ledger = ledger();
        ledger
            .append(CustodyAction::Received, "officer-khan", "intake", None)
            .unwrap();

        let backdated = CustodyEntry::record_at(
            ledger.case_number(),
            ledger.evidence_id(),
            CustodyAction::Accessed,
            "analyst-2",
            "lab",
            None,
            Timestamp::parse("2001-01-01T00:00:00Z").unwrap(),
        );
        assert!(matches!(
            ledger.append_recorded(backdated).unwrap_err(),
            CustodyError::NonMonotonicTimestamp { .. }
        ));
    }

    #[test]
    fn export_delegates_to_report_rendering() {
        let mut ledger = ledger();
        ledger
            .append(CustodyAction::Received, "officer-khan", "intake", None)
            .unwrap();
        let text = ledger.export();
        assert!(text.contains("RECEIVED"));
        assert!(text.contains("VALID"));
    }
}
