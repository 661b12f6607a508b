//! # Custody Entries — Hashed Handling Events
//!
//! A custody entry records one handling event for one evidence item:
//! who did what, when, and where, bound together by a SHA-256 hash so
//! that any post-hoc edit is detectable.
//!
//! Hash input layout (UTF-8 text lines, in order, `\n`-separated):
//!
//!   1. case number canonical string (`JAIC-…`)
//!   2. evidence id token
//!   3. action wire code (`RECEIVED`, `ACCESSED`, …)
//!   4. actor
//!   5. timestamp as ISO8601 with Z suffix
//!
//! Every field that contributes to an entry's hash is listed explicitly
//! so nothing is accidentally omitted. Descriptive fields (`location`,
//! `metadata`) are carried but not hashed, matching the storage format;
//! the entry id is derived from the hash, so it cannot be reassigned to
//! altered content without detection.

use serde::{Deserialize, Serialize};

use jaic_core::{sha256_hex, CaseNumber, EvidenceId, Timestamp};

/// Every kind of handling event a custody ledger can record.
///
/// The lifecycle for a single evidence item is: RECEIVED first, then any
/// number of intermediate events, with DESTROYED terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustodyAction {
    /// Evidence entered custody.
    Received,
    /// Evidence was read or inspected.
    Accessed,
    /// Evidence was subjected to analysis.
    Analyzed,
    /// Custody moved to another party.
    Transferred,
    /// Evidence was placed into storage.
    Stored,
    /// Evidence was destroyed. Terminal.
    Destroyed,
    /// A working copy was produced.
    Duplicated,
    /// Evidence integrity was re-verified against its fingerprint.
    Verified,
}

impl CustodyAction {
    /// All actions in canonical order.
    pub fn all() -> &'static [CustodyAction] {
        &[
            Self::Received,
            Self::Accessed,
            Self::Analyzed,
            Self::Transferred,
            Self::Stored,
            Self::Destroyed,
            Self::Duplicated,
            Self::Verified,
        ]
    }

    /// The uppercase wire code used in entry hashes and report exports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::Accessed => "ACCESSED",
            Self::Analyzed => "ANALYZED",
            Self::Transferred => "TRANSFERRED",
            Self::Stored => "STORED",
            Self::Destroyed => "DESTROYED",
            Self::Duplicated => "DUPLICATED",
            Self::Verified => "VERIFIED",
        }
    }
}

impl std::fmt::Display for CustodyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single, immutable entry in an evidence item's chain of custody.
///
/// Created by [`CustodyEntry::record()`] (or the per-evidence
/// [`crate::ledger::CustodyLedger`]), never mutated or deleted. The
/// `hash` field commits to the five bound fields per the module-level
/// layout; [`CustodyEntry::verify_hash()`] recomputes and compares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustodyEntry {
    /// Hash-derived identifier (`coc-` + first 16 hex chars of `hash`).
    pub id: String,
    /// The owning case.
    #[serde(rename = "caseNumber")]
    pub case_number: CaseNumber,
    /// The evidence item this event concerns.
    #[serde(rename = "evidenceId")]
    pub evidence_id: EvidenceId,
    /// What happened.
    pub action: CustodyAction,
    /// Who did it.
    pub actor: String,
    /// When it happened (UTC, seconds precision).
    pub timestamp: Timestamp,
    /// Deployment/host context supplied by the caller's environment.
    pub location: String,
    /// SHA-256 over the canonical field layout, lowercase hex.
    pub hash: String,
    /// Optional structured context (not hashed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Optional hex Ed25519 signature over `hash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl CustodyEntry {
    /// Record a custody event at the current UTC time.
    ///
    /// Computes the entry hash and derives the id; pure apart from the
    /// clock read. Persistence is the caller's concern.
    pub fn record(
        case_number: &CaseNumber,
        evidence_id: &EvidenceId,
        action: CustodyAction,
        actor: impl Into<String>,
        location: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self::record_at(
            case_number,
            evidence_id,
            action,
            actor,
            location,
            metadata,
            Timestamp::now(),
        )
    }

    /// Record a custody event at an explicit timestamp.
    ///
    /// Backs [`CustodyEntry::record()`] and makes ledgers reproducible
    /// under test.
    pub fn record_at(
        case_number: &CaseNumber,
        evidence_id: &EvidenceId,
        action: CustodyAction,
        actor: impl Into<String>,
        location: impl Into<String>,
        metadata: Option<serde_json::Value>,
        timestamp: Timestamp,
    ) -> Self {
        let actor = actor.into();
        let hash = entry_hash(case_number, evidence_id, action, &actor, timestamp);
        let id = derive_entry_id(&hash);
        Self {
            id,
            case_number: case_number.clone(),
            evidence_id: evidence_id.clone(),
            action,
            actor,
            timestamp,
            location: location.into(),
            hash,
            metadata,
            signature: None,
        }
    }

    /// Attach a signer's attestation over this entry's hash.
    pub fn with_signature(mut self, signature_hex: impl Into<String>) -> Self {
        self.signature = Some(signature_hex.into());
        self
    }

    /// Recompute the hash from this entry's bound fields and compare to
    /// the stored value.
    pub fn verify_hash(&self) -> bool {
        entry_hash(
            &self.case_number,
            &self.evidence_id,
            self.action,
            &self.actor,
            self.timestamp,
        ) == self.hash
    }
}

/// Compute the SHA-256 entry hash over the canonical field layout.
///
/// See the module-level documentation for the exact byte layout. The
/// digest is cryptographic on purpose: the ledger's tamper-evidence
/// rests on this hash, so the rolling checksum used for case-number typo
/// detection has no business here.
pub fn entry_hash(
    case_number: &CaseNumber,
    evidence_id: &EvidenceId,
    action: CustodyAction,
    actor: &str,
    timestamp: Timestamp,
) -> String {
    let input = format!(
        "{}\n{}\n{}\n{}\n{}",
        case_number.as_str(),
        evidence_id.as_str(),
        action.code(),
        actor,
        timestamp.to_iso8601()
    );
    sha256_hex(input.as_bytes())
}

/// Derive the entry id from its hash: `coc-` + first 16 hex chars.
fn derive_entry_id(hash: &str) -> String {
    format!("coc-{}", &hash[..16])
}
