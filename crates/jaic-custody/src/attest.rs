//! # Timestamp Attestations
//!
//! An `EvidenceTimestamp` binds an evidence item's content fingerprint to
//! a point in time under a named authority. One attestation is produced
//! per evidence item at ingestion and never mutated; the optional anchor
//! fields carry an external ledger reference when the authority provides
//! one.

use serde::{Deserialize, Serialize};

use jaic_core::{ContentDigest, EvidenceId, Timestamp};

/// An attestation that a content hash existed at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceTimestamp {
    /// The attested evidence item.
    pub evidence_id: EvidenceId,
    /// The content fingerprint at ingestion.
    pub original_hash: ContentDigest,
    /// When the attestation was made.
    pub timestamp: Timestamp,
    /// The attesting authority.
    pub authority: String,
    /// External anchor block height, when the authority anchors to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// External anchor transaction hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl EvidenceTimestamp {
    /// Attest a content fingerprint at the current time.
    pub fn attest(
        evidence_id: EvidenceId,
        original_hash: ContentDigest,
        authority: impl Into<String>,
    ) -> Self {
        Self::attest_at(evidence_id, original_hash, authority, Timestamp::now())
    }

    /// Attest at an explicit time. Backs [`EvidenceTimestamp::attest()`].
    pub fn attest_at(
        evidence_id: EvidenceId,
        original_hash: ContentDigest,
        authority: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            evidence_id,
            original_hash,
            timestamp,
            authority: authority.into(),
            block_height: None,
            tx_hash: None,
        }
    }

    /// Attach an external ledger anchor.
    pub fn with_anchor(mut self, block_height: u64, tx_hash: impl Into<String>) -> Self {
        self.block_height = Some(block_height);
        self.tx_hash = Some(tx_hash.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaic_core::sha256_digest;

    #[test]
    fn attest_binds_hash_and_authority() {
        let at = EvidenceTimestamp::attest_at(
            EvidenceId::new("ev-att-1").unwrap(),
            sha256_digest(b"payload"),
            "jaic-registry",
            Timestamp::parse("2025-03-01T09:00:00Z").unwrap(),
        );
        assert_eq!(at.authority, "jaic-registry");
        assert_eq!(at.original_hash, sha256_digest(b"payload"));
        assert!(at.block_height.is_none());
        assert!(at.tx_hash.is_none());
    }

    #[test]
    fn anchor_is_optional_and_attachable() {
        let at = EvidenceTimestamp::attest_at(
            EvidenceId::new("ev-att-2").unwrap(),
            sha256_digest(b"payload"),
            "jaic-registry",
            Timestamp::parse("2025-03-01T09:00:00Z").unwrap(),
        )
        .with_anchor(123_456, "0xabc123");
        assert_eq!(at.block_height, Some(123_456));
        assert_eq!(at.tx_hash.as_deref(), Some("0xabc123"));
    }

    #[test]
    fn serde_roundtrip_with_camel_case_wire_names() {
        let at = EvidenceTimestamp::attest_at(
            EvidenceId::new("ev-att-3").unwrap(),
            sha256_digest(b"payload"),
            "jaic-registry",
            Timestamp::parse("2025-03-01T09:00:00Z").unwrap(),
        )
        .with_anchor(7, "0xdef");

        let json = serde_json::to_value(&at).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("evidenceId"));
        assert!(obj.contains_key("originalHash"));
        assert!(obj.contains_key("blockHeight"));
        assert!(obj.contains_key("txHash"));

        let back: EvidenceTimestamp = serde_json::from_value(json).unwrap();
        assert_eq!(back, at);
    }

    #[test]
    fn absent_anchor_fields_are_omitted() {
        let at = EvidenceTimestamp::attest_at(
            EvidenceId::new("ev-att-4").unwrap(),
            sha256_digest(b"payload"),
            "jaic-registry",
            Timestamp::parse("2025-03-01T09:00:00Z").unwrap(),
        );
        let json = serde_json::to_value(&at).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("blockHeight"));
        assert!(!obj.contains_key("txHash"));
    }
}
