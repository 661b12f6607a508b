//! End-to-end intake flow: fingerprint the payload, seal it, open the
//! custody ledger with a RECEIVED entry, attest the fingerprint, then
//! verify and export. This is the composition the intake collaborator
//! runs for every uploaded evidence file.

use jaic_core::{sha256_digest, CaseDomain, CaseNumber, EvidenceId};
use jaic_crypto::{
    decrypt, seal, verify_digest, verify_entry_signature, CustodySigner, EvidenceKey, FileInfo,
};
use jaic_custody::{
    export_human_readable, verify_chain, CustodyAction, CustodyEntry, CustodyLedger,
    CustodyStore, EvidenceTimestamp, InMemoryCustodyStore, InMemorySequenceSource,
    SequenceSource,
};

const PAYLOAD: &[u8] = b"bank statements, Q3, originals";

fn file_info() -> FileInfo {
    FileInfo {
        original_name: "statements-q3.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        encrypted_by: "intake-officer-3".to_string(),
    }
}

#[test]
fn full_intake_flow_produces_consistent_artifacts() {
    // Case number, with the sequence allocated by the persistence layer.
    let sequences = InMemorySequenceSource::new();
    let seq = sequences.next_sequence(2025, 3, CaseDomain::Fraud);
    let case = CaseNumber::generate(CaseDomain::Fraud, seq).unwrap();
    assert!(CaseNumber::validate(case.as_str()));

    let evidence_id = EvidenceId::random();

    // 1. Fingerprint the payload.
    let fingerprint = sha256_digest(PAYLOAD);

    // 2. Seal it.
    let sealed = seal(PAYLOAD, file_info(), None).unwrap();
    assert_eq!(sealed.metadata.size, PAYLOAD.len() as u64);

    // 3. Open the ledger with a RECEIVED entry referencing the fingerprint.
    let mut ledger = CustodyLedger::new(case.clone(), evidence_id.clone());
    ledger
        .append(
            CustodyAction::Received,
            "intake-officer-3",
            "intake-desk-1",
            Some(serde_json::json!({ "contentHash": fingerprint.to_hex() })),
        )
        .unwrap();

    // 4. Attest the fingerprint.
    let attestation =
        EvidenceTimestamp::attest(evidence_id.clone(), fingerprint.clone(), "jaic-registry");
    assert_eq!(attestation.original_hash, fingerprint);

    // Later handling events.
    ledger
        .append(CustodyAction::Accessed, "analyst-7", "lab-2", None)
        .unwrap();
    ledger
        .append(CustodyAction::Verified, "auditor-1", "registry", None)
        .unwrap();

    // The chain verifies and the export reflects it.
    let verification = ledger.verify();
    assert!(verification.valid, "violations: {:?}", verification.violations);

    let report = ledger.export();
    assert!(report.contains(case.as_str()));
    assert!(report.contains(evidence_id.as_str()));
    assert!(report.contains("VERIFICATION: VALID"));

    // The payload round-trips through key export/import.
    let key = EvidenceKey::from_base64(&sealed.key.to_base64()).unwrap();
    let recovered = decrypt(&sealed.envelope, &key).unwrap();
    assert_eq!(recovered, PAYLOAD);
    assert!(verify_digest(&recovered, &fingerprint.to_hex()));
}

#[test]
fn store_backed_flow_feeds_verification() {
    let case = CaseNumber::generate(CaseDomain::Digital, 44).unwrap();
    let evidence_id = EvidenceId::new("ev-store-flow").unwrap();
    let store = InMemoryCustodyStore::new();

    for (action, actor) in [
        (CustodyAction::Received, "intake-officer-3"),
        (CustodyAction::Duplicated, "imaging-tech-1"),
        (CustodyAction::Stored, "vault-clerk-2"),
    ] {
        let entry =
            CustodyEntry::record(&case, &evidence_id, action, actor, "forensics-wing", None);
        store.append_entry(entry).unwrap();
    }

    let retrieved = store.entries_for_evidence(&evidence_id);
    assert_eq!(retrieved.len(), 3);

    let verification = verify_chain(&retrieved);
    assert!(verification.valid, "violations: {:?}", verification.violations);

    let report = export_human_readable(&retrieved);
    assert!(report.contains("DUPLICATED"));
    assert!(report.contains("VERIFICATION: VALID"));
}

#[test]
fn signed_entries_verify_across_the_boundary() {
    let case = CaseNumber::generate(CaseDomain::Crossborder, 9).unwrap();
    let evidence_id = EvidenceId::new("ev-signed-flow").unwrap();
    let signer = CustodySigner::generate();

    let entry = CustodyEntry::record(
        &case,
        &evidence_id,
        CustodyAction::Received,
        "liaison-officer",
        "border-office",
        None,
    );
    let signed = entry.clone().with_signature(signer.sign_entry_hash(&entry.hash));

    let mut ledger = CustodyLedger::new(case, evidence_id);
    ledger.append_recorded(signed).unwrap();

    let stored = &ledger.entries()[0];
    let signature = stored.signature.as_deref().unwrap();
    assert!(verify_entry_signature(
        &stored.hash,
        signature,
        &signer.public_key_hex()
    ));

    // A tampered hash no longer matches the attestation.
    assert!(!verify_entry_signature(
        &"0".repeat(64),
        signature,
        &signer.public_key_hex()
    ));

    let report = ledger.export();
    assert!(report.contains(signature));
}

#[test]
fn tampering_after_persistence_is_visible_end_to_end() {
    let case = CaseNumber::generate(CaseDomain::Misconduct, 2).unwrap();
    let evidence_id = EvidenceId::new("ev-tamper-flow").unwrap();

    let mut ledger = CustodyLedger::new(case, evidence_id);
    ledger
        .append(CustodyAction::Received, "intake-officer-3", "intake", None)
        .unwrap();
    ledger
        .append(CustodyAction::Transferred, "courier-9", "transit", None)
        .unwrap();

    // Simulate an edit to the persisted record.
    let mut persisted = ledger.entries().to_vec();
    persisted[1].actor = "someone-else".to_string();
    let tampered_id = persisted[1].id.clone();

    let verification = verify_chain(&persisted);
    assert!(!verification.valid);
    let messages = verification.messages();
    assert!(messages.iter().any(|m| m.contains(&tampered_id)));

    let report = export_human_readable(&persisted);
    assert!(report.contains("VERIFICATION: INVALID"));
    assert!(report.contains("possible tampering"));
}
