//! # Report Export — Deterministic Custody Rendering
//!
//! Renders a custody entry list as a fixed plain-text block for verbatim
//! embedding in case reports. The layout is deterministic: the same
//! entries always produce byte-identical output, and every field of every
//! entry appears — absent optional fields print as `(none)` rather than
//! disappearing, so two reports are always line-comparable.
//!
//! A verification pass runs as part of the export and its full result is
//! appended: a report must show `INVALID` plus the enumerated findings
//! rather than omitting the custody section.

use std::fmt::Write as _;

use crate::entry::CustodyEntry;
use crate::verify::verify_chain;

const RULE_HEAVY: &str =
    "========================================================================";
const RULE_LIGHT: &str =
    "------------------------------------------------------------------------";

/// Render a custody entry list plus its verification summary.
///
/// Layout: a header block naming the case and evidence item, one block
/// per entry separated by a light rule, then the verification block. An
/// empty list renders the header with `(no entries)`.
pub fn export_human_readable(entries: &[CustodyEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "CHAIN OF CUSTODY RECORD");
    if let Some(first) = entries.first() {
        let _ = writeln!(out, "Case:       {}", first.case_number);
        let _ = writeln!(out, "Evidence:   {}", first.evidence_id);
    }
    let _ = writeln!(out, "Entries:    {}", entries.len());
    let _ = writeln!(out, "{RULE_HEAVY}");

    if entries.is_empty() {
        let _ = writeln!(out, "(no entries)");
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "{RULE_LIGHT}");
        }
        let _ = writeln!(out, "Entry:      {}", entry.id);
        let _ = writeln!(out, "Action:     {}", entry.action);
        let _ = writeln!(out, "Actor:      {}", entry.actor);
        let _ = writeln!(out, "Timestamp:  {}", entry.timestamp);
        let _ = writeln!(out, "Location:   {}", entry.location);
        let _ = writeln!(out, "Hash:       {}", entry.hash);
        match &entry.metadata {
            Some(metadata) => {
                let _ = writeln!(out, "Metadata:   {metadata}");
            }
            None => {
                let _ = writeln!(out, "Metadata:   (none)");
            }
        }
        match &entry.signature {
            Some(signature) => {
                let _ = writeln!(out, "Signature:  {signature}");
            }
            None => {
                let _ = writeln!(out, "Signature:  (none)");
            }
        }
    }

    let verification = verify_chain(entries);
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(
        out,
        "VERIFICATION: {}",
        if verification.valid { "VALID" } else { "INVALID" }
    );
    for message in verification.messages() {
        let _ = writeln!(out, "  - {message}");
    }
    let _ = writeln!(out, "{RULE_HEAVY}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::CustodyAction;
    use jaic_core::{CaseDomain, CaseNumber, EvidenceId, Timestamp};

    fn chain() -> Vec<CustodyEntry> {
        let issued = Timestamp::parse("2025-03-01T08:00:00Z").unwrap();
        let case = CaseNumber::generate_at(CaseDomain::Contract, 21, 2025, 3, issued).unwrap();
        let evidence = EvidenceId::new("ev-export-1").unwrap();
        vec![
            CustodyEntry::record_at(
                &case,
                &evidence,
                CustodyAction::Received,
                "officer-khan",
                "intake-desk-1",
                Some(serde_json::json!({"seal": "intact"})),
                Timestamp::parse("2025-03-01T09:00:00Z").unwrap(),
            ),
            CustodyEntry::record_at(
                &case,
                &evidence,
                CustodyAction::Analyzed,
                "analyst-2",
                "lab-2",
                None,
                Timestamp::parse("2025-03-02T10:00:00Z").unwrap(),
            ),
        ]
    }

    #[test]
    fn export_is_deterministic() {
        let entries = chain();
        assert_eq!(
            export_human_readable(&entries),
            export_human_readable(&entries)
        );
    }

    #[test]
    fn export_includes_every_field() {
        let entries = chain();
        let text = export_human_readable(&entries);

        for entry in &entries {
            assert!(text.contains(&entry.id));
            assert!(text.contains(entry.action.code()));
            assert!(text.contains(&entry.actor));
            assert!(text.contains(&entry.timestamp.to_iso8601()));
            assert!(text.contains(&entry.location));
            assert!(text.contains(&entry.hash));
        }
        // Metadata prints when present, and as a placeholder when absent.
        assert!(text.contains("\"seal\":\"intact\""));
        assert!(text.contains("Metadata:   (none)"));
        assert!(text.contains("Signature:  (none)"));
        // Header names the case and evidence.
        assert!(text.contains(entries[0].case_number.as_str()));
        assert!(text.contains("ev-export-1"));
    }

    #[test]
    fn valid_chain_reports_valid() {
        let text = export_human_readable(&chain());
        assert!(text.contains("VERIFICATION: VALID"));
        assert!(!text.contains("INVALID"));
    }

    #[test]
    fn invalid_chain_reports_every_finding() {
        let mut entries = chain();
        entries[0].actor = "impostor".to_string();
        entries.swap(0, 1);

        let text = export_human_readable(&entries);
        assert!(text.contains("VERIFICATION: INVALID"));
        assert!(text.contains("possible tampering"));
        assert!(text.contains("ordering violation"));
    }

    #[test]
    fn empty_list_renders_header_and_trivial_validity() {
        let text = export_human_readable(&[]);
        assert!(text.contains("CHAIN OF CUSTODY RECORD"));
        assert!(text.contains("Entries:    0"));
        assert!(text.contains("(no entries)"));
        assert!(text.contains("VERIFICATION: VALID"));
    }

    #[test]
    fn entries_are_separated_by_rules() {
        let text = export_human_readable(&chain());
        assert_eq!(text.matches(RULE_LIGHT).count(), 1);
        assert!(text.starts_with(RULE_HEAVY));
        assert!(text.ends_with(&format!("{RULE_HEAVY}\n")));
    }
}
