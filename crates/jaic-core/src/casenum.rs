//! # Case Numbers — Checksummed Case Reference Identifiers
//!
//! Defines `CaseNumber`, the human-readable, checksummed case reference
//! string in the canonical form
//!
//! ```text
//! JAIC-YYYYMM-CATEGORY-SSSS-HHHH
//! ```
//!
//! where `YYYYMM` is the issue year and zero-padded month, `CATEGORY` is a
//! [`CaseDomain`] wire code, `SSSS` is the 4-digit zero-padded sequence,
//! and `HHHH` is a 4-character uppercase base-36 checksum.
//!
//! The checksum is a typo/corruption detector for a short human-facing
//! string, not a security control. Content integrity and custody hashing
//! use SHA-256 elsewhere in the stack; the rolling hash here must never be
//! used for those purposes.
//!
//! Sequence numbers must be unique per (year, month, domain). Allocation
//! is the persistence layer's job — callers pass the allocated sequence in
//! explicitly rather than relying on any clock-derived pseudo-sequence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::CaseDomain;
use crate::error::ValidationError;
use crate::temporal::Timestamp;

/// The fixed prefix of every case number.
const PREFIX: &str = "JAIC";

/// A validated, checksummed case reference.
///
/// Immutable once created. The canonical string form is the only
/// externally persisted representation; [`CaseNumber::parse()`] re-derives
/// the structured fields from it (minus the issue timestamp, which is not
/// encoded in the string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseNumber {
    full: String,
    year: u16,
    month: u8,
    domain: CaseDomain,
    sequence: u32,
    checksum: String,
    issued_at: Option<Timestamp>,
}

impl CaseNumber {
    /// Generate a case number for the current year/month.
    ///
    /// `sequence` comes from the caller's sequence source — unique per
    /// (year, month, domain) is the caller's contract to uphold.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SequenceOutOfRange`] if `sequence`
    /// exceeds the 4-digit range.
    pub fn generate(domain: CaseDomain, sequence: u32) -> Result<Self, ValidationError> {
        let now = Timestamp::now();
        Self::generate_at(domain, sequence, now.year(), now.month(), now)
    }

    /// Generate a case number for an explicit year and month.
    ///
    /// Backs [`CaseNumber::generate()`] and makes issuance deterministic
    /// under test.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `sequence` exceeds 9999, `month`
    /// is outside 1..=12, or `year` is outside the four-digit range.
    pub fn generate_at(
        domain: CaseDomain,
        sequence: u32,
        year: u16,
        month: u8,
        issued_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if sequence > 9999 {
            return Err(ValidationError::SequenceOutOfRange(sequence));
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month));
        }
        if !(1000..=9999).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }

        let checksum = checksum(year, month, domain, sequence);
        let full = format!(
            "{PREFIX}-{year}{month:02}-{}-{sequence:04}-{checksum}",
            domain.code()
        );
        Ok(Self {
            full,
            year,
            month,
            domain,
            sequence,
            checksum,
            issued_at: Some(issued_at),
        })
    }

    /// Validate a case number string.
    ///
    /// Total: structural mismatches and checksum mismatches both return
    /// `false`; nothing panics or errors regardless of input.
    pub fn validate(s: &str) -> bool {
        Self::parse(s).is_some()
    }

    /// Parse a case number string into its structured form.
    ///
    /// Returns `None` on any structural or checksum mismatch. The issue
    /// timestamp is not encoded in the string, so `issued_at` is `None` on
    /// the parsed value.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let prefix = parts.next()?;
        let yyyymm = parts.next()?;
        let code = parts.next()?;
        let ssss = parts.next()?;
        let hhhh = parts.next()?;
        if parts.next().is_some() || prefix != PREFIX {
            return None;
        }

        if yyyymm.len() != 6 || !yyyymm.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: u16 = yyyymm[..4].parse().ok()?;
        let month: u8 = yyyymm[4..].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }

        let domain: CaseDomain = code.parse().ok()?;

        if ssss.len() != 4 || !ssss.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let sequence: u32 = ssss.parse().ok()?;

        if hhhh.len() != 4
            || !hhhh
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return None;
        }
        if hhhh != checksum(year, month, domain, sequence) {
            return None;
        }

        Some(Self {
            full: s.to_string(),
            year,
            month,
            domain,
            sequence,
            checksum: hhhh.to_string(),
            issued_at: None,
        })
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Issue year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Issue month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The investigation domain.
    pub fn domain(&self) -> CaseDomain {
        self.domain
    }

    /// Sequence within the (year, month, domain) tuple.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The 4-character checksum segment.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// When this number was issued, if known.
    ///
    /// `None` for values recovered via [`CaseNumber::parse()`] — the
    /// creation instant is not recoverable from the string.
    pub fn issued_at(&self) -> Option<Timestamp> {
        self.issued_at
    }
}

impl std::fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl Serialize for CaseNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full)
    }
}

impl<'de> Deserialize<'de> for CaseNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid case number: {s:?}")))
    }
}

/// Compute the 4-character base-36 checksum segment.
///
/// The input is the canonical concatenation `{year}{month:02}{CODE}{seq:04}`
/// fed through a 31-multiplier rolling hash, reduced to uppercase base-36
/// and normalized to exactly 4 characters (left-padded with `0`, keeping
/// the low-order digits when longer).
///
/// Deterministic, total, and fast — and deliberately not a cryptographic
/// hash. It detects typos and transcription damage on the human-facing
/// string only.
fn checksum(year: u16, month: u8, domain: CaseDomain, sequence: u32) -> String {
    let input = format!("{year}{month:02}{}{sequence:04}", domain.code());
    let mut h: u32 = 0;
    for b in input.bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(b));
    }
    let encoded = to_base36_upper(h);
    if encoded.len() >= 4 {
        encoded[encoded.len() - 4..].to_string()
    } else {
        format!("{encoded:0>4}")
    }
}

/// Encode a u32 in uppercase base-36.
fn to_base36_upper(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
