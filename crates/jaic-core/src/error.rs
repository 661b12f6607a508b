//! # Error Hierarchy
//!
//! Structured error types for the JAIC evidence stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Integrity and cryptographic failures are typed outcomes that propagate
//! to the caller; they are never downgraded to warnings. Format parsing at
//! the identifier boundary is total instead — those operations return
//! `bool`/`Option` rather than erroring.

use thiserror::Error;

/// Top-level error type for the JAIC evidence stack.
#[derive(Error, Debug)]
pub enum JaicError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Content integrity violation.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Cryptographic operation failure.
    #[error("cryptographic error: {0}")]
    Cryptographic(String),

    /// Custody lifecycle policy violation.
    #[error("custody policy violation: {0}")]
    CustodyPolicy(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from validated domain-primitive constructors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Not a recognized case domain code.
    #[error("unknown case domain code: {0:?}")]
    UnknownDomain(String),

    /// Case sequence number outside the 4-digit range.
    #[error("case sequence out of range (0..=9999): {0}")]
    SequenceOutOfRange(u32),

    /// Calendar month outside 1..=12.
    #[error("month out of range (1..=12): {0}")]
    MonthOutOfRange(u8),

    /// Calendar year outside the four-digit range the identifier encodes.
    #[error("year out of range (1000..=9999): {0}")]
    YearOutOfRange(u16),

    /// Evidence identifier empty or containing non-printable characters.
    #[error("invalid evidence id: {0:?}")]
    InvalidEvidenceId(String),

    /// Timestamp string rejected.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
