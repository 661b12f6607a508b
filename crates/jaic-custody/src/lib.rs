//! # jaic-custody — Tamper-Evident Chain of Custody
//!
//! This crate models the custody ledger of the JAIC evidence stack: an
//! ordered, append-only sequence of handling events for each evidence
//! item, each event bound into a SHA-256 hash so post-hoc edits are
//! detectable.
//!
//! - [`CustodyEntry`] / [`CustodyAction`] — one hashed handling event.
//! - [`CustodyLedger`] — the per-evidence append-only log with lifecycle
//!   policy enforcement (RECEIVED first, DESTROYED terminal).
//! - [`verify_chain()`] — total verification that accumulates every
//!   finding: ordering inversions, hash mismatches, missing provenance,
//!   and entries after destruction.
//! - [`export_human_readable()`] — the deterministic report rendering
//!   embedded verbatim by the report collaborator.
//! - [`EvidenceTimestamp`] — the once-per-item ingestion attestation.
//! - [`store`] — the persistence-boundary repository traits and their
//!   in-memory stand-ins.
//!
//! Entries may optionally carry an Ed25519 signature over their hash;
//! signing lives in `jaic-crypto` and the signature travels here as an
//! opaque hex field, keeping this crate independent of the cipher stack.

pub mod attest;
pub mod entry;
pub mod error;
pub mod export;
pub mod ledger;
pub mod store;
pub mod verify;

// Re-export primary types.
pub use attest::EvidenceTimestamp;
pub use entry::{entry_hash, CustodyAction, CustodyEntry};
pub use error::CustodyError;
pub use export::export_human_readable;
pub use ledger::CustodyLedger;
pub use store::{
    CustodyStore, InMemoryCustodyStore, InMemorySequenceSource, SequenceSource,
};
pub use verify::{verify_chain, ChainVerification, ChainViolation};
