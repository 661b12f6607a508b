//! # jaic-core — Foundational Types for the JAIC Evidence Stack
//!
//! This crate is the bedrock of the evidence integrity core. It defines
//! the type-system primitives every other crate in the workspace builds
//! on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`CaseNumber`] and
//!    [`EvidenceId`] validate at construction — no bare strings for
//!    identifiers that feed a hash.
//!
//! 2. **One digest path for integrity.** [`sha256_digest()`] produces
//!    [`ContentDigest`] fingerprints for evidence payloads. The
//!    non-cryptographic rolling checksum exists only inside the
//!    case-number codec and is unreachable from any integrity check.
//!
//! 3. **Single [`CaseDomain`] enum.** One definition, exhaustive `match`
//!    everywhere. Adding a domain forces every consumer to handle it.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] enforces UTC with Z suffix
//!    at seconds precision — the canonical text form custody hashes
//!    commit to.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jaic-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod casenum;
pub mod digest;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use casenum::CaseNumber;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use domain::{CaseDomain, CASE_DOMAIN_COUNT};
pub use error::{JaicError, ValidationError};
pub use identity::EvidenceId;
pub use temporal::Timestamp;
