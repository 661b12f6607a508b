//! # jaic-crypto — Cryptographic Operations for the JAIC Evidence Stack
//!
//! This crate provides the cryptographic building blocks of the evidence
//! integrity core:
//!
//! - **AES-256-GCM evidence envelopes** — authenticated encryption of
//!   evidence payloads into a self-contained storage form
//!   ([`EncryptedEnvelope`]), all-or-nothing on decryption.
//! - **Symmetric key custody** — [`EvidenceKey`] as an explicit,
//!   zeroized-on-drop capability with base64 transport.
//! - **Digest verification** — constant-time checking of evidence
//!   fingerprints against the SHA-256 digests computed in
//!   [`jaic_core::digest`].
//! - **Ed25519 custody signatures** — optional signer attestation over
//!   custody entry hashes ([`CustodySigner`]).

pub mod envelope;
pub mod error;
pub mod key;
pub mod sha256;
pub mod sign;

// Re-export primary types.
pub use envelope::{
    decrypt, encrypt, seal, EncryptedEnvelope, EncryptionMetadata, FileInfo, SealedEvidence,
    ALGORITHM,
};
pub use error::CipherError;
pub use key::EvidenceKey;
pub use sha256::verify_digest;
pub use sign::{verify_entry_signature, CustodySigner};
