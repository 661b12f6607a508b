//! # Cryptographic Error Types
//!
//! Structured errors for all cryptographic operations in `jaic-crypto`.
//! Uses `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Authentication failure during decryption is its own variant:
//! callers must be able to distinguish "the envelope did not authenticate"
//! from every malformed-input condition, because the former blocks any
//! claim of evidentiary integrity.

use thiserror::Error;

/// Errors from evidence encryption, decryption, and key handling.
#[derive(Error, Debug)]
pub enum CipherError {
    /// AEAD authentication failed: wrong key, corrupted ciphertext, or a
    /// tampered tag/nonce. No plaintext — partial or otherwise — exists
    /// when this is returned.
    #[error("decryption failed: envelope did not authenticate")]
    DecryptionFailed,

    /// The cipher refused the payload (length beyond the AES-GCM limit).
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Key material could not be imported: malformed base64 or wrong length.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// Envelope field could not be decoded (base64, nonce length, tag length).
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The envelope names an algorithm this cipher does not implement.
    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
