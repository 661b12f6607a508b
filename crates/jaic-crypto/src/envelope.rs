//! # Evidence Envelopes — Authenticated Encryption
//!
//! AES-256-GCM encryption of evidence payloads into a self-contained
//! envelope: base64 ciphertext, 96-bit nonce, and detached 128-bit
//! authentication tag, plus the algorithm tag and encryption timestamp.
//!
//! ## Security Invariant
//!
//! - A fresh random nonce is drawn from the OS entropy source on every
//!   [`encrypt()`] call. Nonces are never derived from counters, so no
//!   shared-state persistence can cause reuse under one key.
//! - Decryption is all-or-nothing: if the tag does not authenticate the
//!   ciphertext and nonce under the supplied key, no plaintext is
//!   produced and [`CipherError::DecryptionFailed`] is returned.
//! - [`EncryptionMetadata`] is descriptive only. It is not covered by the
//!   authentication tag; tamper-evidence for descriptive fields belongs
//!   to the custody ledger, not the cipher.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::{Aes256Gcm, Key, KeyInit};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use jaic_core::Timestamp;

use crate::error::CipherError;
use crate::key::EvidenceKey;

/// The only cipher this envelope format carries.
pub const ALGORITHM: &str = "AES-256-GCM";

/// Nonce length in bytes (96 bits, the GCM standard size).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// A self-contained encrypted evidence payload.
///
/// This is the wire/storage form handed to the persistence collaborator.
/// All three binary fields are standard base64 and round-trip
/// byte-exactly; the serialized field names (`iv`, `authTag`,
/// `timestamp`) are fixed by the storage format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Base64 ciphertext (same length as the plaintext).
    pub ciphertext: String,
    /// Base64 96-bit nonce, unique per encryption under a given key.
    #[serde(rename = "iv")]
    pub nonce: String,
    /// Base64 128-bit GCM authentication tag.
    #[serde(rename = "authTag")]
    pub auth_tag: String,
    /// Always `"AES-256-GCM"`; checked on decryption.
    pub algorithm: String,
    /// When the payload was encrypted.
    #[serde(rename = "timestamp")]
    pub encrypted_at: Timestamp,
}

/// Descriptive metadata captured alongside an encrypted evidence file.
///
/// Not integrity-protected by the cipher — the custody ledger binds the
/// payload fingerprint instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionMetadata {
    /// Original upload filename.
    pub original_name: String,
    /// Plaintext size in bytes.
    pub size: u64,
    /// Declared MIME type of the upload.
    pub mime_type: String,
    /// When the file entered the system.
    pub uploaded_at: Timestamp,
    /// Actor who performed the encryption.
    pub encrypted_by: String,
}

/// Caller-supplied description of the file being sealed.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Original upload filename.
    pub original_name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// Actor performing the intake.
    pub encrypted_by: String,
}

/// The artifacts produced by [`seal()`]: envelope, metadata, and the key
/// that now guards the payload. Key custody passes to the caller.
#[derive(Debug)]
pub struct SealedEvidence {
    /// The encrypted payload in storage form.
    pub envelope: EncryptedEnvelope,
    /// Descriptive metadata for the case record.
    pub metadata: EncryptionMetadata,
    /// The symmetric key — generated fresh unless one was supplied.
    pub key: EvidenceKey,
}

/// Encrypt a payload under the given key.
///
/// Draws a fresh random 96-bit nonce, encrypts with AES-256-GCM, and
/// packages ciphertext, nonce, and detached tag as base64.
///
/// # Errors
///
/// Returns [`CipherError::Encryption`] only if the payload exceeds the
/// AES-GCM length limit.
pub fn encrypt(plaintext: &[u8], key: &EvidenceKey) -> Result<EncryptedEnvelope, CipherError> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce_bytes), b"", &mut buffer)
        .map_err(|_| CipherError::Encryption("payload exceeds AES-GCM length limit".into()))?;

    Ok(EncryptedEnvelope {
        ciphertext: BASE64.encode(&buffer),
        nonce: BASE64.encode(nonce_bytes),
        auth_tag: BASE64.encode(tag.as_slice()),
        algorithm: ALGORITHM.to_string(),
        encrypted_at: Timestamp::now(),
    })
}

/// Decrypt an envelope under the given key.
///
/// All-or-nothing: any authentication failure — wrong key, corrupted
/// ciphertext, tampered tag or nonce — yields
/// [`CipherError::DecryptionFailed`] and no plaintext.
///
/// # Errors
///
/// - [`CipherError::UnsupportedAlgorithm`] if the envelope names a cipher
///   other than `"AES-256-GCM"`.
/// - [`CipherError::MalformedEnvelope`] if a field is not valid base64 or
///   the nonce/tag have the wrong decoded length.
/// - [`CipherError::DecryptionFailed`] if authentication fails.
pub fn decrypt(envelope: &EncryptedEnvelope, key: &EvidenceKey) -> Result<Vec<u8>, CipherError> {
    if envelope.algorithm != ALGORITHM {
        return Err(CipherError::UnsupportedAlgorithm(envelope.algorithm.clone()));
    }

    let nonce_bytes = decode_exact(&envelope.nonce, NONCE_LEN, "iv")?;
    let tag_bytes = decode_exact(&envelope.auth_tag, TAG_LEN, "authTag")?;
    let mut buffer = BASE64
        .decode(&envelope.ciphertext)
        .map_err(|e| CipherError::MalformedEnvelope(format!("ciphertext: {e}")))?;

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&nonce_bytes),
            b"",
            &mut buffer,
            GenericArray::from_slice(&tag_bytes),
        )
        .map_err(|_| {
            tracing::warn!(algorithm = ALGORITHM, "evidence envelope failed authentication");
            CipherError::DecryptionFailed
        })?;

    Ok(buffer)
}

/// Encrypt an evidence file and assemble its intake artifacts.
///
/// Generates a fresh key when `key` is `None`; otherwise encrypts under
/// the supplied key and hands it back in the result. The caller owns key
/// custody from here on.
///
/// # Errors
///
/// Propagates [`encrypt()`] failures.
pub fn seal(
    plaintext: &[u8],
    info: FileInfo,
    key: Option<EvidenceKey>,
) -> Result<SealedEvidence, CipherError> {
    let key = key.unwrap_or_else(EvidenceKey::generate);
    let envelope = encrypt(plaintext, &key)?;
    let metadata = EncryptionMetadata {
        original_name: info.original_name,
        size: plaintext.len() as u64,
        mime_type: info.mime_type,
        uploaded_at: envelope.encrypted_at,
        encrypted_by: info.encrypted_by,
    };
    Ok(SealedEvidence {
        envelope,
        metadata,
        key,
    })
}

/// Decode a base64 field and require an exact decoded length.
fn decode_exact(encoded: &str, len: usize, field: &str) -> Result<Vec<u8>, CipherError> {
    let decoded = BASE64
        .decode(encoded)
        .map_err(|e| CipherError::MalformedEnvelope(format!("{field}: {e}")))?;
    if decoded.len() != len {
        return Err(CipherError::MalformedEnvelope(format!(
            "{field}: expected {len} bytes, got {}",
            decoded.len()
        )));
    }
    Ok(decoded)
}
