//! # Custody Entry Signatures
//!
//! Optional Ed25519 attestation of custody entries. A signer attests to
//! an entry by signing its hex entry hash; the signature travels in the
//! entry's `signature` field and can be checked by anyone holding the
//! signer's public key.
//!
//! The signing input is the ASCII hex form of the entry hash — the same
//! canonical rendering stored on the entry and printed in exports, so
//! there is exactly one byte sequence a verifier must reconstruct.
//!
//! ## Security Invariant
//!
//! Private signing keys are never serialized or logged. [`CustodySigner`]
//! does not implement `Serialize`, and its `Debug` output is redacted.

use ed25519_dalek::{Signer, Verifier};

use crate::error::CipherError;

/// An Ed25519 key pair for attesting custody entries.
pub struct CustodySigner {
    signing_key: ed25519_dalek::SigningKey,
}

impl CustodySigner {
    /// Generate a new random signer.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            signing_key: ed25519_dalek::SigningKey::generate(&mut csprng),
        }
    }

    /// Create a signer from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// The verifying (public) key as a 64-character hex string.
    pub fn public_key_hex(&self) -> String {
        bytes_to_hex(&self.signing_key.verifying_key().to_bytes())
    }

    /// Sign an entry hash, producing a 128-character hex signature.
    ///
    /// `entry_hash_hex` is the entry's stored hash field; the signature
    /// covers its ASCII bytes.
    pub fn sign_entry_hash(&self, entry_hash_hex: &str) -> String {
        let sig = self.signing_key.sign(entry_hash_hex.as_bytes());
        bytes_to_hex(&sig.to_bytes())
    }
}

impl std::fmt::Debug for CustodySigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustodySigner(<private>)")
    }
}

/// Verify a custody entry signature.
///
/// Total: malformed hex in any argument, a wrong-length key or signature,
/// and a failed verification all return `false`.
pub fn verify_entry_signature(
    entry_hash_hex: &str,
    signature_hex: &str,
    public_key_hex: &str,
) -> bool {
    let Ok(key_bytes) = hex_to_array::<32>(public_key_hex) else {
        return false;
    };
    let Ok(sig_bytes) = hex_to_array::<64>(signature_hex) else {
        return false;
    };
    let Ok(verifying_key) = ed25519_dalek::VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(&sig_bytes);
    verifying_key
        .verify(entry_hash_hex.as_bytes(), &signature)
        .is_ok()
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_to_array<const N: usize>(hex: &str) -> Result<[u8; N], CipherError> {
    let hex = hex.trim().to_lowercase();
    if hex.len() != N * 2 {
        return Err(CipherError::InvalidKey(format!(
            "expected {} hex chars, got {}",
            N * 2,
            hex.len()
        )));
    }
    let mut out = [0u8; N];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let s = std::str::from_utf8(chunk)
            .map_err(|e| CipherError::InvalidKey(format!("invalid hex: {e}")))?;
        out[i] = u8::from_str_radix(s, 16)
            .map_err(|e| CipherError::InvalidKey(format!("invalid hex at {i}: {e}")))?;
    }
    Ok(out)
}
