//! # Evidence Keys — Symmetric Key Custody
//!
//! Defines `EvidenceKey`, the 256-bit AES-GCM key treated as an explicit
//! capability: passed into every encrypt/decrypt call, never stored in a
//! global, zeroized when the owning scope drops it.
//!
//! ## Security Invariant
//!
//! - Key bytes are wiped on drop (`ZeroizeOnDrop`).
//! - The type implements neither `Serialize` nor a leaking `Debug` —
//!   a key cannot end up in logs, responses, or persisted artifacts by
//!   accident. The only export path is the explicit
//!   [`EvidenceKey::to_base64()`], and the caller owns protecting that
//!   string at rest: it is the entire confidentiality boundary.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CipherError;

/// A 256-bit symmetric key for evidence envelope encryption.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EvidenceKey([u8; 32]);

impl EvidenceKey {
    /// Key length in bytes (AES-256).
    pub const LEN: usize = 32;

    /// Generate a fresh random key from the OS entropy source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; Self::LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Construct a key from raw bytes.
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw key bytes for cipher initialization.
    pub(crate) fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Export the key as standard base64 for transport or storage.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    /// Import a key previously exported with [`EvidenceKey::to_base64()`].
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] on malformed base64 or any
    /// decoded length other than 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, CipherError> {
        let decoded = BASE64
            .decode(encoded)
            .map_err(|e| CipherError::InvalidKey(format!("base64 decode: {e}")))?;
        if decoded.len() != Self::LEN {
            return Err(CipherError::InvalidKey(format!(
                "expected {} key bytes, got {}",
                Self::LEN,
                decoded.len()
            )));
        }
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl PartialEq for EvidenceKey {
    /// Constant-time comparison — key equality checks must not leak
    /// matching-prefix length through timing.
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for EvidenceKey {}

impl std::fmt::Debug for EvidenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EvidenceKey(<secret>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_differ() {
        let a = EvidenceKey::generate();
        let b = EvidenceKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_base64_roundtrip() {
        let key = EvidenceKey::generate();
        let exported = key.to_base64();
        let imported = EvidenceKey::from_base64(&exported).unwrap();
        assert_eq!(key, imported);
    }

    #[test]
    fn test_exported_length() {
        let key = EvidenceKey::generate();
        // 32 bytes → 44 base64 characters including padding.
        assert_eq!(key.to_base64().len(), 44);
    }

    #[test]
    fn test_import_rejects_malformed_base64() {
        assert!(EvidenceKey::from_base64("not valid base64!!!").is_err());
    }

    #[test]
    fn test_import_rejects_wrong_length() {
        let short = BASE64.encode([0u8; 16]);
        let long = BASE64.encode([0u8; 48]);
        assert!(matches!(
            EvidenceKey::from_base64(&short),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            EvidenceKey::from_base64(&long),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key_bytes() {
        let key = EvidenceKey::from_bytes([0xAB; 32]);
        let debug = format!("{key:?}");
        assert_eq!(debug, "EvidenceKey(<secret>)");
        assert!(!debug.contains("ab"));
    }
}
