//! # Digest Verification
//!
//! The verification half of content-integrity checking. Digest
//! computation lives in [`jaic_core::digest`] — the single implementation
//! in the workspace — and is re-exported here so callers get both halves
//! from one module.

use subtle::ConstantTimeEq;

pub use jaic_core::digest::{sha256_digest, sha256_hex, ContentDigest};

/// Verify a payload against an expected hex fingerprint.
///
/// Recomputes the SHA-256 digest and compares in constant time. Total:
/// a malformed `expected_hex` (wrong length, non-hex characters) is a
/// failed verification, not an error.
pub fn verify_digest(data: &[u8], expected_hex: &str) -> bool {
    let Some(expected) = ContentDigest::from_hex(expected_hex) else {
        return false;
    };
    let actual = sha256_digest(data);
    actual.bytes[..].ct_eq(&expected.bytes[..]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_matching_payload() {
        let hex = sha256_hex(b"evidence bytes");
        assert!(verify_digest(b"evidence bytes", &hex));
    }

    #[test]
    fn test_verify_modified_payload() {
        let hex = sha256_hex(b"evidence bytes");
        assert!(!verify_digest(b"evidence bytez", &hex));
    }

    #[test]
    fn test_verify_uppercase_hex_accepted() {
        let hex = sha256_hex(b"payload").to_uppercase();
        assert!(verify_digest(b"payload", &hex));
    }

    #[test]
    fn test_verify_malformed_expected_is_false() {
        assert!(!verify_digest(b"payload", ""));
        assert!(!verify_digest(b"payload", "abc123"));
        assert!(!verify_digest(b"payload", &"zz".repeat(32)));
    }

    #[test]
    fn test_verify_empty_payload() {
        let hex = sha256_hex(b"");
        assert!(verify_digest(b"", &hex));
        assert!(!verify_digest(b"x", &hex));
    }
}
