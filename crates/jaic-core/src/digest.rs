//! # Content Digest — Evidence Fingerprints
//!
//! Defines `ContentDigest` and `sha256_digest()`, the content-integrity
//! fingerprint for evidence payloads. Every uploaded file is digested
//! before encryption, and that fingerprint is what custody entries and
//! timestamp attestations reference.
//!
//! ## Security Invariant
//!
//! Content integrity uses a real cryptographic hash (SHA-256), never the
//! rolling checksum used for case-number typo detection. The two live in
//! different modules on purpose — a collision-prone checksum must not be
//! reachable from any integrity-verification path.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// The hash algorithm used to produce a content digest.
///
/// Evidence fingerprints are SHA-256. The algorithm tag travels with every
/// digest so stored fingerprints remain self-describing if a migration to
/// another digest family ever happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlgorithm {
    /// SHA-256, 32-byte digest.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
///
/// Serializes as the lowercase 64-character hex string — the form handed
/// to the persistence collaborator and embedded in custody records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a content digest from raw bytes and algorithm.
    ///
    /// Prefer [`sha256_digest()`] for computing digests from payloads.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string (64 characters).
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.bytes)
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// Returns `None` on wrong length or non-hex characters — a malformed
    /// fingerprint is an expected condition at the storage boundary, not
    /// an error.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex_to_32_bytes(hex)?;
        Some(Self::new(DigestAlgorithm::Sha256, bytes))
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid digest hex: {hex:?}")))
    }
}

/// Compute the SHA-256 content digest of a raw byte payload.
///
/// This is the evidence fingerprint: computed once at intake, referenced
/// by the RECEIVED custody entry and the timestamp attestation, and
/// recomputed on demand to detect modification.
pub fn sha256_digest(data: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute the SHA-256 digest of a payload as a lowercase hex string.
///
/// Convenience wrapper around [`sha256_digest()`] for contexts that carry
/// the fingerprint as a string field.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256_digest(data).to_hex()
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

/// Encode bytes as lowercase hex.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_to_32_bytes(hex: &str) -> Option<[u8; 32]> {
    let hex = hex.trim().to_lowercase();
    if hex.len() != 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let mut out = [0u8; 32];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let s = std::str::from_utf8(chunk).ok()?;
        out[i] = u8::from_str_radix(s, 16).ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let d1 = sha256_digest(b"evidence payload");
        let d2 = sha256_digest(b"evidence payload");
        assert_eq!(d1, d2);
        assert_eq!(d1.algorithm, DigestAlgorithm::Sha256);
    }

    #[test]
    fn test_hex_format() {
        let hex = sha256_hex(b"payload");
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_sha256_vector() {
        // SHA256 of the empty payload is a standard published vector.
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_known_sha256_abc() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_different_inputs_different_digests() {
        assert_ne!(sha256_digest(b"a"), sha256_digest(b"b"));
    }

    #[test]
    fn test_display_prefixed_with_algorithm() {
        let d = sha256_digest(b"x");
        let s = format!("{d}");
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let d = sha256_digest(b"roundtrip");
        let parsed = ContentDigest::from_hex(&d.to_hex()).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(ContentDigest::from_hex("").is_none());
        assert!(ContentDigest::from_hex("aabb").is_none());
        assert!(ContentDigest::from_hex(&"zz".repeat(32)).is_none());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let d = sha256_digest(b"serde");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json.len(), 64 + 2); // 64 hex chars + 2 quotes
        let back: ContentDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<ContentDigest>("\"nope\"").is_err());
    }
}
