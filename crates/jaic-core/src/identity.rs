//! # Identity Newtypes
//!
//! Validated newtype wrappers for identifiers that cross the persistence
//! boundary. You cannot pass an arbitrary string where an [`EvidenceId`]
//! is expected — validation happens once, at construction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::ValidationError;

/// Identifier of a single evidence item.
///
/// Evidence ids are assigned by the persistence collaborator and may be
/// any non-empty printable ASCII token; ids minted inside this stack use
/// [`EvidenceId::random()`]. The id participates in every custody entry
/// hash, so its exact byte sequence matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvidenceId(String);

impl EvidenceId {
    /// Create an evidence id from an externally assigned token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEvidenceId`] if the token is
    /// empty, longer than 128 bytes, or contains whitespace/control
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty()
            || s.len() > 128
            || !s.bytes().all(|b| b.is_ascii_graphic())
        {
            return Err(ValidationError::InvalidEvidenceId(s));
        }
        Ok(Self(s))
    }

    /// Mint a fresh random evidence id (`ev-` + UUID v4).
    pub fn random() -> Self {
        Self(format!("ev-{}", Uuid::new_v4()))
    }

    /// Access the id token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EvidenceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EvidenceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
