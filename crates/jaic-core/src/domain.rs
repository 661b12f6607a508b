//! # Case Domain — Single Source of Truth
//!
//! Defines the `CaseDomain` enum with all 7 investigation domains. This is
//! the ONE definition used across the stack; every `match` on `CaseDomain`
//! must be exhaustive, so adding a domain forces every consumer — the
//! case-number codec included — to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// All investigation domains a case can be opened under.
///
/// The domain is embedded in the case number (`JAIC-202503-FRAUD-0007-…`)
/// as its uppercase wire code, so the set is closed: an unknown code makes
/// the whole identifier unparseable rather than silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseDomain {
    /// Financial fraud and asset misappropriation.
    Fraud,
    /// Professional or official misconduct.
    Misconduct,
    /// Contract disputes and breach investigations.
    Contract,
    /// Administrative and procedural matters.
    Admin,
    /// Digital forensics and cyber incidents.
    Digital,
    /// Cross-border and mutual legal assistance matters.
    Crossborder,
    /// Anything not covered by a specific domain.
    General,
}

/// Total number of case domains. Used for compile-time assertions.
pub const CASE_DOMAIN_COUNT: usize = 7;

impl CaseDomain {
    /// Returns all 7 domains in canonical order.
    pub fn all() -> &'static [CaseDomain] {
        &[
            Self::Fraud,
            Self::Misconduct,
            Self::Contract,
            Self::Admin,
            Self::Digital,
            Self::Crossborder,
            Self::General,
        ]
    }

    /// The uppercase wire code embedded in case numbers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fraud => "FRAUD",
            Self::Misconduct => "MISCONDUCT",
            Self::Contract => "CONTRACT",
            Self::Admin => "ADMIN",
            Self::Digital => "DIGITAL",
            Self::Crossborder => "CROSSBORDER",
            Self::General => "GENERAL",
        }
    }

    /// Human-readable display label.
    ///
    /// Total over the enumeration — a new variant without a label is a
    /// compile error, not a runtime gap.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fraud => "Financial Fraud",
            Self::Misconduct => "Professional Misconduct",
            Self::Contract => "Contract Dispute",
            Self::Admin => "Administrative Matter",
            Self::Digital => "Digital Forensics",
            Self::Crossborder => "Cross-Border Matter",
            Self::General => "General Investigation",
        }
    }
}

impl Default for CaseDomain {
    /// Intake that does not specify a domain files under GENERAL.
    fn default() -> Self {
        Self::General
    }
}

impl FromStr for CaseDomain {
    type Err = ValidationError;

    /// Parse an uppercase wire code (`"FRAUD"`, `"ADMIN"`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRAUD" => Ok(Self::Fraud),
            "MISCONDUCT" => Ok(Self::Misconduct),
            "CONTRACT" => Ok(Self::Contract),
            "ADMIN" => Ok(Self::Admin),
            "DIGITAL" => Ok(Self::Digital),
            "CROSSBORDER" => Ok(Self::Crossborder),
            "GENERAL" => Ok(Self::General),
            other => Err(ValidationError::UnknownDomain(other.to_string())),
        }
    }
}

impl std::fmt::Display for CaseDomain {
    /// Renders the wire code, matching the case-number segment.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
