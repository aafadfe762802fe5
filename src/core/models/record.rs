//! Entry records
//!
//! One record is the paperwork a traveler hands over at the booth. Fields
//! arrive as raw strings and are only checked by the validators; a record
//! that deserializes is not necessarily a record that passes screening.

use serde::{Deserialize, Serialize};

/// A traveler's entry record as presented at the checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Given name, as printed on the passport
    #[serde(default)]
    pub first_name: String,
    /// Family name, as printed on the passport
    #[serde(default)]
    pub last_name: String,
    /// Date of birth, expected as `YYYY-MM-DD`
    #[serde(default)]
    pub birth_date: String,
    /// Passport number, expected as five groups of five alphanumerics
    #[serde(default)]
    pub passport: String,
    /// Country of citizenship
    #[serde(default)]
    pub home: Location,
    /// Where this journey started (JSON key `from`)
    #[serde(default, rename = "from")]
    pub origin: Location,
    /// Stated reason for entry: `returning`, `transit`, or `visit`
    #[serde(default)]
    pub entry_reason: String,
    /// Visa presented, if any
    #[serde(default)]
    pub visa: Option<Visa>,
}

/// A place referenced by an entry record
///
/// Only the country code participates in screening; city and region are
/// carried through for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Three-letter country code
    #[serde(default)]
    pub country: String,
    /// City name, if the paperwork includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region name, if the paperwork includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// A visa attached to an entry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visa {
    /// Visa code, same shape as two passport groups
    #[serde(default)]
    pub code: String,
    /// Issue date, expected as `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
}
