//! JSON loaders for the three input files
//!
//! A batch either loads fully or fails fully: any problem with a source
//! file aborts before screening starts, because verdicts computed against
//! partial reference data would be wrong. Problems inside individual
//! records are not load errors; they surface later as Reject verdicts.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::core::models::{CountryPolicy, EntryRecord, PolicyTable, Watchlist, WatchlistEntry};

/// Which of the three input files an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The batch of entry records to screen
    Records,
    /// The watchlist of flagged travelers
    Watchlist,
    /// The country-policy table
    Countries,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Records => write!(f, "records"),
            Self::Watchlist => write!(f, "watchlist"),
            Self::Countries => write!(f, "countries"),
        }
    }
}

/// Failure to load one of the input files
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist
    #[error("{kind} file not found: {}", path.display())]
    NotFound {
        /// Which input file was missing
        kind: SourceKind,
        /// The path that was tried
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("failed to read {kind} file {}: {source}", path.display())]
    Io {
        /// Which input file failed
        kind: SourceKind,
        /// The path that was read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON, or not the shape this input expects
    #[error("{kind} file {} is malformed: {source}", path.display())]
    Malformed {
        /// Which input file failed
        kind: SourceKind,
        /// The path that was parsed
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A policy flag in the countries file is not a recognizable boolean
    #[error("unrecognized {field} value {value} for country {country}")]
    Flag {
        /// Country code the flag belongs to
        country: String,
        /// Name of the flag field
        field: String,
        /// The value as it appeared in the file
        value: String,
    },
}

/// Raw per-country policy as it appears on disk
///
/// Older exports write flags as `"0"`/`"1"` strings or bare integers, so
/// each flag is taken as an untyped value and normalized afterwards.
#[derive(Debug, Deserialize)]
struct RawCountryPolicy {
    #[serde(default)]
    visitor_visa_required: Value,
    #[serde(default)]
    transit_visa_required: Value,
    #[serde(default)]
    medical_advisory: Value,
}

/// Load the batch of entry records
///
/// # Errors
///
/// Returns a [`SourceError`] if the file is missing, unreadable, or not a
/// JSON array of record objects.
pub fn load_records(path: &Path) -> Result<Vec<EntryRecord>, SourceError> {
    let records: Vec<EntryRecord> = load_document(SourceKind::Records, path)?;
    log::debug!("loaded {} entry record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Load and index the watchlist
///
/// # Errors
///
/// Returns a [`SourceError`] if the file is missing, unreadable, or not a
/// JSON array of watchlist entries.
pub fn load_watchlist(path: &Path) -> Result<Watchlist, SourceError> {
    let entries: Vec<WatchlistEntry> = load_document(SourceKind::Watchlist, path)?;
    let watchlist = Watchlist::new(entries);
    log::debug!("loaded {} watchlist entry(ies) from {}", watchlist.len(), path.display());
    Ok(watchlist)
}

/// Load and index the country-policy table
///
/// Flags tolerate the spellings found in the wild: booleans, `0`/`1`
/// integers, and `""`/`"0"`/`"1"` strings. A missing flag means `false`.
///
/// # Errors
///
/// Returns a [`SourceError`] if the file is missing, unreadable, not a
/// JSON object keyed by country code, or carries a flag value outside the
/// tolerated spellings.
pub fn load_policies(path: &Path) -> Result<PolicyTable, SourceError> {
    let raw: HashMap<String, RawCountryPolicy> = load_document(SourceKind::Countries, path)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (code, policy) in raw {
        let normalized = CountryPolicy {
            visitor_visa_required: flag(
                &code,
                "visitor_visa_required",
                &policy.visitor_visa_required,
            )?,
            transit_visa_required: flag(
                &code,
                "transit_visa_required",
                &policy.transit_visa_required,
            )?,
            medical_advisory: flag(&code, "medical_advisory", &policy.medical_advisory)?,
        };
        entries.push((code, normalized));
    }

    let table = PolicyTable::new(entries);
    log::debug!("loaded policy for {} country(ies) from {}", table.len(), path.display());
    Ok(table)
}

/// Read a file and deserialize it as JSON
fn load_document<T: DeserializeOwned>(kind: SourceKind, path: &Path) -> Result<T, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| SourceError::Malformed {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize one policy flag to a boolean
fn flag(country: &str, field: &str, value: &Value) -> Result<bool, SourceError> {
    let normalized = match value {
        Value::Null => Some(false),
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "" | "0" => Some(false),
            "1" => Some(true),
            _ => None,
        },
        Value::Array(_) | Value::Object(_) => None,
    };

    normalized.ok_or_else(|| SourceError::Flag {
        country: country.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    })
}
