//! Field validators for entry records
//!
//! This module contains pure validation logic with no I/O dependencies.
//! Each validator is total: any string input yields a boolean, never an
//! error. Incomplete paperwork is a screening outcome, not a fault.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::{EntryReason, EntryRecord, Visa};

/// Country codes cleared for entry processing
pub const PREAPPROVED_COUNTRIES: [&str; 13] = [
    "ALB", "BRD", "CFR", "DSK", "ELE", "FRY", "GOR", "HJR", "III", "JIK", "KAN", "KRA", "LUG",
];

/// A visa issued this many days ago (or more) has expired
pub const VISA_VALIDITY_DAYS: i64 = 730;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static PASSPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-[A-Za-z0-9]{5}$")
        .expect("valid regex")
});

static VISA_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{5}-[A-Za-z0-9]{5}$").expect("valid regex"));

/// Parse a date in `YYYY-MM-DD` form, rejecting loose spellings the
/// underlying parser would tolerate (short years, single-digit months)
fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Check that a date string is `YYYY-MM-DD` and a real calendar date
#[must_use]
pub fn valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Check that a passport number is five hyphen-separated groups of five
/// alphanumerics
#[must_use]
pub fn valid_passport(s: &str) -> bool {
    PASSPORT_RE.is_match(s)
}

/// Check that both name parts are non-empty and purely alphabetic
#[must_use]
pub fn valid_name(first_name: &str, last_name: &str) -> bool {
    let alphabetic = |s: &str| !s.is_empty() && s.chars().all(char::is_alphabetic);
    alphabetic(first_name) && alphabetic(last_name)
}

/// Check that a country code is on the preapproved list (case-insensitive)
#[must_use]
pub fn valid_location(country: &str) -> bool {
    PREAPPROVED_COUNTRIES.iter().any(|code| code.eq_ignore_ascii_case(country))
}

/// Check that an entry reason is one of the exact lowercase spellings
/// `returning`, `transit`, or `visit`
#[must_use]
pub fn valid_reason(s: &str) -> bool {
    s.parse::<EntryReason>().is_ok()
}

/// Check that a visa is well-formed and still current
///
/// A visa passes when its code is two hyphen-separated groups of five
/// alphanumerics, its issue date parses, and that date is strictly less
/// than [`VISA_VALIDITY_DAYS`] days before `as_of`. A visa issued exactly
/// 730 days ago has expired; one issued 729 days ago is current. A visa
/// dated in the future counts as current.
#[must_use]
pub fn valid_visa(visa: &Visa, as_of: NaiveDate) -> bool {
    if !VISA_CODE_RE.is_match(&visa.code) {
        return false;
    }
    let Some(issued) = parse_date(&visa.date) else {
        return false;
    };
    (as_of - issued).num_days() < VISA_VALIDITY_DAYS
}

/// List the fields of a record that fail validation
///
/// Returns stable field labels in booth order, suitable for reporting.
/// An empty result means the record is complete.
#[must_use]
pub fn failed_checks(record: &EntryRecord) -> Vec<&'static str> {
    let mut failed = Vec::new();

    if !valid_date(&record.birth_date) {
        failed.push("birth_date");
    }
    if !valid_passport(&record.passport) {
        failed.push("passport");
    }
    if !valid_reason(&record.entry_reason) {
        failed.push("entry_reason");
    }
    if !valid_location(&record.home.country) {
        failed.push("home.country");
    }
    if !valid_location(&record.origin.country) {
        failed.push("from.country");
    }
    if !valid_name(&record.first_name, &record.last_name) {
        failed.push("name");
    }

    failed
}

/// Whether every completeness validator passes for this record
///
/// Visa validity is deliberately not part of completeness; visas are only
/// consulted once policy says one is required.
#[must_use]
pub fn is_complete(record: &EntryRecord) -> bool {
    failed_checks(record).is_empty()
}
