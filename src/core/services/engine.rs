//! Decision engine
//!
//! Applies the screening rules to entry records in a fixed priority order:
//!
//! 1. Completeness gate: any failed field validator rejects the record
//!    outright.
//! 2. Quarantine: a medical advisory on the origin country detains the
//!    traveler and short-circuits every later rule, watchlist included.
//! 3. Visa policy: if the home country's policy demands a visa for the
//!    stated reason, a current visa accepts and anything else rejects; a
//!    policy entry with no demand accepts.
//! 4. Returning citizens of the host country are accepted.
//! 5. Watchlist: a passport or full-name hit sends the traveler to
//!    secondary inspection, overriding whatever rules 3 and 4 staged.
//!
//! A record no rule touched is accepted. Rules 3 through 5 stage their
//! outcome in an optional verdict rather than returning early, because the
//! watchlist must get the last word over paperwork that is in order.

use chrono::NaiveDate;

use super::validators;
use crate::core::models::{EntryReason, EntryRecord, PolicyTable, Verdict, Watchlist};

/// Country code of the checkpoint's own country
pub const HOST_COUNTRY: &str = "KAN";

/// Screen a whole batch, yielding one verdict per record in input order
#[must_use]
pub fn decide(
    records: &[EntryRecord],
    watchlist: &Watchlist,
    policies: &PolicyTable,
    as_of: NaiveDate,
) -> Vec<Verdict> {
    records.iter().map(|record| decide_record(record, watchlist, policies, as_of)).collect()
}

/// Screen a single entry record
///
/// # Arguments
///
/// * `record` - The paperwork to screen
/// * `watchlist` - Flagged identities, indexed for lookup
/// * `policies` - Per-country visa and advisory policy
/// * `as_of` - The date visas are aged against
///
/// # Returns
///
/// Exactly one [`Verdict`]; screening never fails on bad paperwork, it
/// rejects it.
#[must_use]
pub fn decide_record(
    record: &EntryRecord,
    watchlist: &Watchlist,
    policies: &PolicyTable,
    as_of: NaiveDate,
) -> Verdict {
    if !validators::is_complete(record) {
        return Verdict::Reject;
    }

    if policies.get(&record.origin.country).is_some_and(|policy| policy.medical_advisory) {
        return Verdict::Quarantine;
    }

    // Completeness guarantees the reason parses; stay total anyway
    let Ok(reason) = record.entry_reason.parse::<EntryReason>() else {
        return Verdict::Reject;
    };

    let mut verdict: Option<Verdict> = None;

    if let Some(policy) = policies.get(&record.home.country) {
        if policy.requires_visa(reason) {
            let current = record
                .visa
                .as_ref()
                .is_some_and(|visa| validators::valid_visa(visa, as_of));
            verdict = Some(if current { Verdict::Accept } else { Verdict::Reject });
        } else {
            verdict = Some(Verdict::Accept);
        }
    }

    if reason == EntryReason::Returning && record.home.country.eq_ignore_ascii_case(HOST_COUNTRY) {
        verdict = Some(Verdict::Accept);
    }

    if watchlist.has_passport(&record.passport)
        || watchlist.has_name(&record.first_name, &record.last_name)
    {
        verdict = Some(Verdict::Secondary);
    }

    verdict.unwrap_or(Verdict::Accept)
}
