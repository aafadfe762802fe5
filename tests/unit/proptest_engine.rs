//! Property-based tests for the decision engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use borderpost::core::models::{EntryRecord, Location, PolicyTable, Verdict, Watchlist};
use borderpost::core::services::engine::{decide, decide_record};
use proptest::prelude::*;

use crate::common::fixtures::{RecordBuilder, screening_date, watch_entry};

const PASSPORT_SHAPE: &str = "[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}";

/// Arbitrary records, most of them broken in some way
fn any_record() -> impl Strategy<Value = EntryRecord> {
    (
        "[A-Za-z0-9 ]{0,12}",
        "[A-Za-z0-9 ]{0,12}",
        "[0-9-]{0,12}",
        "[A-Z0-9-]{0,32}",
        "[A-Za-z]{0,4}",
        "[A-Za-z]{0,4}",
        "[a-z]{0,10}",
    )
        .prop_map(|(first, last, birth, passport, home, origin, reason)| EntryRecord {
            first_name: first,
            last_name: last,
            birth_date: birth,
            passport,
            home: Location {
                country: home,
                ..Location::default()
            },
            origin: Location {
                country: origin,
                ..Location::default()
            },
            entry_reason: reason,
            visa: None,
        })
}

proptest! {
    /// The batch wrapper is exactly the per-record decision, in order
    #[test]
    fn batch_is_the_per_record_map(records in prop::collection::vec(any_record(), 0..8)) {
        let watchlist = Watchlist::default();
        let policies = PolicyTable::default();

        let batch = decide(&records, &watchlist, &policies, screening_date());
        let singles: Vec<_> = records
            .iter()
            .map(|record| decide_record(record, &watchlist, &policies, screening_date()))
            .collect();

        prop_assert_eq!(batch, singles);
    }

    /// Screening is pure: the same batch at the same date decides the same way
    #[test]
    fn deciding_twice_gives_identical_verdicts(records in prop::collection::vec(any_record(), 0..8)) {
        let watchlist = Watchlist::default();
        let policies = PolicyTable::default();

        let first = decide(&records, &watchlist, &policies, screening_date());
        let second = decide(&records, &watchlist, &policies, screening_date());
        prop_assert_eq!(first, second);
    }

    /// One verdict per record, whatever the records hold
    #[test]
    fn every_record_gets_exactly_one_verdict(records in prop::collection::vec(any_record(), 0..8)) {
        let verdicts = decide(
            &records,
            &Watchlist::default(),
            &PolicyTable::default(),
            screening_date(),
        );
        prop_assert_eq!(verdicts.len(), records.len());
    }

    /// A complete traveler with no reference-data entries is always accepted
    #[test]
    fn clean_slate_accepts_well_formed_travelers(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
        passport in PASSPORT_SHAPE,
    ) {
        let record = RecordBuilder::new()
            .first_name(&first)
            .last_name(&last)
            .passport(&passport)
            .build();

        let verdict = decide_record(
            &record,
            &Watchlist::default(),
            &PolicyTable::default(),
            screening_date(),
        );
        prop_assert_eq!(verdict, Verdict::Accept);
    }

    /// A hyphenless passport can never pass the completeness gate
    #[test]
    fn hyphenless_passports_always_reject(passport in "[A-Za-z0-9]{0,24}") {
        let record = RecordBuilder::new().passport(&passport).build();
        // A watchlist hit on the same string must not change the outcome
        let watchlist = Watchlist::new(vec![watch_entry("", "", &passport)]);

        let verdict = decide_record(&record, &watchlist, &PolicyTable::default(), screening_date());
        prop_assert_eq!(verdict, Verdict::Reject);
    }

    /// Complete paperwork on a flagged passport always goes to secondary
    #[test]
    fn flagged_passports_go_to_secondary(passport in PASSPORT_SHAPE) {
        let record = RecordBuilder::new().passport(&passport).build();
        let watchlist = Watchlist::new(vec![watch_entry("", "", &passport)]);

        let verdict = decide_record(&record, &watchlist, &PolicyTable::default(), screening_date());
        prop_assert_eq!(verdict, Verdict::Secondary);
    }
}
