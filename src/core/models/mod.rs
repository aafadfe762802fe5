//! Domain models for borderpost
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`EntryRecord`] - One traveler's paperwork as presented at the booth
//! - [`Verdict`] - The decision issued for a record
//! - [`EntryReason`] - The stated purpose of the crossing
//! - [`Watchlist`] - Flagged identities and passports, indexed for lookup
//! - [`PolicyTable`] - Per-country visa and medical-advisory policy

mod policy;
mod reason;
mod record;
mod verdict;
mod watchlist;

pub use policy::{CountryPolicy, PolicyTable};
pub use reason::EntryReason;
pub use record::{EntryRecord, Location, Visa};
pub use verdict::Verdict;
pub use watchlist::{Watchlist, WatchlistEntry};
