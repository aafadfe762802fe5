//! JSON file adapters
//!
//! Handles reading and deserializing the three input files: entry records,
//! the watchlist, and the country-policy table.

pub mod loader;

pub use loader::{SourceError, SourceKind, load_policies, load_records, load_watchlist};
