//! Core domain logic for borderpost
//!
//! This module contains pure business logic with no I/O dependencies.
//! Reference data (watchlist, country policies) is loaded by adapters and
//! passed in as plain values.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`EntryRecord`, `Verdict`, `Watchlist`, `PolicyTable`)
//! - `services/` - Field validators and the decision engine

pub mod models;
pub mod services;
