//! Adapter implementations for external data
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Loading records, the watchlist, and country policies from
//!   JSON files

pub mod json;
