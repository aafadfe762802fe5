//! Business logic services
//!
//! Pure screening logic that operates on domain models. These services
//! have no I/O dependencies - they operate on data passed in and return
//! results.
//!
//! - [`validators`] - Field-level checks on raw record strings
//! - [`engine`] - The rule cascade that turns a record into a verdict

pub mod engine;
pub mod validators;

pub use engine::{HOST_COUNTRY, decide, decide_record};
pub use validators::{failed_checks, is_complete, valid_visa};
