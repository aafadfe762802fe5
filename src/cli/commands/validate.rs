//! Check a batch of entry records for completeness

use std::path::Path;

use borderpost::adapters::json::loader;
use borderpost::core::services::validators;
use borderpost::output::{IncompleteRecord, OutputMode, ValidationReport};

/// Report which records in a batch would fail the completeness gate
///
/// Useful at intake, before a batch reaches a booth: the screening verdict
/// for an incomplete record is always Reject, so fixing paperwork early
/// saves a pointless crossing attempt.
pub fn validate(records_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let records = loader::load_records(records_path)?;

    let mut incomplete = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let failed = validators::failed_checks(record);
        if !failed.is_empty() {
            incomplete.push(IncompleteRecord {
                index,
                traveler: format!("{} {}", record.first_name, record.last_name),
                failed,
            });
        }
    }

    let report = ValidationReport {
        total: records.len(),
        complete: records.len() - incomplete.len(),
        incomplete,
    };
    report.render(mode);

    Ok(())
}
