//! Screen a batch of entry records

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use borderpost::adapters::json::loader;
use borderpost::config::Config;
use borderpost::core::services::engine;
use borderpost::output::{Decision, DecisionReport, OutputMode};

/// Screen the records in a batch file and render one verdict per record
///
/// Reference-data paths fall back to `borderpost.toml`, then to the
/// defaults next to the working directory. The screening date defaults to
/// today so visa expiry tracks the calendar; tests and replays pin it with
/// `--as-of`.
pub fn decide(
    records_path: &Path,
    watchlist_path: Option<PathBuf>,
    countries_path: Option<PathBuf>,
    as_of: Option<NaiveDate>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load();
    let watchlist_path = watchlist_path.unwrap_or(config.sources.watchlist);
    let countries_path = countries_path.unwrap_or(config.sources.countries);
    let as_of = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());

    let records = loader::load_records(records_path)?;
    let watchlist = loader::load_watchlist(&watchlist_path)?;
    let policies = loader::load_policies(&countries_path)?;

    log::debug!(
        "screening {} record(s) against {} watchlist entries and {} country policies as of {as_of}",
        records.len(),
        watchlist.len(),
        policies.len()
    );

    let verdicts = engine::decide(&records, &watchlist, &policies, as_of);

    let decisions = records
        .iter()
        .zip(verdicts)
        .map(|(record, verdict)| Decision {
            traveler: format!("{} {}", record.first_name, record.last_name),
            passport: record.passport.clone(),
            verdict,
        })
        .collect();

    DecisionReport::new(as_of, decisions).render(mode);

    Ok(())
}
