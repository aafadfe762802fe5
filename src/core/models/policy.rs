//! Country policy table
//!
//! Per-country visa requirements and medical advisories, loaded from the
//! countries file and keyed by uppercase country code.

use std::collections::HashMap;

use super::reason::EntryReason;

/// Policy flags for one country
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountryPolicy {
    /// Travelers visiting from this country need a visitor visa
    pub visitor_visa_required: bool,
    /// Travelers transiting from this country need a transit visa
    pub transit_visa_required: bool,
    /// A medical advisory is active for this country
    pub medical_advisory: bool,
}

impl CountryPolicy {
    /// Whether this country's policy demands a visa for the given reason
    ///
    /// Returning citizens never need a visa.
    #[must_use]
    pub const fn requires_visa(self, reason: EntryReason) -> bool {
        match reason {
            EntryReason::Visit => self.visitor_visa_required,
            EntryReason::Transit => self.transit_visa_required,
            EntryReason::Returning => false,
        }
    }
}

/// All country policies, indexed by country code
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    countries: HashMap<String, CountryPolicy>,
}

impl PolicyTable {
    /// Build the table from (code, policy) pairs, normalizing codes to uppercase
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, CountryPolicy)>) -> Self {
        let countries = entries
            .into_iter()
            .map(|(code, policy)| (code.to_uppercase(), policy))
            .collect();
        Self { countries }
    }

    /// Look up the policy for a country code (case-insensitive)
    ///
    /// `None` means the table has no entry for this country, which screening
    /// treats as "no requirements, no advisory".
    #[must_use]
    pub fn get(&self, country: &str) -> Option<CountryPolicy> {
        self.countries.get(&country.to_uppercase()).copied()
    }

    /// Number of countries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the table holds no countries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
