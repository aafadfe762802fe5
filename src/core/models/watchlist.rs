//! Watchlist of flagged travelers
//!
//! Raw entries come from the watchlist file; [`Watchlist`] indexes them for
//! the two lookups screening needs: by passport number and by full name.
//! Both lookups are case-insensitive.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One flagged identity from the watchlist file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Given name of the flagged person
    #[serde(default)]
    pub first_name: String,
    /// Family name of the flagged person
    #[serde(default)]
    pub last_name: String,
    /// Flagged passport number
    #[serde(default)]
    pub passport: String,
}

/// Watchlist indexed for screening lookups
#[derive(Debug, Clone, Default)]
pub struct Watchlist {
    passports: HashSet<String>,
    names: HashSet<(String, String)>,
    len: usize,
}

impl Watchlist {
    /// Build the lookup indexes from raw entries
    ///
    /// Blank fields are not identities: an entry with an empty passport is
    /// only indexed by name, and vice versa.
    #[must_use]
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        let mut passports = HashSet::new();
        let mut names = HashSet::new();
        let len = entries.len();

        for entry in entries {
            if !entry.passport.is_empty() {
                passports.insert(entry.passport.to_uppercase());
            }
            if !entry.first_name.is_empty() && !entry.last_name.is_empty() {
                names.insert((entry.first_name.to_uppercase(), entry.last_name.to_uppercase()));
            }
        }

        Self {
            passports,
            names,
            len,
        }
    }

    /// Whether a passport number is flagged (case-insensitive)
    #[must_use]
    pub fn has_passport(&self, passport: &str) -> bool {
        self.passports.contains(&passport.to_uppercase())
    }

    /// Whether a full name pair is flagged (case-insensitive, both parts must match)
    #[must_use]
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.names.contains(&(first_name.to_uppercase(), last_name.to_uppercase()))
    }

    /// Number of entries the watchlist was built from
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the watchlist holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
