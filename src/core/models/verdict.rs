//! Screening verdicts
//!
//! The closed set of decisions the checkpoint can issue for a record.

use serde::{Deserialize, Serialize};

/// Decision issued for one entry record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Entry granted
    Accept,
    /// Entry denied (incomplete record or missing/expired visa)
    Reject,
    /// Referred for secondary inspection (watchlist hit)
    Secondary,
    /// Detained for quarantine (medical advisory on origin country)
    Quarantine,
}

impl Verdict {
    /// Whether this verdict lets the traveler through the gate
    #[must_use]
    pub const fn grants_entry(self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accept => write!(f, "Accept"),
            Self::Reject => write!(f, "Reject"),
            Self::Secondary => write!(f, "Secondary"),
            Self::Quarantine => write!(f, "Quarantine"),
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            "secondary" => Ok(Self::Secondary),
            "quarantine" => Ok(Self::Quarantine),
            _ => Err(format!(
                "Invalid verdict: {s}. Use: accept, reject, secondary, quarantine"
            )),
        }
    }
}
