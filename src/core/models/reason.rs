//! Entry reasons
//!
//! The stated purpose of a border crossing.

/// Why a traveler is presenting at the checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryReason {
    /// Citizen coming home
    Returning,
    /// Passing through on the way elsewhere
    Transit,
    /// Visiting
    Visit,
}

impl std::fmt::Display for EntryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Returning => write!(f, "returning"),
            Self::Transit => write!(f, "transit"),
            Self::Visit => write!(f, "visit"),
        }
    }
}

impl std::str::FromStr for EntryReason {
    type Err = String;

    /// Parse an entry reason. Matching is exact: reasons are lowercase on
    /// valid paperwork, so `"Visit"` is not a reason.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "returning" => Ok(Self::Returning),
            "transit" => Ok(Self::Transit),
            "visit" => Ok(Self::Visit),
            _ => Err(format!(
                "Invalid entry reason: {s}. Use: returning, transit, visit"
            )),
        }
    }
}
