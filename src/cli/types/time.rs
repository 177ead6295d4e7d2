//! Season type for MLS roster and stat files.

use crate::error::{MlsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static SEASON_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)(20\d{2})(?:\D|$)").expect("season regex is valid"));

/// Type-safe wrapper for Season years
///
/// # Examples
///
/// ```rust
/// use mls_data::Season;
///
/// let season = Season::new(2024);
/// assert_eq!(season.as_u16(), 2024);
/// assert_eq!(season.to_string(), "2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Find the first `20xx` year embedded in a file name, e.g.
    /// `"2024 Club Roster Profile.pdf"`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        SEASON_YEAR
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .map(Self)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = MlsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
