//! Roster records and designation flags.

use std::fmt;
use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::Result;

static DP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)designated player|young designated|\bDP\b").unwrap());
static U22_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bU-?22\b").unwrap());
static TAM_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bTAM\b").unwrap());
static HOMEGROWN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bhomegrown\b|\bHGP\b").unwrap());
static GA_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)generation adidas|\bGA\b").unwrap());

/// Designation flags printed next to a player.
///
/// Flags combine freely (a Homegrown player can also be a U22 Initiative
/// signing) except that a Designated Player is never also a TAM player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Designations {
    pub designated_player: bool,
    pub u22_initiative: bool,
    pub tam: bool,
    pub homegrown: bool,
    pub generation_adidas: bool,
}

impl Designations {
    pub fn from_text(text: &str) -> Self {
        let designated_player = DP_MARKER.is_match(text);
        Self {
            designated_player,
            u22_initiative: U22_MARKER.is_match(text),
            tam: !designated_player && TAM_MARKER.is_match(text),
            homegrown: HOMEGROWN_MARKER.is_match(text),
            generation_adidas: GA_MARKER.is_match(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Highest-priority flag: DP, U22, TAM, Homegrown, Generation Adidas.
    pub fn category(&self) -> RosterCategory {
        if self.designated_player {
            RosterCategory::DesignatedPlayer
        } else if self.u22_initiative {
            RosterCategory::U22Initiative
        } else if self.tam {
            RosterCategory::TamPlayer
        } else if self.homegrown {
            RosterCategory::Homegrown
        } else if self.generation_adidas {
            RosterCategory::GenerationAdidas
        } else {
            RosterCategory::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RosterCategory {
    #[serde(rename = "Designated Player")]
    DesignatedPlayer,
    #[serde(rename = "U22 Initiative")]
    U22Initiative,
    #[serde(rename = "TAM Player")]
    TamPlayer,
    #[serde(rename = "Homegrown")]
    Homegrown,
    #[serde(rename = "Generation Adidas")]
    GenerationAdidas,
    #[serde(rename = "Standard")]
    Standard,
}

impl fmt::Display for RosterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RosterCategory::DesignatedPlayer => "Designated Player",
            RosterCategory::U22Initiative => "U22 Initiative",
            RosterCategory::TamPlayer => "TAM Player",
            RosterCategory::Homegrown => "Homegrown",
            RosterCategory::GenerationAdidas => "Generation Adidas",
            RosterCategory::Standard => "Standard",
        };
        write!(f, "{}", s)
    }
}

/// One player row recovered from a roster profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRecord {
    pub team: String,
    pub name: String,
    pub roster_designation: String,
    pub current_status: String,
    pub contract_thru: Option<u16>,
    pub option_years: Option<u16>,
    pub category: RosterCategory,
    pub roster_model: String,
    pub team_gam: Option<u64>,
    #[serde(skip)]
    pub designations: Designations,
}

/// Write records with a header row. Blank optional fields stay empty.
pub fn write_roster_csv<W: Write>(records: &[RosterRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
