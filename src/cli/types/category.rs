//! FBref player stat categories.

use serde::Serialize;
use std::fmt;

/// Base path for the Major League Soccer competition on FBref.
pub const FBREF_MLS_BASE_URL: &str = "https://fbref.com/en/comps/22";

/// Player stat tables published for a competition on FBref.
///
/// Each category lives on its own page and is rendered as a `<table>` with a
/// fixed id once the operator reveals it with the page's "Show" toggle.
///
/// # Examples
///
/// ```rust
/// use mls_data::StatCategory;
///
/// let category = StatCategory::Passing;
/// assert_eq!(category.table_id(), "stats_passing");
/// assert_eq!(category.file_name(), "mls_player_stats_passing.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    /// Player Standard Stats
    Standard,
    /// Goalkeeping
    Goalkeeping,
    /// Advanced Goalkeeping
    AdvancedGoalkeeping,
    /// Shooting
    Shooting,
    /// Passing
    Passing,
    /// Pass Types
    PassTypes,
    /// Goal and Shot Creation
    GoalShotCreation,
    /// Defensive Actions
    Defense,
    /// Possession
    Possession,
    /// Playing Time
    PlayingTime,
    /// Miscellaneous Stats
    Miscellaneous,
}

impl StatCategory {
    pub const ALL: [StatCategory; 11] = [
        StatCategory::Standard,
        StatCategory::Goalkeeping,
        StatCategory::AdvancedGoalkeeping,
        StatCategory::Shooting,
        StatCategory::Passing,
        StatCategory::PassTypes,
        StatCategory::GoalShotCreation,
        StatCategory::Defense,
        StatCategory::Possession,
        StatCategory::PlayingTime,
        StatCategory::Miscellaneous,
    ];

    /// HTML id of the player table for this category.
    pub fn table_id(&self) -> &'static str {
        match self {
            StatCategory::Standard => "stats_standard",
            StatCategory::Goalkeeping => "stats_keeper",
            StatCategory::AdvancedGoalkeeping => "stats_keeper_adv",
            StatCategory::Shooting => "stats_shooting",
            StatCategory::Passing => "stats_passing",
            StatCategory::PassTypes => "stats_passing_types",
            StatCategory::GoalShotCreation => "stats_gca",
            StatCategory::Defense => "stats_defense",
            StatCategory::Possession => "stats_possession",
            StatCategory::PlayingTime => "stats_playing_time",
            StatCategory::Miscellaneous => "stats_misc",
        }
    }

    /// Short name used in output file names.
    pub fn slug(&self) -> &'static str {
        match self {
            StatCategory::Standard => "standard",
            StatCategory::Goalkeeping => "goalkeeping",
            StatCategory::AdvancedGoalkeeping => "advanced_goalkeeping",
            StatCategory::Shooting => "shooting",
            StatCategory::Passing => "passing",
            StatCategory::PassTypes => "pass_types",
            StatCategory::GoalShotCreation => "goal_shot_creation",
            StatCategory::Defense => "defense",
            StatCategory::Possession => "possession",
            StatCategory::PlayingTime => "playing_time",
            StatCategory::Miscellaneous => "miscellaneous",
        }
    }

    /// FBref page the operator must open to reveal this table.
    pub fn page_url(&self) -> String {
        let path = match self {
            StatCategory::Standard => "stats",
            StatCategory::Goalkeeping => "keepers",
            StatCategory::AdvancedGoalkeeping => "keepersadv",
            StatCategory::Shooting => "shooting",
            StatCategory::Passing => "passing",
            StatCategory::PassTypes => "passing_types",
            StatCategory::GoalShotCreation => "gca",
            StatCategory::Defense => "defense",
            StatCategory::Possession => "possession",
            StatCategory::PlayingTime => "playingtime",
            StatCategory::Miscellaneous => "misc",
        };
        format!("{FBREF_MLS_BASE_URL}/{path}/Major-League-Soccer-Stats")
    }

    pub fn file_name(&self) -> String {
        format!("mls_player_stats_{}.csv", self.slug())
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatCategory::Standard => "Standard",
            StatCategory::Goalkeeping => "Goalkeeping",
            StatCategory::AdvancedGoalkeeping => "Advanced Goalkeeping",
            StatCategory::Shooting => "Shooting",
            StatCategory::Passing => "Passing",
            StatCategory::PassTypes => "Pass Types",
            StatCategory::GoalShotCreation => "Goal and Shot Creation",
            StatCategory::Defense => "Defensive Actions",
            StatCategory::Possession => "Possession",
            StatCategory::PlayingTime => "Playing Time",
            StatCategory::Miscellaneous => "Miscellaneous",
        };
        write!(f, "{}", s)
    }
}
