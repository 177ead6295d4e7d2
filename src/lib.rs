//! MLS Data Library
//!
//! Collects Major League Soccer datasets as CSV files:
//!
//! - **Player stats**: reads FBref player stat tables out of a Chrome tab the
//!   operator has already opened, and writes one CSV per stat category.
//! - **Roster profiles**: parses the league's Club Roster Profile PDFs into
//!   player records, and writes one CSV per season.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mls_data::{Season, commands::parse_rosters::*};
//!
//! # fn example() -> mls_data::Result<()> {
//! let outputs = parse_rosters(&ParseRostersParams {
//!     input_dir: Some("rosters".into()),
//!     output_dir: None,
//!     pattern: "Roster Profile".to_string(),
//!     skip_pages: 3,
//!     season: Season::default(),
//!     as_json: false,
//! })?;
//!
//! for output in outputs {
//!     println!("{}: {} players", output.season, output.summary.total_players);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLS_DATA_DIR=./data
//! export MLS_DEBUGGER_URL=http://127.0.0.1:9222
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod roster;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Season, StatCategory};
pub use error::{MlsError, Result};
pub use roster::{RosterCategory, RosterRecord};
pub use stats::{CellValue, StatTable};

/// Environment variable for the CSV output (and default PDF input) directory
pub const DATA_DIR_ENV_VAR: &str = "MLS_DATA_DIR";

/// Environment variable for the Chrome remote-debugging endpoint
pub const DEBUGGER_URL_ENV_VAR: &str = "MLS_DEBUGGER_URL";

/// Data directory used when neither flag nor environment variable is set
pub const DEFAULT_DATA_DIR: &str = "data";
