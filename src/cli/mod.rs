//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{Season, StatCategory};

#[derive(Debug, Parser)]
#[clap(name = "mls-data", about = "MLS player stats scraper and roster PDF parser")]
pub struct MlsData {
    /// Show debug-level diagnostics (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape FBref player stat tables from an already-open browser page.
    ///
    /// Start Chrome with `--remote-debugging-port=9222`, open the FBref stats
    /// page, pass any bot checks and click "Show" on the player table first.
    ScrapeStats {
        /// Remote debugging endpoint (or set `MLS_DEBUGGER_URL` env var).
        #[clap(long)]
        debugger_url: Option<String>,

        /// Stat category to extract (repeatable): `-c standard -c passing`.
        #[clap(short = 'c', long = "category", value_enum)]
        categories: Option<Vec<StatCategory>>,

        /// Directory for CSV output (or set `MLS_DATA_DIR` env var).
        #[clap(long, short)]
        output_dir: Option<PathBuf>,

        /// Substring used to pick the browser tab to read.
        #[clap(long, default_value = "fbref.com")]
        page_match: String,

        /// Save the captured page as `debug_page.html` next to the CSV files.
        #[clap(long)]
        debug_html: bool,

        /// Print a JSON summary of the written tables instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Parse MLS Club Roster Profile PDFs into one CSV per season.
    ParseRosters {
        /// Directory containing the roster PDFs (defaults to the data directory).
        #[clap(long, short)]
        input_dir: Option<PathBuf>,

        /// Directory for CSV output (or set `MLS_DATA_DIR` env var).
        #[clap(long, short)]
        output_dir: Option<PathBuf>,

        /// Only PDFs whose file name contains this text are parsed.
        #[clap(long, default_value = "Roster Profile")]
        pattern: String,

        /// Number of leading cover/info pages to skip in every PDF.
        #[clap(long, default_value_t = 3)]
        skip_pages: usize,

        /// Season used when a file name carries no year.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Print the per-season summaries as JSON instead of text.
        #[clap(long)]
        json: bool,
    },
}
