//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mls_data::{
    cli::{Commands, MlsData},
    commands::{
        parse_rosters::{handle_parse_rosters, ParseRostersParams},
        scrape_stats::{handle_scrape_stats, ScrapeStatsParams},
    },
    core::init_tracing,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MlsData::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::ScrapeStats {
            debugger_url,
            categories,
            output_dir,
            page_match,
            debug_html,
            json,
        } => handle_scrape_stats(ScrapeStatsParams {
            debugger_url,
            categories,
            output_dir,
            page_match,
            debug_html,
            as_json: json,
        })
        .await
        .context("scraping player stats failed")?,

        Commands::ParseRosters {
            input_dir,
            output_dir,
            pattern,
            skip_pages,
            season,
            json,
        } => handle_parse_rosters(ParseRostersParams {
            input_dir,
            output_dir,
            pattern,
            skip_pages,
            season,
            as_json: json,
        })
        .context("parsing roster PDFs failed")?,
    }

    Ok(())
}
