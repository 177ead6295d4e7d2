//! Stats scrape command implementation

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::StatCategory,
    core::write_string,
    stats::{capture_page, export_stat_tables, DebuggerEndpoint, ExportedTable},
    Result,
};

use super::{resolve_data_dir, resolve_debugger_url};

/// Name of the captured page saved with `--debug-html`.
pub const DEBUG_HTML_FILE: &str = "debug_page.html";

#[derive(Debug, Default)]
pub struct ScrapeStatsParams {
    pub debugger_url: Option<String>,
    pub categories: Option<Vec<StatCategory>>,
    pub output_dir: Option<PathBuf>,
    pub page_match: String,
    pub debug_html: bool,
    pub as_json: bool,
}

/// Requested categories in first-seen order without repeats; `standard` when
/// none were given.
pub fn requested_categories(categories: Option<Vec<StatCategory>>) -> Vec<StatCategory> {
    let mut unique = Vec::new();
    for category in categories.unwrap_or_default() {
        if !unique.contains(&category) {
            unique.push(category);
        }
    }
    if unique.is_empty() {
        unique.push(StatCategory::Standard);
    }
    unique
}

/// Handle the scrape-stats command
pub async fn handle_scrape_stats(params: ScrapeStatsParams) -> Result<()> {
    let endpoint = DebuggerEndpoint::new(resolve_debugger_url(params.debugger_url));
    let output_dir = resolve_data_dir(params.output_dir);
    let categories = requested_categories(params.categories);

    println!("Connecting to browser at {}...", endpoint.base_url());
    // tarpaulin::skip - needs a live browser
    let snapshot = capture_page(&endpoint, &params.page_match).await?;
    println!("✓ Captured \"{}\" ({})", snapshot.title, snapshot.url);

    if params.debug_html {
        let path = output_dir.join(DEBUG_HTML_FILE);
        write_string(&path, &snapshot.html)?;
        info!(path = %path.display(), "saved page html");
    }

    let exported = export_stat_tables(&snapshot.html, &categories, &output_dir)?;
    print_exported(&exported, params.as_json)
}

fn print_exported(exported: &[ExportedTable], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(exported)?);
        return Ok(());
    }

    for table in exported {
        println!(
            "✓ {}: {} rows x {} columns -> {}",
            table.category,
            table.rows,
            table.columns,
            table.path.display()
        );
    }
    Ok(())
}
