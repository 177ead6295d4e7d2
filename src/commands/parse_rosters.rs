//! Roster PDF parse command implementation
//!
//! Every matching PDF in the input directory is parsed in path order. Records
//! are grouped by the season in the file name and written one CSV per season.
//! A PDF that cannot be opened is reported and skipped.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cli::types::Season,
    core::create_output_file,
    roster::{
        find_roster_pdfs, output_file_name, summarize, write_roster_csv, ParserConfig,
        RosterParser, RosterRecord, RosterSummary,
    },
    Result,
};

use super::resolve_data_dir;

#[derive(Debug)]
pub struct ParseRostersParams {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub pattern: String,
    pub skip_pages: usize,
    pub season: Season,
    pub as_json: bool,
}

/// Rows echoed after each season summary.
const SAMPLE_ROWS: usize = 10;

/// One season's CSV and what went into it.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonOutput {
    pub season: Season,
    pub path: PathBuf,
    pub files: usize,
    pub summary: RosterSummary,
    /// First records written, in file order.
    pub sample: Vec<RosterRecord>,
}

/// Parse all roster PDFs and write the season files.
///
/// Seasons whose PDFs yielded no players are logged and produce no file.
pub fn parse_rosters(params: &ParseRostersParams) -> Result<Vec<SeasonOutput>> {
    let output_dir = resolve_data_dir(params.output_dir.clone());
    let input_dir = params
        .input_dir
        .clone()
        .unwrap_or_else(|| output_dir.clone());

    let pdfs = find_roster_pdfs(&input_dir, &params.pattern)?;
    if pdfs.is_empty() {
        warn!(dir = %input_dir.display(), pattern = %params.pattern, "no roster PDFs found");
        return Ok(Vec::new());
    }

    let parser = RosterParser::new(ParserConfig {
        skip_leading_pages: params.skip_pages,
    });

    let mut seasons: BTreeMap<Season, (usize, Vec<RosterRecord>)> = BTreeMap::new();
    for pdf in &pdfs {
        let season = pdf
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(Season::from_file_name)
            .unwrap_or(params.season);
        let entry = seasons.entry(season).or_default();
        entry.0 += 1;

        match parser.parse_file(pdf) {
            Ok(records) => {
                info!(file = %pdf.display(), season = %season, players = records.len(), "parsed roster PDF");
                entry.1.extend(records);
            }
            Err(e) => warn!(file = %pdf.display(), error = %e, "skipping roster PDF"),
        }
    }

    let mut outputs = Vec::new();
    for (season, (files, records)) in seasons {
        if records.is_empty() {
            warn!(season = %season, files, "no players found, nothing written");
            continue;
        }

        let path = output_dir.join(output_file_name(season));
        write_roster_csv(&records, create_output_file(&path)?)?;
        info!(season = %season, players = records.len(), path = %path.display(), "wrote roster CSV");

        outputs.push(SeasonOutput {
            season,
            path,
            files,
            summary: summarize(&records),
            sample: records.iter().take(SAMPLE_ROWS).cloned().collect(),
        });
    }

    Ok(outputs)
}

/// Handle the parse-rosters command
pub fn handle_parse_rosters(params: ParseRostersParams) -> Result<()> {
    let outputs = parse_rosters(&params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    if outputs.is_empty() {
        println!("No roster records written");
    }

    for output in &outputs {
        print_summary(output);
    }
    Ok(())
}

fn print_summary(output: &SeasonOutput) {
    let summary = &output.summary;
    println!(
        "✓ {} season: {} players from {} teams ({} files) -> {}",
        output.season,
        summary.total_players,
        summary.total_teams,
        output.files,
        output.path.display()
    );

    println!("  Player categories:");
    for item in &summary.by_category {
        println!("    {:<20} {}", item.label, item.count);
    }

    if !summary.by_status.is_empty() {
        println!("  Top statuses:");
        for item in &summary.by_status {
            println!("    {:<30} {}", item.label, item.count);
        }
    }

    println!("  Top teams:");
    for item in &summary.top_teams {
        println!("    {:<30} {}", item.label, item.count);
    }

    println!("  Sample rows:");
    for record in &output.sample {
        println!("    {}", sample_line(record));
    }
}

/// Team, name, category and contract year of one record.
pub(crate) fn sample_line(record: &RosterRecord) -> String {
    let contract = record
        .contract_thru
        .map(|year| year.to_string())
        .unwrap_or_default();
    format!(
        "{:<25} {:<30} {:<20} {}",
        record.team,
        record.name,
        record.category.to_string(),
        contract
    )
    .trim_end()
    .to_string()
}
