//! Recover player records from MLS Club Roster Profile pages.
//!
//! Each team section opens with a `<TEAM> | ROSTER PROFILE` header, states the
//! roster construction model and the GAM still available, and lists players
//! in tables whose header row carries `NAME` and `ROSTER DESIGNATION`. Team
//! details carry over to following pages until the next team header.

use std::path::Path;

use lopdf::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use super::layout::{extract_page_layout, PageLayout, TextLine};
use super::types::{Designations, RosterRecord};
use crate::{MlsError, Result};


static TEAM_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*([\p{Lu}\d][\p{Lu}\d &.'-]*?)\s*\|\s*ROSTER PROFILE").unwrap()
});
static ROSTER_MODEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Roster Construction Model:\s*(.+)").unwrap());
static GAM_AVAILABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{4}\s+GAM AVAILABLE\s*\$?\s*([\d,]+)").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Header fragments may start a little right of the cells below them.
const COLUMN_SLACK: f64 = 3.0;

/// A blank band taller than this between lines ends the table.
const MAX_ROW_GAP: f64 = 40.0;

/// Section labels that appear in the name column but are not players.
const SKIP_TERMS: [&str; 9] = [
    "NAME",
    "SENIOR ROSTER",
    "SUPPLEMENTAL ROSTER",
    "SUPPLEMENTAL SPOT",
    "OFF-ROSTER",
    "DESIGNATED PLAYERS",
    "U22 INITIATIVE",
    "UNAVAILABLE PLAYERS",
    "NO.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Designation,
    Status,
    ContractThru,
    OptionYears,
}

#[derive(Debug, Clone, PartialEq)]
struct ColumnAnchor {
    x: f64,
    field: Option<Field>,
}

/// Team details in effect for the current page.
#[derive(Debug, Clone, Default)]
struct TeamContext {
    team: Option<String>,
    roster_model: Option<String>,
    team_gam: Option<u64>,
}

impl TeamContext {
    fn update(&mut self, page_text: &str) {
        if let Some(team) = TEAM_HEADER.captures(page_text).and_then(|c| c.get(1)) {
            let team = team.as_str().trim().to_string();
            if self.team.as_deref() != Some(team.as_str()) {
                info!(team = %team, "found team");
                *self = TeamContext {
                    team: Some(team),
                    ..Default::default()
                };
            }
        }

        if let Some(model) = ROSTER_MODEL.captures(page_text).and_then(|c| c.get(1)) {
            self.roster_model = Some(model.as_str().trim().to_string());
        }

        if let Some(gam) = GAM_AVAILABLE.captures(page_text).and_then(|c| c.get(1)) {
            self.team_gam = gam.as_str().replace(',', "").parse().ok();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Cover and info pages at the front of every document.
    pub skip_leading_pages: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_leading_pages: 3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterParser {
    config: ParserConfig,
}

impl RosterParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse one PDF. Failing to open the document is a
    /// [`MlsError::Pdf`]; a page whose content cannot be decoded is skipped.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<RosterRecord>> {
        let doc = Document::load(path).map_err(|e| MlsError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(self.parse_document(&doc))
    }

    pub fn parse_document(&self, doc: &Document) -> Vec<RosterRecord> {
        let layouts = doc
            .get_pages()
            .into_iter()
            .filter(|(page_num, _)| *page_num as usize > self.config.skip_leading_pages)
            .filter_map(|(page_num, page_id)| match extract_page_layout(doc, page_id) {
                Ok(layout) => Some(layout),
                Err(e) => {
                    warn!(page = page_num, error = %e, "skipping unreadable page");
                    None
                }
            });

        self.parse_layouts(layouts)
    }

    /// Parse already laid-out pages, in order. Cover pages must already be
    /// removed.
    pub fn parse_layouts<I>(&self, layouts: I) -> Vec<RosterRecord>
    where
        I: IntoIterator<Item = PageLayout>,
    {
        let mut context = TeamContext::default();
        let mut records = Vec::new();

        for layout in layouts {
            context.update(&layout.text());
            let Some(team) = context.team.clone() else {
                continue;
            };
            let before = records.len();
            parse_tables(&layout, &team, &context, &mut records);
            debug!(team = %team, players = records.len() - before, "parsed page");
        }

        records
    }
}

fn is_header_line(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper.contains("ROSTER DESIGNATION") && upper.contains("NAME")
}

fn column_anchors(line: &TextLine) -> Vec<ColumnAnchor> {
    let mut has_name = false;
    line.fragments
        .iter()
        .map(|fragment| {
            let header = fragment.text.to_uppercase();
            let field = if header.contains("NAME") && !has_name {
                has_name = true;
                Some(Field::Name)
            } else if header.contains("DESIGNATION") {
                Some(Field::Designation)
            } else if header.contains("STATUS") {
                Some(Field::Status)
            } else if header.contains("CONTRACT") && header.contains("THRU") {
                Some(Field::ContractThru)
            } else if header.contains("OPTION") {
                Some(Field::OptionYears)
            } else {
                None
            };
            ColumnAnchor {
                x: fragment.x,
                field,
            }
        })
        .collect()
}

/// Split a line into one cell per anchor. A fragment belongs to the right-most
/// anchor starting at or before it.
fn split_cells(line: &TextLine, anchors: &[ColumnAnchor]) -> Vec<String> {
    let mut cells = vec![String::new(); anchors.len()];
    for fragment in &line.fragments {
        let idx = anchors
            .iter()
            .rposition(|a| a.x <= fragment.x + COLUMN_SLACK)
            .unwrap_or(0);
        let text = fragment.text.trim();
        if text.is_empty() {
            continue;
        }
        if !cells[idx].is_empty() {
            cells[idx].push(' ');
        }
        cells[idx].push_str(text);
    }
    cells
}

fn field_value<'a>(cells: &'a [String], anchors: &[ColumnAnchor], field: Field) -> &'a str {
    anchors
        .iter()
        .position(|a| a.field == Some(field))
        .and_then(|idx| cells.get(idx))
        .map(|s| s.trim())
        .unwrap_or("")
}

fn is_section_label(name: &str) -> bool {
    let upper = name.to_uppercase();
    SKIP_TERMS.iter().any(|term| upper.contains(term))
}

/// Years printed in an option cell count as one option each; otherwise the
/// cell holds the count itself.
fn option_years(cell: &str) -> Option<u16> {
    let years = YEAR.find_iter(cell).count();
    if years > 0 {
        return u16::try_from(years).ok();
    }
    INTEGER.find(cell).and_then(|m| m.as_str().parse().ok())
}

/// Rows run from a header line until the next header, a large vertical gap,
/// or a line that fills only one column (footnotes, legends, page footers).
fn parse_tables(
    layout: &PageLayout,
    team: &str,
    context: &TeamContext,
    records: &mut Vec<RosterRecord>,
) {
    let mut table: Option<(Vec<ColumnAnchor>, f64)> = None;

    for line in &layout.lines {
        if is_header_line(&line.text()) {
            let found = column_anchors(line);
            table = found
                .iter()
                .any(|a| a.field == Some(Field::Name))
                .then_some((found, line.y));
            continue;
        }

        let Some((anchors, last_y)) = table.as_mut() else {
            continue;
        };
        if *last_y - line.y > MAX_ROW_GAP {
            table = None;
            continue;
        }
        *last_y = line.y;
        let anchors = anchors.as_slice();

        let cells = split_cells(line, anchors);
        let name = field_value(&cells, anchors, Field::Name);
        if is_section_label(name) {
            continue;
        }
        let filled = cells.iter().filter(|c| !c.is_empty()).count();
        if filled < 2 {
            if !name.is_empty() {
                table = None;
            }
            continue;
        }
        if name.is_empty() {
            continue;
        }

        let designation = field_value(&cells, anchors, Field::Designation);
        let designations = Designations::from_text(designation);

        records.push(RosterRecord {
            team: team.to_string(),
            name: name.to_string(),
            roster_designation: designation.to_string(),
            current_status: field_value(&cells, anchors, Field::Status).to_string(),
            contract_thru: YEAR
                .captures(field_value(&cells, anchors, Field::ContractThru))
                .and_then(|c| c[1].parse().ok()),
            option_years: option_years(field_value(&cells, anchors, Field::OptionYears)),
            category: designations.category(),
            roster_model: context.roster_model.clone().unwrap_or_default(),
            team_gam: context.team_gam,
            designations,
        });
    }
}
