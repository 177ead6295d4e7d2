//! Locate and flatten FBref stat tables from captured page HTML.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::types::{CellValue, StatRow, StatTable};
use crate::{cli::types::StatCategory, MlsError, Result};

#[cfg(test)]
mod tests;

/// Over-header groups whose name is dropped from the flattened column name.
const STRIPPED_GROUPS: [&str; 4] = ["Playing Time", "Performance", "Expected", "Per 90 Minutes"];

/// Body row classes FBref uses for repeated headers and separators.
const SKIPPED_ROW_CLASSES: [&str; 4] = ["thead", "over_header", "spacer", "hidden"];

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MlsError::Selector {
        message: format!("{css}: {e:?}"),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "th" | "td"))
        .collect()
}

/// Extract the player table for `category` from a page snapshot.
///
/// Fails with [`MlsError::TableNotFound`] when the table is not in the DOM,
/// which is what FBref serves until the table is revealed.
pub fn extract_stat_table(html: &str, category: StatCategory) -> Result<StatTable> {
    let document = Html::parse_document(html);
    let table_selector = selector(&format!("table#{}", category.table_id()))?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| MlsError::TableNotFound {
            table_id: category.table_id().to_string(),
        })?;

    let (columns, header_row) = header_columns(table)?;
    let rows = body_rows(table, header_row, columns.len(), player_column(&columns))?;

    debug!(
        table_id = category.table_id(),
        columns = columns.len(),
        rows = rows.len(),
        "extracted stat table"
    );

    Ok(StatTable {
        category,
        columns,
        rows,
    })
}

/// Flattened column names and the row they were read from.
fn header_columns(table: ElementRef<'_>) -> Result<(Vec<String>, Option<ElementRef<'_>>)> {
    let mut header_rows: Vec<ElementRef<'_>> = table.select(&selector("thead tr")?).collect();
    if header_rows.is_empty() {
        header_rows.extend(table.select(&selector("tr")?).next());
    }

    let Some(leaf_row) = header_rows.pop() else {
        return Ok((Vec::new(), None));
    };

    let leaves: Vec<String> = row_cells(leaf_row).into_iter().map(cell_text).collect();
    let groups = header_rows
        .last()
        .map(|row| expand_groups(*row))
        .unwrap_or_default();

    Ok((flatten_columns(&groups, &leaves), Some(leaf_row)))
}

/// Repeat each over-header label across the columns it spans.
fn expand_groups(row: ElementRef<'_>) -> Vec<String> {
    let mut groups = Vec::new();
    for cell in row_cells(row) {
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        let label = cell_text(cell);
        groups.extend(std::iter::repeat(label).take(span));
    }
    groups
}

/// Join `group_leaf` names for multi-level headers.
///
/// Common groups are stripped so `Performance / Gls` becomes `Gls`, but a
/// name that already exists keeps its group (`Per 90 Minutes_Gls`).
pub(crate) fn flatten_columns(groups: &[String], leaves: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(leaves.len());

    for (i, leaf) in leaves.iter().enumerate() {
        let group = groups.get(i).map(String::as_str).unwrap_or("").trim();
        let qualified = match (group.is_empty(), leaf.is_empty()) {
            (true, true) => format!("column_{}", i + 1),
            (true, false) => leaf.clone(),
            (false, true) => group.to_string(),
            (false, false) => format!("{group}_{leaf}"),
        };

        let mut name = if !leaf.is_empty() && STRIPPED_GROUPS.contains(&group) {
            leaf.clone()
        } else {
            qualified.clone()
        };
        if seen.contains(&name) {
            name = qualified;
        }

        let base = name.clone();
        let mut suffix = 2;
        while seen.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }

        seen.insert(name.clone());
        names.push(name);
    }

    names
}

fn player_column(columns: &[String]) -> Option<usize> {
    columns.iter().position(|c| c.eq_ignore_ascii_case("player"))
}

fn body_rows(
    table: ElementRef<'_>,
    header_row: Option<ElementRef<'_>>,
    width: usize,
    player_idx: Option<usize>,
) -> Result<Vec<StatRow>> {
    let mut rows = Vec::new();

    for row in table.select(&selector("tbody > tr")?) {
        // Without a thead the header row sits in the implied tbody.
        if header_row.is_some_and(|header| header.id() == row.id()) {
            continue;
        }
        if row
            .value()
            .classes()
            .any(|class| SKIPPED_ROW_CLASSES.contains(&class))
        {
            continue;
        }

        let mut texts: Vec<String> = row_cells(row).into_iter().map(cell_text).collect();
        if texts.iter().all(String::is_empty) {
            continue;
        }

        // Repeated header rows without the `thead` class.
        if let Some(idx) = player_idx {
            if texts.get(idx).map(String::as_str) == Some("Player") {
                continue;
            }
        }

        texts.resize(width, String::new());
        rows.push(StatRow::new(
            texts.iter().map(|t| CellValue::parse(t)).collect(),
        ));
    }

    Ok(rows)
}
