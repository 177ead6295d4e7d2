//! FBref player stats scraping.
//!
//! - `browser`: copy the rendered HTML out of the operator's Chrome tab
//! - `table`: find and flatten a category's player table
//! - `types`: rows, cells and CSV output

pub mod browser;
pub mod table;
pub mod types;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::{cli::types::StatCategory, core::create_output_file, Result};

pub use browser::{capture_page, DebuggerEndpoint, PageSnapshot};
pub use table::extract_stat_table;
pub use types::{CellValue, StatRow, StatTable};

/// A CSV written for one category.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedTable {
    pub category: StatCategory,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Extract every requested table, then write one CSV per category.
///
/// All tables are located before anything is written, so a missing table
/// leaves the output directory untouched.
pub fn export_stat_tables(
    html: &str,
    categories: &[StatCategory],
    output_dir: &Path,
) -> Result<Vec<ExportedTable>> {
    let tables = categories
        .iter()
        .map(|&category| extract_stat_table(html, category))
        .collect::<Result<Vec<_>>>()?;

    let mut exported = Vec::with_capacity(tables.len());
    for table in tables {
        let path = output_dir.join(table.category.file_name());
        table.write_csv(create_output_file(&path)?)?;
        info!(category = %table.category, rows = table.rows.len(), path = %path.display(), "wrote stat table");

        exported.push(ExportedTable {
            category: table.category,
            path,
            rows: table.rows.len(),
            columns: table.columns.len(),
        });
    }

    Ok(exported)
}
