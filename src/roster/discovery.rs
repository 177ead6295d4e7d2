//! Locating roster PDFs and naming season output files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{cli::types::Season, Result};

/// PDF files in `dir` whose name contains `pattern`, sorted by path.
/// Subdirectories are not searched.
pub fn find_roster_pdfs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(pattern));
        if is_pdf && matches {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

pub fn output_file_name(season: Season) -> String {
    format!("{}_roster_profiles_parsed.csv", season)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_roster_pdfs_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in [
            "2025 Roster Profile - West.pdf",
            "2024 Roster Profile - East.PDF",
            "2025 Roster Profile notes.txt",
            "Schedule.pdf",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("Roster Profile archive.pdf")).unwrap();

        let found = find_roster_pdfs(dir.path(), "Roster Profile").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(
            names,
            vec!["2024 Roster Profile - East.PDF", "2025 Roster Profile - West.pdf"]
        );
    }

    #[test]
    fn test_find_roster_pdfs_missing_dir() {
        let dir = TempDir::new().unwrap();
        let result = find_roster_pdfs(&dir.path().join("missing"), "Roster Profile");
        assert!(matches!(result, Err(crate::MlsError::Io(_))));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Season::new(2024)),
            "2024_roster_profiles_parsed.csv"
        );
    }
}
