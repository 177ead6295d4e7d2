//! Output file helpers. Every output is overwritten on each run.

use std::{
    fs,
    io::Write,
    path::Path,
};

/// Create (or truncate) a file, creating its parent directories first.
pub fn create_output_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::File::create(path)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut f = create_output_file(path)?;
    f.write_all(contents.as_bytes())
}
