// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::data::{CodeRecord, ResultTable};
use crate::error::ScrapeError;

/// Write the whole table in one go to the path implied by `export`.
/// Returns the final path written to. An existing file is overwritten.
pub fn write_export(export: &ExportOptions, table: &ResultTable) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    // Header written by hand so an empty table still gets one.
    let mut out = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .has_headers(false)
        .from_path(&path)?;

    if export.include_headers {
        out.write_record(CodeRecord::HEADERS)?;
    }
    for record in table.records() {
        out.serialize(record)?;
    }
    out.flush()?;

    logf!("Wrote {} records to {}", table.len(), path.display());
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
