// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::Fetcher,
    error::ScrapeError,
    file,
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub records: usize,
}

/// Harvest everything, then write the export file once at the end.
/// A failure before export leaves no file behind.
pub fn run(
    options: &AppOptions,
    fetcher: &dyn Fetcher,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let table = scrape::collect_codes(fetcher, &options.scrape, progress)?;
    let out_path = file::write_export(&options.export, &table)?;
    Ok(RunSummary { out_path, records: table.len() })
}
