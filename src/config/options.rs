// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to do when a listing page cannot be fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingFailure {
    /// Fail the whole run; nothing is exported.
    #[default]
    Abort,
    /// Keep what the category yielded so far and move on.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub pause: Duration,
    /// Restrict the run to these prefixes (case-insensitive). `None` = all.
    pub only: Option<Vec<String>>,
    pub on_listing_error: ListingFailure,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            only: None,
            on_listing_error: ListingFailure::Abort,
        }
    }
}

impl ScrapeOptions {
    pub fn base(&self) -> Result<Url, ScrapeError> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn index_url(&self) -> Result<Url, ScrapeError> {
        Ok(self.base()?.join(CODES_PATH)?)
    }

    pub fn wants(&self, prefix: &str) -> bool {
        match &self.only {
            None => true,
            Some(list) => list.iter().any(|p| p.eq_ignore_ascii_case(prefix)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. Unset → `hcpcs_codes.<ext>` in the working directory;
    /// a directory (existing, or written with a trailing separator) gets the
    /// default file name appended.
    pub fn out_path(&self) -> PathBuf {
        let default_name = join!(DEFAULT_FILE, ".", self.format.ext());
        match &self.out_path {
            None => PathBuf::from(default_name),
            Some(p) if crate::file::looks_like_dir_hint(p) || p.is_dir() => p.join(default_name),
            Some(p) => p.clone(),
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() {
            None
        } else {
            Some(PathBuf::from(crate::file::normalize_separators(s)))
        };
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.set_path(&path.as_ref().to_string_lossy());
        self
    }
}
