// src/specs/detail.rs
//! A single code's detail page. The page is a two-column label/value table;
//! the row labelled "Short Description" is the only one read.

use url::Url;

use crate::core::{Document, Fetcher};
use crate::error::FetchError;

/// Value of the first two-cell row whose label mentions "short description".
pub fn parse_short_description(doc: &Document) -> Option<String> {
    doc.table_rows()
        .into_iter()
        .filter(|row| row.len() == 2)
        .find(|row| {
            row.cell_stripped_text(0)
                .is_some_and(|label| label.to_lowercase().contains("short description"))
        })
        .and_then(|row| row.cell_stripped_text(1))
}

/// Fetch and read a detail page. `Ok(None)` means the page has no such row.
pub fn try_fetch(fetcher: &dyn Fetcher, detail_url: &Url) -> Result<Option<String>, FetchError> {
    let html_doc = fetcher.get(detail_url)?;
    Ok(parse_short_description(&Document::parse(&html_doc)))
}

/// Best-effort short description: any failure is logged and becomes `""`.
pub fn short_description(fetcher: &dyn Fetcher, detail_url: &Url) -> String {
    match try_fetch(fetcher, detail_url) {
        Ok(found) => found.unwrap_or_default(),
        Err(e) => {
            logw!("Error fetching short description from {}: {e}", e.url());
            s!()
        }
    }
}
