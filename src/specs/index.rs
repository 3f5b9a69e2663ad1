// src/specs/index.rs
//! Category index (`/Codes`).
//!
//! Two independent scans of the same page:
//! - every table row with at least three cells → `prefix → category name`
//! - every `/Codes/<c>` link → a [`CategoryEntry`] to harvest
//!
//! The scans are joined later by the orchestrator, which falls back to
//! `"Unknown"` for a linked prefix the table does not name.

use std::collections::HashSet;

use url::Url;

use crate::config::consts::CODES_PATH;
use crate::core::sanitize::{category_prefix, prefix_from_href};
use crate::core::{Document, Fetcher};
use crate::data::{CategoryEntry, PrefixCategoryMap};
use crate::error::ScrapeError;

pub struct CategoryIndex {
    pub categories: PrefixCategoryMap,
    pub entries: Vec<CategoryEntry>,
}

pub fn fetch(fetcher: &dyn Fetcher, base: &Url) -> Result<CategoryIndex, ScrapeError> {
    let index_url = base.join(CODES_PATH)?;
    let html_doc = fetcher.get(&index_url).map_err(ScrapeError::Index)?;
    let doc = Document::parse(&html_doc);

    let categories = parse_category_map(&doc);
    let entries = parse_category_links(&doc, base);
    logf!(
        "Index: {} named categories, {} category links",
        categories.len(),
        entries.len()
    );
    Ok(CategoryIndex { categories, entries })
}

pub fn parse_category_map(doc: &Document) -> PrefixCategoryMap {
    let mut map = PrefixCategoryMap::default();
    for row in doc.table_rows() {
        if row.len() < 3 {
            continue;
        }
        if let (Some(label), Some(name)) = (row.cell_text(0), row.cell_text(2)) {
            map.insert(category_prefix(&label), name);
        }
    }
    map
}

/// Category links in page order. A prefix linked more than once keeps its
/// first link only.
pub fn parse_category_links(doc: &Document, base: &Url) -> Vec<CategoryEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for href in doc.link_targets() {
        let Some(prefix) = prefix_from_href(&href, CODES_PATH) else { continue };
        if !seen.insert(s!(prefix)) {
            logd!("Index: repeated link for '{prefix}' ignored");
            continue;
        }
        match base.join(href.trim()) {
            Ok(listing_url) => out.push(CategoryEntry::new(prefix, listing_url)),
            Err(e) => logd!("Index: cannot resolve {href:?}: {e}"),
        }
    }
    out
}
