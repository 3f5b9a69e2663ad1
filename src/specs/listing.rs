// src/specs/listing.rs
//! One page of a category's code listing (`/Codes/<prefix>?page=<n>`).
//!
//! Past the last page the site serves the same layout with an empty table
//! body, so `row_count == 0` is the normal end-of-pagination signal.
//!
//! The HTML parser inserts the implied `<tbody>` into a table written without
//! one, so rows of such a table match `table.table tbody tr` too.

use url::Url;

use crate::config::consts::PAGE_PARAM;
use crate::core::Document;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub code: String,
    pub long_description: String,
    /// Link from the code cell to the code's detail page, as written in the HTML.
    pub detail_href: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Every body row matched, including ones too short to use.
    pub row_count: usize,
    pub rows: Vec<ListingRow>,
}

pub fn page_url(listing_url: &Url, page: u32) -> Url {
    let mut url = listing_url.clone();
    url.query_pairs_mut().append_pair(PAGE_PARAM, &page.to_string());
    url
}

pub fn parse_page(doc: &Document) -> ListingPage {
    let matched = doc.listing_rows();
    let row_count = matched.len();

    let rows = matched
        .iter()
        .filter(|row| row.len() >= 2)
        .filter_map(|row| {
            Some(ListingRow {
                code: row.cell_text(0)?,
                long_description: row.cell_text(1)?,
                detail_href: row.cell_link(0).map(str::to_string),
            })
        })
        .collect();

    ListingPage { row_count, rows }
}
