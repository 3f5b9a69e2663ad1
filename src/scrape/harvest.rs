// src/scrape/harvest.rs
//! Listing harvester: walks one category's pages until the site runs out.
//!
//! Two ways out of the loop, both required:
//! - a page with no body rows (the site's normal end-of-list page)
//! - a page whose rows are all codes already seen (the site repeating itself)
//!
//! An HTTP error status on a listing page counts as an empty page. A transport
//! or body failure also ends the loop; the caller decides what that means for
//! the run.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use url::Url;

use crate::core::{Document, Fetcher};
use crate::data::CodeRecord;
use crate::error::FetchError;
use crate::progress::Progress;
use crate::specs::{detail, listing};

#[derive(Debug)]
pub enum StopReason {
    /// The page had no rows at all, or came back with an HTTP error status.
    EmptyPage,
    /// Every row on the page was a code already harvested.
    NoNewCodes,
    /// The listing page could not be fetched or read (transport/body failure).
    FetchFailed { page: u32, error: FetchError },
}

#[derive(Debug)]
pub struct HarvestOutcome {
    pub records: Vec<CodeRecord>,
    /// Listing pages requested, including the one that ended the loop.
    pub pages_fetched: u32,
    pub stop: StopReason,
}

pub struct Harvester<'a> {
    fetcher: &'a dyn Fetcher,
    base: &'a Url,
    pause: Duration,
}

impl<'a> Harvester<'a> {
    /// `base` resolves the detail links found in code cells.
    pub fn new(fetcher: &'a dyn Fetcher, base: &'a Url, pause: Duration) -> Self {
        Self { fetcher, base, pause }
    }

    pub fn harvest(
        &self,
        category: &str,
        group: &str,
        listing_url: &Url,
        progress: &mut dyn Progress,
    ) -> HarvestOutcome {
        let mut seen_codes: HashSet<String> = HashSet::new();
        let mut records: Vec<CodeRecord> = Vec::new();
        let mut page: u32 = 1;

        let stop = loop {
            let url = listing::page_url(listing_url, page);
            progress.log(&format!("Scraping {url}..."));

            let html_doc = match self.fetcher.get(&url) {
                Ok(body) => body,
                // The site answered, just not with a listing: same as running off the end.
                Err(FetchError::Status { status, .. }) => {
                    logw!("{group}: HTTP {status} on page {page}, ending pagination");
                    progress.page_done(page, 0);
                    break StopReason::EmptyPage;
                }
                Err(error) => break StopReason::FetchFailed { page, error },
            };
            let parsed = listing::parse_page(&Document::parse(&html_doc));
            progress.page_done(page, parsed.row_count);

            if parsed.row_count == 0 {
                break StopReason::EmptyPage;
            }

            let mut new_codes = 0usize;
            for row in parsed.rows {
                if !seen_codes.insert(row.code.clone()) {
                    logd!("{group}: page {page} repeats {}", row.code);
                    continue;
                }
                let short = match row.detail_href.as_deref() {
                    Some(href) => self.short_description(href),
                    None => s!(),
                };
                records.push(CodeRecord::new(group, category, row.code, row.long_description, short));
                new_codes += 1;
            }

            if new_codes == 0 {
                progress.log(&format!(" No new codes on page {page}. Ending pagination."));
                break StopReason::NoNewCodes;
            }

            page += 1;
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        };

        logf!("{group}: {} codes from {} page(s), stopped on {stop:?}", records.len(), page);
        HarvestOutcome { records, pages_fetched: page, stop }
    }

    fn short_description(&self, href: &str) -> String {
        match self.base.join(href.trim()) {
            Ok(detail_url) => detail::short_description(self.fetcher, &detail_url),
            Err(e) => {
                logd!("Cannot resolve detail link {href:?}: {e}");
                s!()
            }
        }
    }
}
