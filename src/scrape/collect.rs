// src/scrape/collect.rs
use crate::{
    config::options::{ListingFailure, ScrapeOptions},
    core::Fetcher,
    data::{CategoryEntry, ResultTable},
    error::ScrapeError,
    progress::{NullProgress, Progress},
    specs::index,
};

use super::harvest::{Harvester, StopReason};

/// Read the index once, then harvest every wanted category in page order.
/// Strictly sequential; the returned table is in discovery order.
pub fn collect_codes(
    fetcher: &dyn Fetcher,
    scrape: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ResultTable, ScrapeError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let base = scrape.base()?;
    let idx = index::fetch(fetcher, &base)?;

    let entries: Vec<&CategoryEntry> = idx
        .entries
        .iter()
        .filter(|e| scrape.wants(&e.prefix))
        .collect();
    progress.begin(entries.len());

    let harvester = Harvester::new(fetcher, &base, scrape.pause);
    let mut table = ResultTable::default();

    for entry in entries {
        let category = idx.categories.resolve(&entry.prefix);
        let outcome = harvester.harvest(category, &entry.group, &entry.listing_url, progress);

        if let StopReason::FetchFailed { page, error } = outcome.stop {
            match scrape.on_listing_error {
                ListingFailure::Abort => {
                    loge!("{}: listing page {page} failed: {error}", entry.group);
                    return Err(ScrapeError::Listing {
                        prefix: entry.prefix.clone(),
                        page,
                        source: error,
                    });
                }
                ListingFailure::Skip => {
                    logw!(
                        "{}: listing page {page} failed, keeping {} codes: {error}",
                        entry.group,
                        outcome.records.len()
                    );
                    progress.log(&format!(" Skipping rest of {}: {error}", entry.listing_url));
                }
            }
        }

        progress.category_done(&entry.prefix, entry.listing_url.as_str(), outcome.records.len());
        table.extend(outcome.records);
    }

    progress.finish(table.len());
    Ok(table)
}

/// Categories the index links to, with their resolved names. No listing
/// pages are fetched.
pub fn list_categories(
    fetcher: &dyn Fetcher,
    scrape: &ScrapeOptions,
) -> Result<Vec<(CategoryEntry, String)>, ScrapeError> {
    let base = scrape.base()?;
    let idx = index::fetch(fetcher, &base)?;
    let names = idx.categories;

    Ok(idx
        .entries
        .into_iter()
        .filter(|e| scrape.wants(&e.prefix))
        .map(|e| {
            let name = s!(names.resolve(&e.prefix));
            (e, name)
        })
        .collect())
}
