// src/scrape/mod.rs
mod collect;
mod harvest;

pub use collect::{collect_codes, list_categories};
pub use harvest::{HarvestOutcome, Harvester, StopReason};
