// src/specs/mod.rs
//! # Page specs
//!
//! One module per page of the site. Each spec knows *where the data lives in
//! the HTML* and how to read it; none of them decides when to fetch, how to
//! paginate, or what to do with a failure. That lives in `scrape`.
//!
//! ## Pages
//! - `index` – `/Codes`: the prefix → category table and the per-prefix links.
//! - `listing` – `/Codes/<prefix>?page=<n>`: one page of codes.
//! - `detail` – a single code's page, read for its short description.
//!
//! ## Conventions
//! - Parsers take a [`Document`](crate::core::Document) and never touch the
//!   network, so they are tested against inline HTML fixtures.
//! - Rows with too few cells are skipped, not reported.
//! - Cell text is trimmed; nothing else is normalized.
pub mod detail;
pub mod index;
pub mod listing;
