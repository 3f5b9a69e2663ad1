// src/cli.rs
use std::collections::HashSet;
use std::time::Duration;

use url::Url;

use crate::config::options::{AppOptions, ExportFormat, ListingFailure};
use crate::core::HttpClient;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::{runner, scrape};

const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub options: AppOptions,
    pub list_categories: bool,
    pub verbosity: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Params),
    Help,
}

/// Entry point for the binary: parse, then run.
pub fn main<I, S>(args: I) -> Result<(), ScrapeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match parse_args(args)? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Run(params) => run(params),
    }
}

pub fn run(params: Params) -> Result<(), ScrapeError> {
    crate::log::init(params.verbosity);
    let client = HttpClient::new()?;

    if params.list_categories {
        for (entry, name) in scrape::list_categories(&client, &params.options.scrape)? {
            println!("{},{},{}", entry.prefix, name, entry.listing_url);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params.options, &client, Some(&mut progress))?;
    println!("\nFinished! Total codes scraped: {}", summary.records);
    println!("Saved to: {}", summary.out_path.display());
    Ok(())
}

pub fn parse_args<I, S>(args: I) -> Result<Command, ScrapeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = value(&mut args, &a)?;
                params.options.export.set_path(&v);
            }
            "--format" => {
                let v = value(&mut args, &a)?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {other}"))),
                };
            }
            "--no-headers" => params.options.export.include_headers = false,
            "--base-url" => {
                let v = value(&mut args, &a)?;
                Url::parse(&v)?;
                params.options.scrape.base_url = v;
            }
            "--pause-ms" => {
                let v = value(&mut args, &a)?;
                let ms: u64 = v
                    .parse()
                    .map_err(|e| usage(format!("Invalid value for --pause-ms: {v:?} ({e})")))?;
                params.options.scrape.pause = Duration::from_millis(ms);
            }
            "--only" => {
                let v = value(&mut args, &a)?;
                params.options.scrape.only = Some(parse_prefix_list(&v)?);
            }
            "--on-listing-error" => {
                let v = value(&mut args, &a)?;
                params.options.scrape.on_listing_error = match v.to_ascii_lowercase().as_str() {
                    "abort" => ListingFailure::Abort,
                    "skip" => ListingFailure::Skip,
                    other => return Err(usage(format!("Unknown listing error policy: {other}"))),
                };
            }
            "--list-categories" => params.list_categories = true,
            "--verbose" => params.verbosity = params.verbosity.saturating_add(1),
            "-h" | "--help" => return Ok(Command::Help),
            v if is_verbose_run(v) => {
                let n = u8::try_from(v.len() - 1).unwrap_or(u8::MAX);
                params.verbosity = params.verbosity.saturating_add(n);
            }
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Run(params))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ScrapeError> {
    args.next().ok_or_else(|| usage(format!("Missing value for {flag}")))
}

fn usage(msg: String) -> ScrapeError {
    ScrapeError::Usage(msg)
}

/// `-v`, `-vv`, `-vvv`, ...
fn is_verbose_run(a: &str) -> bool {
    a.len() > 1 && a.starts_with('-') && a[1..].bytes().all(|b| b == b'v')
}

/// Comma-separated prefixes, upper-cased, duplicates dropped (first wins).
fn parse_prefix_list(s: &str) -> Result<Vec<String>, ScrapeError> {
    let mut seen = HashSet::new();
    let out: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_ascii_uppercase)
        .filter(|p| seen.insert(p.clone()))
        .collect();
    if out.is_empty() {
        return Err(usage(s!("--only needs at least one prefix")));
    }
    Ok(out)
}

/// Prints the run's narration to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, categories: usize) {
        println!("Found {categories} code categories");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        println!("Page {page}: Found {rows} rows");
    }
    fn category_done(&mut self, _prefix: &str, url: &str, codes: usize) {
        println!(" Scraped {codes} codes from {url}");
    }
}
