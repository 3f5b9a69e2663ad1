// tests/common/mod.rs
//
// In-memory site for driving the scraper without a network.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use hcpcs_scrape::config::options::ScrapeOptions;
use hcpcs_scrape::core::Fetcher;
use hcpcs_scrape::FetchError;
use url::Url;

pub const BASE: &str = "https://codes.test";

enum Reply {
    Page(String),
    Status(u16),
    Unreachable,
}

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Reply>,
    requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `path` (path + query, relative to BASE).
    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Reply::Page(html.into()));
        self
    }

    /// Answer `path` with an HTTP error status.
    pub fn failing(mut self, path: &str, status: u16) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Reply::Status(status));
        self
    }

    /// Fail `path` below HTTP, as a dropped connection would.
    pub fn unreachable(mut self, path: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Reply::Unreachable);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many requests went to URLs starting with BASE + `path_prefix`.
    pub fn hits(&self, path_prefix: &str) -> usize {
        let full = format!("{BASE}{path_prefix}");
        self.requests.borrow().iter().filter(|u| u.starts_with(&full)).count()
    }
}

impl Fetcher for FakeSite {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(Reply::Page(html)) => Ok(html.clone()),
            Some(Reply::Status(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            Some(Reply::Unreachable) => Err(FetchError::Transport { url: url.to_string(), source: transport_error() }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

/// A genuine `reqwest::Error`, made without touching the network.
fn transport_error() -> reqwest::Error {
    match reqwest::blocking::Client::new().get("not a url").build() {
        Ok(_) => panic!("bad URL accepted"),
        Err(e) => e,
    }
}

pub fn base() -> Url {
    Url::parse(BASE).unwrap()
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.to_string(),
        pause: Duration::ZERO,
        ..ScrapeOptions::default()
    }
}

/// Index page: a category table plus one link per prefix, in the given order.
pub fn index_html(categories: &[(&str, &str)], links: &[&str]) -> String {
    let mut html = String::from(
        "<html><body><table class=\"table\"><thead><tr><th>Group</th><th>Range</th><th>Category</th></tr></thead><tbody>",
    );
    for (prefix, name) in categories {
        html.push_str(&format!(
            "<tr><td>'{prefix}' Codes</td><td>{prefix}0000-{prefix}9999</td><td>{name}</td></tr>"
        ));
    }
    html.push_str("</tbody></table><ul>");
    for prefix in links {
        html.push_str(&format!("<li><a href=\"/Codes/{prefix}\">HCPCS '{prefix}' Codes</a></li>"));
    }
    html.push_str("</ul></body></html>");
    html
}

/// Listing page. Rows with a detail link render the code as an anchor.
pub fn listing_html(rows: &[(&str, &str, Option<&str>)]) -> String {
    let mut html = String::from(
        "<html><body><table class=\"table\"><thead><tr><th>Code</th><th>Description</th></tr></thead><tbody>",
    );
    for (code, desc, link) in rows {
        let code_cell = match link {
            Some(href) => format!("<a href=\"{href}\">{code}</a>"),
            None => code.to_string(),
        };
        html.push_str(&format!("<tr><td>{code_cell}</td><td>{desc}</td></tr>"));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

pub fn empty_listing() -> String {
    listing_html(&[])
}

pub fn detail_html(short: &str) -> String {
    format!(
        "<html><body><table>\
         <tr><td>HCPCS Code</td><td>X</td></tr>\
         <tr><td>Long Description</td><td>something long</td></tr>\
         <tr><td>Short Description</td><td>{short}</td></tr>\
         </table></body></html>"
    )
}
