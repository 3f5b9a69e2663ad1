// src/core/net.rs
//! Page fetching. Everything above this module talks to a [`Fetcher`], so a
//! run can be driven by the real site or by canned pages in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{FetchError, ScrapeError};

/// GET a page and return its body text. Any non-2xx status is an error.
pub trait Fetcher {
    fn get(&self, url: &Url) -> Result<String, FetchError>;
}

/// Blocking HTTP client shared by every request of a run (one connection pool).
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpClient {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text()
            .map_err(|source| FetchError::Body { url: url.to_string(), source })
    }
}
