// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.hcpcsdata.com";
pub const CODES_PATH: &str = "/Codes";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const PAGE_PARAM: &str = "page";
pub const REQUEST_PAUSE_MS: u64 = 200; // be polite
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// Export
pub const DEFAULT_FILE: &str = "hcpcs_codes";
