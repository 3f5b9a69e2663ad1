// src/data.rs
//
// Value types of a run. Everything is built once and only appended to.

use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use crate::config::consts::UNKNOWN_CATEGORY;
use crate::core::sanitize::group_label;

/// One category as linked from the index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    pub group: String,
    pub prefix: String,
    pub listing_url: Url,
}

impl CategoryEntry {
    pub fn new(prefix: impl Into<String>, listing_url: Url) -> Self {
        let prefix = prefix.into();
        Self { group: group_label(&prefix), prefix, listing_url }
    }
}

/// Prefix → human-readable category name, from the index table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixCategoryMap {
    names: HashMap<String, String>,
}

impl PrefixCategoryMap {
    pub fn insert(&mut self, prefix: String, name: String) {
        self.names.insert(prefix, name);
    }

    /// Category name for `prefix`, or `"Unknown"`.
    pub fn resolve(&self, prefix: &str) -> &str {
        self.names.get(prefix).map(String::as_str).unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeRecord {
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Long Description")]
    pub long_description: String,
    #[serde(rename = "Short Description")]
    pub short_description: String,
}

impl CodeRecord {
    pub const HEADERS: [&'static str; 5] =
        ["Group", "Category", "Code", "Long Description", "Short Description"];

    /// An empty `short_description` falls back to the long one.
    pub fn new(
        group: &str,
        category: &str,
        code: String,
        long_description: String,
        short_description: String,
    ) -> Self {
        let short_description = if short_description.is_empty() {
            long_description.clone()
        } else {
            short_description
        };
        Self {
            group: s!(group),
            category: s!(category),
            code,
            long_description,
            short_description,
        }
    }
}

/// All records of a run in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<CodeRecord>,
}

impl ResultTable {
    pub fn extend(&mut self, records: Vec<CodeRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[CodeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_prefix_resolves_to_sentinel() {
        let mut map = PrefixCategoryMap::default();
        map.insert(s!("A"), s!("Transportation Services"));
        assert_eq!(map.resolve("A"), "Transportation Services");
        assert_eq!(map.resolve("Z"), "Unknown");
    }

    #[test]
    fn short_description_falls_back_to_long() {
        let r = CodeRecord::new("g", "c", s!("A1"), s!("long"), s!());
        assert_eq!(r.short_description, "long");
        let r = CodeRecord::new("g", "c", s!("A1"), s!("long"), s!("short"));
        assert_eq!(r.short_description, "short");
    }

    #[test]
    fn entry_synthesizes_group() {
        let url = Url::parse("https://example.test/Codes/E").unwrap();
        let e = CategoryEntry::new("E", url);
        assert_eq!(e.group, "HCPCS 'E' Codes");
        assert_eq!(e.prefix, "E");
    }

    #[test]
    fn table_keeps_insertion_order() {
        let mut t = ResultTable::default();
        t.extend(vec![CodeRecord::new("g", "c", s!("B"), s!("b"), s!())]);
        t.extend(vec![CodeRecord::new("g", "c", s!("A"), s!("a"), s!())]);
        let codes: Vec<&str> = t.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["B", "A"]);
    }
}
