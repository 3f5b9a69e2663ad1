// src/core/html.rs
//! Thin layer over `scraper`: a parsed [`Document`] hands out owned
//! [`TableRow`]s, so callers never hold element borrows and always check cell
//! counts explicitly before reading a cell.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

macro_rules! selector {
    ($css:literal) => {
        LazyLock::new(|| Selector::parse($css).expect(concat!("invalid selector: ", $css)))
    };
}

static TR: LazyLock<Selector> = selector!("tr");
static TD: LazyLock<Selector> = selector!("td");
static A_HREF: LazyLock<Selector> = selector!("a[href]");
static LISTING_TR: LazyLock<Selector> = selector!("table.table tbody tr");

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// Every `<tr>` in the document.
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.html.select(&TR).map(TableRow::from_element).collect()
    }

    /// Body rows of the code listing table (`table.table tbody tr`).
    pub fn listing_rows(&self) -> Vec<TableRow> {
        self.html.select(&LISTING_TR).map(TableRow::from_element).collect()
    }

    /// Raw `href` of every anchor that has one, in document order.
    pub fn link_targets(&self) -> Vec<String> {
        self.html
            .select(&A_HREF)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
struct Cell {
    fragments: Vec<String>,
    href: Option<String>,
}

/// The `<td>` cells of one row.
#[derive(Clone, Debug, Default)]
pub struct TableRow {
    cells: Vec<Cell>,
}

impl TableRow {
    fn from_element(tr: ElementRef<'_>) -> Self {
        let cells = tr
            .select(&TD)
            .map(|td| Cell {
                fragments: td.text().map(str::to_string).collect(),
                href: td
                    .select(&A_HREF)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(str::to_string),
            })
            .collect();
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All text of cell `i`, concatenated, outer whitespace trimmed.
    pub fn cell_text(&self, i: usize) -> Option<String> {
        self.cells.get(i).map(|c| c.fragments.concat().trim().to_string())
    }

    /// Each text fragment of cell `i` trimmed on its own, then glued together.
    pub fn cell_stripped_text(&self, i: usize) -> Option<String> {
        self.cells.get(i).map(|c| {
            c.fragments
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .collect::<String>()
        })
    }

    /// `href` of the first link inside cell `i`.
    pub fn cell_link(&self, i: usize) -> Option<&str> {
        self.cells.get(i)?.href.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_trims_outer_whitespace_only() {
        let doc = Document::parse("<table><tr><td>  A0021 \n</td><td> Ambulance <b>service</b>, outside </td></tr></table>");
        let rows = doc.table_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cell_text(0).as_deref(), Some("A0021"));
        assert_eq!(rows[0].cell_text(1).as_deref(), Some("Ambulance service, outside"));
        assert_eq!(rows[0].cell_text(2), None);
    }

    #[test]
    fn stripped_text_drops_inner_padding() {
        let doc = Document::parse("<table><tr><td> Short <span> Description </span></td><td>x</td></tr></table>");
        let row = &doc.table_rows()[0];
        assert_eq!(row.cell_stripped_text(0).as_deref(), Some("ShortDescription"));
    }

    #[test]
    fn cell_link_finds_nested_anchor() {
        let doc = Document::parse(r#"<table><tr><td><span><a href="/Codes/A/A0021">A0021</a></span></td><td>d</td></tr></table>"#);
        let row = &doc.table_rows()[0];
        assert_eq!(row.cell_link(0), Some("/Codes/A/A0021"));
        assert_eq!(row.cell_link(1), None);
        assert_eq!(row.cell_link(9), None);
    }

    #[test]
    fn anchor_without_href_is_not_a_link() {
        let doc = Document::parse(r#"<table><tr><td><a name="x">A0021</a></td></tr></table>"#);
        assert_eq!(doc.table_rows()[0].cell_link(0), None);
        assert!(doc.link_targets().is_empty());
    }

    #[test]
    fn listing_rows_only_come_from_table_body() {
        let doc = Document::parse(
            r#"
            <table class="table">
              <thead><tr><th>Code</th><th>Description</th></tr></thead>
              <tbody>
                <tr><td>A1</td><td>one</td></tr>
                <tr><td>A2</td><td>two</td></tr>
              </tbody>
            </table>
            <table><tbody><tr><td>elsewhere</td><td>no</td></tr></tbody></table>
            "#,
        );
        let rows = doc.listing_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cell_text(0).as_deref(), Some("A2"));
    }

    #[test]
    fn link_targets_keep_document_order() {
        let doc = Document::parse(r#"<a href="/Codes/B">B</a><p><a href=" /Codes/A ">A</a></p>"#);
        assert_eq!(doc.link_targets(), vec!["/Codes/B", " /Codes/A "]);
    }
}
