// src/search.rs
//
// Site search: a static page catalogue plus every row of the item tables,
// matched by case-insensitive substring.

use crate::config::consts::{COL_PAGE_KEYWORDS, COL_PAGE_TITLE, COL_PAGE_URL};
use crate::config::options::SearchOptions;
use crate::core::sanitize::normalize_ws;
use crate::csv::CsvDocument;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub title: String,
    pub url: String,
    pub keywords: String,
    haystack: String,
}

impl PageEntry {
    pub fn new(title: &str, url: &str, keywords: &str) -> Self {
        let haystack = join!(title, " ", keywords).to_lowercase();
        Self { title: s!(title), url: s!(url), keywords: s!(keywords), haystack }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemEntry {
    pub label: String,
    /// Row cells joined with `" / "`, whitespace collapsed.
    pub row_text: String,
    pub link: String,
    haystack: String,
}

impl ItemEntry {
    pub fn from_row(row: &[String], label: &str, link: &str) -> Self {
        Self {
            label: s!(label),
            row_text: normalize_ws(&row.join(" / ")),
            link: s!(link),
            haystack: row.join(" ").to_lowercase(),
        }
    }

    /// `"label：row text"`, as listed in the results.
    pub fn display(&self) -> String {
        join!(&self.label, "：", &self.row_text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub pages: Vec<PageEntry>,
    pub items: Vec<ItemEntry>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    limits: SearchOptions,
    pages: Vec<PageEntry>,
    items: Vec<ItemEntry>,
}

impl SearchIndex {
    pub fn new(limits: SearchOptions) -> Self {
        Self { limits, pages: Vec::new(), items: Vec::new() }
    }

    pub fn page_count(&self) -> usize { self.pages.len() }
    pub fn item_count(&self) -> usize { self.items.len() }

    pub fn add_page(&mut self, page: PageEntry) {
        self.pages.push(page);
    }

    /// Page catalogue sheet with `title`, `url`, `keywords` columns.
    /// Rows without a title are skipped.
    pub fn add_pages(&mut self, doc: &CsvDocument) {
        let title = doc.column(COL_PAGE_TITLE);
        let url = doc.column(COL_PAGE_URL);
        let keywords = doc.column(COL_PAGE_KEYWORDS);
        for row in doc.rows() {
            let Some(t) = title.text(row) else { continue };
            self.pages.push(PageEntry::new(
                t,
                url.text(row).unwrap_or(""),
                keywords.text(row).unwrap_or(""),
            ));
        }
    }

    /// Every row of an item table becomes one searchable entry.
    pub fn add_source(&mut self, doc: &CsvDocument, label: &str, link: &str) {
        let before = self.items.len();
        self.items
            .extend(doc.rows().iter().map(|row| ItemEntry::from_row(row, label, link)));
        logd!("Search: {label} +{} rows", self.items.len() - before);
    }

    pub fn query(&self, q: &str) -> SearchResults {
        let needle = q.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        SearchResults {
            pages: self
                .pages
                .iter()
                .filter(|p| p.haystack.contains(&needle))
                .take(self.limits.max_page_hits)
                .cloned()
                .collect(),
            items: self
                .items
                .iter()
                .filter(|i| i.haystack.contains(&needle))
                .take(self.limits.max_item_hits)
                .cloned()
                .collect(),
        }
    }
}

/// Indices of rows containing `q` (case-insensitive) in any cell.
/// A blank query keeps every row.
pub fn filter_rows(doc: &CsvDocument, q: &str) -> Vec<usize> {
    let needle = q.trim().to_lowercase();
    doc.rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            needle.is_empty() || row.iter().any(|c| c.to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}
