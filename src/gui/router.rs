// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::hp_tool::PAGE,
    &pages::bosses::PAGE,
    &pages::search::PAGE,
    &pages::tables::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Index of a tab by title, for pages that jump to another tab.
pub fn index_of(title: &str) -> Option<usize> {
    PAGES.iter().position(|p| p.title() == title)
}
