// src/data.rs
//
// Everything the frontends show, built in one load pass:
//
// - BossSheet: one game's sheet, grouped (all bosses, for list/detail views)
// - EncounterIndex: the trackable bosses across games (HP tool)
// - ItemTable: raw item tables (Tables tab, `table` command)
// - SearchIndex: page catalogue + every item row (site search)
//
// Read-only once built; reloading builds a fresh WikiData.

use crate::config::consts::{LOG_DIR, LOG_FILE};
use crate::config::options::AppOptions;
use crate::csv::CsvDocument;
use crate::encounter::{self, EncounterIndex, EncounterMap};
use crate::fetch::{self, Loaded, Location, Request};
use crate::progress::Progress;
use crate::search::SearchIndex;

#[derive(Clone, Debug)]
pub struct BossSheet {
    pub game: String,
    pub doc: CsvDocument,
    /// Every boss group, including those without HP data.
    pub grouped: EncounterMap,
}

#[derive(Clone, Debug)]
pub struct ItemTable {
    pub label: String,
    pub link: String,
    pub location: Location,
    pub doc: CsvDocument,
}

#[derive(Clone, Debug, Default)]
pub struct WikiData {
    pub index: EncounterIndex,
    pub sheets: Vec<BossSheet>,
    pub tables: Vec<ItemTable>,
    pub search: SearchIndex,
    /// `"label: reason"` for each source that failed to load.
    pub failures: Vec<String>,
}

/// Requests for every configured source: bosses, then items, then the page catalogue.
pub fn requests(opts: &AppOptions) -> Vec<Request> {
    let src = &opts.sources;
    let base = src.data_dir.as_path();

    let mut out: Vec<Request> = src
        .bosses
        .iter()
        .map(|b| Request::new(b.game.as_str(), Location::resolve(base, &b.location)))
        .collect();
    out.extend(
        src.items
            .iter()
            .map(|i| Request::new(i.label.as_str(), Location::resolve(base, &i.location))),
    );
    if let Some(pages) = &src.pages {
        out.push(Request::new("pages", Location::resolve(base, pages)));
    }
    out
}

impl WikiData {
    /// Fetch every configured source and build the indexes.
    /// The progress sink sees the fetch, then one `log` line summarizing the indexes.
    pub fn load(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Self {
        let reqs = requests(opts);
        logf!("Data: loading {} sources from {}", reqs.len(), opts.sources.data_dir.display());
        let loaded = match progress.as_mut() {
            Some(p) => fetch::load_all(&reqs, Some(&mut **p as &mut dyn Progress)),
            None => fetch::load_all(&reqs, None),
        };
        let data = Self::from_loaded(opts, loaded);
        logf!(
            "Data: bosses={} tables={} pages={} items={} failures={}",
            data.index.len(),
            data.tables.len(),
            data.search.page_count(),
            data.search.item_count(),
            data.failures.len()
        );
        if let Some(p) = progress {
            p.log(&data.summary());
        }
        data
    }

    /// One-line status: `Ready: 11 bosses, 13 tables, 412 searchable rows`,
    /// plus the failed-source count when there is one.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Ready: {} bosses, {} tables, {} searchable rows",
            self.index.len(),
            self.tables.len(),
            self.search.page_count() + self.search.item_count()
        );
        if !self.failures.is_empty() {
            line.push_str(&format!(" ({} failed; see {LOG_DIR}/{LOG_FILE})", self.failures.len()));
        }
        line
    }

    /// Assemble from loaded sources laid out as `requests` produces them.
    pub fn from_loaded(opts: &AppOptions, loaded: Vec<Loaded>) -> Self {
        let n_bosses = opts.sources.bosses.len();
        let n_items = opts.sources.items.len();
        let mut data = WikiData {
            search: SearchIndex::new(opts.search),
            ..Self::default()
        };

        for (i, l) in loaded.into_iter().enumerate() {
            if let Some(err) = &l.error {
                data.failures.push(format!("{}: {err}", l.label));
            }

            if i < n_bosses {
                let game = l.label;
                data.index.push(encounter::build(&l.doc, &game, &opts.index));
                let grouped = encounter::group(&l.doc, &game, &opts.index);
                data.sheets.push(BossSheet { game, doc: l.doc, grouped });
            } else if i < n_bosses + n_items {
                let link = opts.sources.items[i - n_bosses].link.clone();
                data.search.add_source(&l.doc, &l.label, &link);
                data.tables.push(ItemTable { label: l.label, link, location: l.location, doc: l.doc });
            } else {
                data.search.add_pages(&l.doc);
            }
        }
        data
    }

    pub fn sheet(&self, game: &str) -> Option<&BossSheet> {
        self.sheets.iter().find(|s| s.game == game)
    }

    pub fn table(&self, label: &str) -> Option<&ItemTable> {
        self.tables.iter().find(|t| t.label == label)
    }
}
