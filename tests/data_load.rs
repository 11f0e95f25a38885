// tests/data_load.rs
//
// One load pass over the bundled data directory.
//
use std::path::PathBuf;

use dq_wiki::config::options::{AppOptions, ItemSource};
use dq_wiki::data::WikiData;
use dq_wiki::progress::Progress;

fn bundled() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.sources.data_dir = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
    opts
}

#[derive(Default)]
struct Recorder {
    finished: bool,
    logs: Vec<String>,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        assert!(self.finished, "summary arrives after the fetch");
        self.logs.push(msg.to_string());
    }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn summary_is_logged_after_the_fetch() {
    let mut rec = Recorder::default();
    let data = WikiData::load(&bundled(), Some(&mut rec));

    assert!(data.failures.is_empty(), "{:?}", data.failures);
    assert_eq!(rec.logs, vec![data.summary()]);
    assert_eq!(
        data.summary(),
        format!(
            "Ready: {} bosses, 13 tables, {} searchable rows",
            data.index.len(),
            data.search.page_count() + data.search.item_count()
        )
    );
}

#[test]
fn summary_counts_failed_sources() {
    let mut opts = bundled();
    opts.sources.items.push(ItemSource {
        label: "gone".into(),
        location: "no_such_table.csv".into(),
        link: "gone.html".into(),
    });

    let mut rec = Recorder::default();
    let data = WikiData::load(&opts, Some(&mut rec));
    assert_eq!(data.failures.len(), 1);
    assert!(rec.logs[0].ends_with("(1 failed; see .store/debug.log)"), "{}", rec.logs[0]);
}

#[test]
fn experience_table_is_bundled() {
    let data = WikiData::load(&bundled(), None);
    let table = data.table("DQI 主人公 経験値").expect("experience table");
    assert_eq!(table.link, "dq1_hero.html");
    assert_eq!(table.doc.header(), &["レベル".to_string(), "DQ1主人公".to_string()]);
    assert_eq!(table.doc.row_count(), 30);
    assert_eq!(table.doc.rows()[1], vec!["2".to_string(), "7".to_string()]);

    let hits = data.search.query("主人公");
    assert!(hits.pages.iter().any(|p| p.url == "dq1_hero.html"));
}
