// tests/config_file.rs
use std::path::{Path, PathBuf};

use dq_wiki::config::file;
use dq_wiki::config::options::{AppOptions, MainHpPolicy, ZeroHp};

#[test]
fn empty_text_is_defaults() {
    assert_eq!(file::parse(""), AppOptions::default());
    assert_eq!(file::parse("# only a comment\n\n"), AppOptions::default());
}

#[test]
fn missing_file_is_defaults() {
    let p = std::env::temp_dir().join("dq_wiki_no_such_config.conf");
    assert_eq!(file::load(&p), AppOptions::default());
}

#[test]
fn defaults() {
    let o = AppOptions::default();
    assert_eq!(o.sources.data_dir, Path::new("data"));
    assert_eq!(o.sources.bosses.len(), 2);
    assert_eq!(o.sources.items.len(), 13);
    assert_eq!(o.sources.pages.as_deref(), Some("pages.csv"));
    assert_eq!(o.index.main_hp, MainHpPolicy::FirstWins);
    assert_eq!(o.index.zero_hp, ZeroHp::NoData);
    assert!(!o.index.skip_rows_without_hp);
    assert_eq!((o.search.max_page_hits, o.search.max_item_hits), (30, 50));
}

#[test]
fn known_keys_override() {
    let o = file::parse(
        "data_dir = /srv/wiki\n\
         pages =\n\
         main_hp = latest\n\
         zero_hp = Valid\n\
         skip_rows_without_hp = yes\n\
         max_page_hits = 5\n\
         max_item_hits = abc\n",
    );
    assert_eq!(o.sources.data_dir, PathBuf::from("/srv/wiki"));
    assert_eq!(o.sources.pages, None);
    assert_eq!(o.index.main_hp, MainHpPolicy::LatestWins);
    assert_eq!(o.index.zero_hp, ZeroHp::Valid);
    assert!(o.index.skip_rows_without_hp);
    assert_eq!(o.search.max_page_hits, 5);
    assert_eq!(o.search.max_item_hits, 50); // bad value keeps the default
}

#[test]
fn source_lists_replace_then_append() {
    let o = file::parse(
        "boss.DQ3 = dq3.csv\n\
         boss.DQ4 = http://example.com/dq4.csv\n\
         item = Medals | medals.csv | medal.html\n\
         item = broken line\n",
    );
    let games: Vec<&str> = o.sources.bosses.iter().map(|b| b.game.as_str()).collect();
    assert_eq!(games, vec!["DQ3", "DQ4"]);
    assert_eq!(o.sources.bosses[1].location, "http://example.com/dq4.csv");
    assert_eq!(o.sources.items.len(), 1);
    assert_eq!(o.sources.items[0].link, "medal.html");
}

#[test]
fn unknown_keys_and_junk_ignored() {
    let o = file::parse("colour = blue\nno equals sign here\nmain_hp = sometimes\n");
    assert_eq!(o, AppOptions::default());
}
