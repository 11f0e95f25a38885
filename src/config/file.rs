// src/config/file.rs
//
// Optional `dq_wiki.conf`: `key = value` lines, `#` comments.
//
//   data_dir = data
//   pages = pages.csv
//   boss.DQ1 = dq1_boss_multiunit.csv
//   item = DQI キラキラ | dq1_kirakira.csv | dq1_kirakira.html
//   main_hp = first | latest
//   zero_hp = nodata | valid
//   skip_rows_without_hp = 1
//   max_page_hits = 30
//   max_item_hits = 50
//
// The first `boss.*` / `item` line replaces the built-in list; later ones append.

use std::{fs, path::{Path, PathBuf}};

use super::options::{AppOptions, BossSource, ItemSource, MainHpPolicy, ZeroHp};

/// Load options from `path`, falling back to defaults when the file is missing or unreadable.
pub fn load(path: &Path) -> AppOptions {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return AppOptions::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            logf!("Config: loaded {}", path.display());
            parse(&text)
        }
        Err(e) => {
            logw!("Config: cannot read {} ({e}), using defaults", path.display());
            AppOptions::default()
        }
    }
}

pub fn parse(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    let mut bosses_replaced = false;
    let mut items_replaced = false;

    for (no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some(eq) = line.find('=') else {
            logw!("Config: line {} has no '=': {line}", no + 1);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        match key {
            "data_dir" => opts.sources.data_dir = PathBuf::from(val),
            "pages" => {
                opts.sources.pages = if val.is_empty() { None } else { Some(s!(val)) };
            }
            "main_hp" => match val.to_ascii_lowercase().as_str() {
                "first" => opts.index.main_hp = MainHpPolicy::FirstWins,
                "latest" => opts.index.main_hp = MainHpPolicy::LatestWins,
                other => logw!("Config: unknown main_hp '{other}'"),
            },
            "zero_hp" => match val.to_ascii_lowercase().as_str() {
                "nodata" => opts.index.zero_hp = ZeroHp::NoData,
                "valid" => opts.index.zero_hp = ZeroHp::Valid,
                other => logw!("Config: unknown zero_hp '{other}'"),
            },
            "skip_rows_without_hp" => opts.index.skip_rows_without_hp = parse_bool(val),
            "max_page_hits" => match val.parse() {
                Ok(n) => opts.search.max_page_hits = n,
                Err(_) => logw!("Config: bad max_page_hits '{val}'"),
            },
            "max_item_hits" => match val.parse() {
                Ok(n) => opts.search.max_item_hits = n,
                Err(_) => logw!("Config: bad max_item_hits '{val}'"),
            },
            "item" => {
                let parts: Vec<&str> = val.split('|').map(str::trim).collect();
                if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
                    logw!("Config: item needs 'label | location | link': {val}");
                    continue;
                }
                if !items_replaced {
                    opts.sources.items.clear();
                    items_replaced = true;
                }
                opts.sources.items.push(ItemSource {
                    label: s!(parts[0]),
                    location: s!(parts[1]),
                    link: s!(parts[2]),
                });
            }
            _ if key.starts_with("boss.") => {
                let game = key["boss.".len()..].trim();
                if game.is_empty() || val.is_empty() {
                    logw!("Config: boss entry needs a game tag and a location: {line}");
                    continue;
                }
                if !bosses_replaced {
                    opts.sources.bosses.clear();
                    bosses_replaced = true;
                }
                opts.sources.bosses.push(BossSource { game: s!(game), location: s!(val) });
            }
            _ => logd!("Config: ignoring unknown key '{key}'"),
        }
    }
    opts
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}
