// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub index: IndexOptions,
    pub search: SearchOptions,
}

/* ---------------- Encounter index ---------------- */

/// What happens when several rows of one boss group name the boss itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MainHpPolicy {
    /// First matching row is the main body; later ones are ignored.
    #[default]
    FirstWins,
    /// First matching row is the main body, but each later matching row
    /// with a parseable HP overwrites its HP.
    LatestWins,
}

/// How an HP cell that parses to 0 is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZeroHp {
    /// 0 means "no HP data" and reads as absent.
    #[default]
    NoData,
    /// 0 is kept as a real value (display only; a 0-HP main is never published).
    Valid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IndexOptions {
    pub main_hp: MainHpPolicy,
    pub zero_hp: ZeroHp,
    /// Drop rows without a positive HP before grouping.
    pub skip_rows_without_hp: bool,
}

/* ---------------- Search ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_page_hits: usize,
    pub max_item_hits: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_page_hits: MAX_PAGE_HITS, max_item_hits: MAX_ITEM_HITS }
    }
}

/* ---------------- Sources ---------------- */

/// One boss sheet, tagged with the game it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossSource {
    pub game: String,
    pub location: String,
}

/// One item table feeding the site search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSource {
    pub label: String,
    pub location: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Base for relative locations.
    pub data_dir: PathBuf,
    pub bosses: Vec<BossSource>,
    pub items: Vec<ItemSource>,
    /// Page catalogue for the site search (`title,url,keywords`).
    pub pages: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bosses: vec![
                boss("DQ1", "dq1_boss_multiunit.csv"),
                boss("DQ2", "dq2_boss_multiunit.csv"),
            ],
            items: default_items(),
            pages: Some(s!(DEFAULT_PAGES_FILE)),
        }
    }
}

fn boss(game: &str, location: &str) -> BossSource {
    BossSource { game: s!(game), location: s!(location) }
}

fn item(label: &str, location: &str, link: &str) -> ItemSource {
    ItemSource { label: s!(label), location: s!(location), link: s!(link) }
}

fn default_items() -> Vec<ItemSource> {
    vec![
        item("DQI キラキラ", "dq1_kirakira.csv", "dq1_kirakira.html"),
        item("DQI ひみつの場所", "dq1_secret_place.csv", "dq1_secret_place.html"),
        item("DQI 町・ダンジョン内アイテム", "dq1_room_items.csv", "dq1_room_items.html"),
        item("DQI メダル入手場所", "dq1_medal.csv", "dq1_medal.html"),
        item("DQI メダル景品", "dq1_prize.csv", "dq1_medal.html"),
        item("DQI モンスタードロップ", "dq1_monsters.csv", "dq1_db.html"),
        item("DQI 主人公 経験値", "dq1_experience.csv", "dq1_hero.html"),
        item("DQII キラキラ", "dq2_kirakira.csv", "dq2_kirakira.html"),
        item("DQII ひみつの場所", "dq2_secret_place.csv", "dq2_secret_place.html"),
        item("DQII 町・ダンジョン内アイテム", "dq2_room_items.csv", "dq2_room_items.html"),
        item("DQII メダル入手場所", "dq2_medal.csv", "dq2_medal.html"),
        item("DQII メダル景品", "dq2_prize.csv", "dq2_medal.html"),
        item("DQII モンスタードロップ", "dq2_monsters.csv", "dq2_db.html"),
    ]
}
