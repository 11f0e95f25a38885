// src/config/consts.rs

// Boss sheet headers (exact match, as exported by the wiki spreadsheets)
pub const COL_BOSS: &str = "ボス戦名";
pub const COL_UNIT: &str = "個体名";
pub const COL_COUNT: &str = "体数";
pub const COL_HP: &str = "HP";
pub const COL_PLACE: &str = "出現場所";
pub const COL_EXP: &str = "経験値";
pub const COL_GOLD: &str = "ゴールド";
pub const COL_NOTE: &str = "特徴メモ";
pub const COL_PATTERN: &str = "行動パターン";
pub const COL_SOURCE: &str = "参考元";

// Page catalogue headers
pub const COL_PAGE_TITLE: &str = "title";
pub const COL_PAGE_URL: &str = "url";
pub const COL_PAGE_KEYWORDS: &str = "keywords";

/// Sheets whose row 0 is a caption and row 1 the real header:
/// (first cell of row 0, first cell of row 1).
pub const SECONDARY_HEADERS: &[(&str, &str)] = &[("海底", "番号")];

// Data
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CONFIG_FILE: &str = "dq_wiki.conf";
pub const DEFAULT_PAGES_FILE: &str = "pages.csv";

// Search
pub const MAX_PAGE_HITS: usize = 30;
pub const MAX_ITEM_HITS: usize = 50;

// Local debug log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "dq_wiki/0.3";

// Concurrency
pub const WORKERS: usize = 4;

// Damage tracker messages
pub const MSG_HALF_HP: &str = "HP has dropped past half. Expect a behavior change.";
pub const MSG_SELECT_FIRST: &str = "Select a boss first.";
pub const MSG_BAD_DAMAGE: &str = "Enter a positive damage amount.";
