// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Boss HP tab: game filter for the boss picker (None = all games)
    pub hp_game: Option<String>,
    /// Boss HP tab: damage text box
    pub damage_text: String,

    /// Bosses tab: which sheet and which boss is open in the detail pane
    pub list_game: Option<String>,
    pub detail_boss: Option<String>,

    /// Search tab query
    pub search_text: String,

    /// Tables tab: selected item table and its filter box
    pub table_index: usize,
    pub table_filter: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            hp_game: None,
            damage_text: s!(),
            list_game: None,
            detail_boss: None,
            search_text: s!(),
            table_index: 0,
            table_filter: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
