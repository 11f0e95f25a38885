// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod bosses;
pub mod hp_tool;
pub mod search;
pub mod tables;

/// One tab. Pages hold no state of their own: everything they edit lives in
/// `App` (tracker, loaded data) or `AppState::gui` (text boxes, selections).
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the tab body below the tab strip.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}

/// Game picker shared by the boss tabs. `None` means every game.
pub(crate) fn game_combo(ui: &mut egui::Ui, id: &str, games: &[String], cur: &mut Option<String>, allow_all: bool) {
    let shown = cur.clone().unwrap_or_else(|| s!("All games"));
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .show_ui(ui, |ui| {
            if allow_all {
                ui.selectable_value(cur, None, "All games");
            }
            for g in games {
                ui.selectable_value(cur, Some(g.clone()), g.as_str());
            }
        });
}
