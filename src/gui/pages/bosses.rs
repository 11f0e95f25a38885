// src/gui/pages/bosses.rs
//
// Boss list per game with a detail pane: place, rewards, behavior pattern
// and the helper units.

use eframe::egui::{self, RichText};

use crate::config::consts::{COL_EXP, COL_GOLD, COL_HP, COL_NOTE, COL_PATTERN, COL_PLACE, COL_SOURCE};
use crate::core::sanitize::pattern_lines;
use crate::encounter::{self, BossEncounter, BossSummary};
use crate::gui::{app::App, components::data_table, router};

use super::{game_combo, Page};

pub struct BossesPage;
pub static PAGE: BossesPage = BossesPage;

impl Page for BossesPage {
    fn title(&self) -> &'static str { "Bosses" }

    fn on_enter(&self, app: &mut App) {
        if app.state.gui.list_game.is_none() {
            app.state.gui.list_game = app.data.sheets.first().map(|s| s.game.clone());
        }
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.data.sheets.is_empty() {
            ui.label(if app.running { "Loading…" } else { "No boss sheets loaded." });
            return;
        }
        self.on_enter(app);

        let games: Vec<String> = app.data.sheets.iter().map(|s| s.game.clone()).collect();
        game_combo(ui, "list_game", &games, &mut app.state.gui.list_game, false);
        ui.separator();

        let Some(sheet) = app.state.gui.list_game.as_deref().and_then(|g| app.data.sheet(g)) else {
            return;
        };
        let summaries = encounter::summaries(&sheet.grouped);
        let header: Vec<String> = BossSummary::HEADERS.iter().map(|h| s!(*h)).collect();
        let rows: Vec<Vec<String>> = summaries.iter().map(BossSummary::cells).collect();
        let all: Vec<usize> = (0..rows.len()).collect();
        let selected = app
            .state
            .gui
            .detail_boss
            .as_deref()
            .and_then(|name| summaries.iter().position(|s| s.name == name));

        let mut clicked = None;
        let mut track = None;
        egui::SidePanel::right("boss_detail")
            .resizable(true)
            .default_width(360.0)
            .show_inside(ui, |ui| {
                match selected.and_then(|i| sheet.grouped.iter().nth(i)) {
                    Some(enc) => {
                        if detail(ui, enc) {
                            track = Some(enc.key());
                        }
                    }
                    None => {
                        ui.label("Click a boss to see the details.");
                    }
                }
            });
        egui::CentralPanel::default().show_inside(ui, |ui| {
            clicked = data_table::draw(ui, "boss_list", &header, &rows, &all, selected);
        });

        if let Some(i) = clicked {
            app.state.gui.detail_boss = summaries.get(i).map(|s| s.name.clone());
        }
        if let Some(key) = track {
            match app.tracker.select(&app.data.index, &key) {
                Ok(()) => {
                    app.message = None;
                    if let Some(ix) = router::index_of(super::hp_tool::PAGE.title()) {
                        app.set_current_index(ix);
                    }
                }
                Err(e) => app.status(e.to_string()),
            }
        }
    }
}

/// Detail pane. Returns true when "Track HP" was clicked.
fn detail(ui: &mut egui::Ui, enc: &BossEncounter) -> bool {
    let mut track = false;
    egui::ScrollArea::vertical().id_salt("boss_detail_scroll").show(ui, |ui| {
        ui.heading(&enc.name);
        let dash = |v: Option<&str>| s!(v.unwrap_or("-"));

        egui::Grid::new("boss_detail_grid").num_columns(2).show(ui, |ui| {
            ui.label(COL_PLACE);
            ui.label(dash(enc.place()));
            ui.end_row();
            ui.label(COL_HP);
            ui.label(enc.main.hp.map_or_else(|| s!("-"), |h| h.to_string()));
            ui.end_row();
            ui.label(COL_EXP);
            ui.label(dash(enc.main.experience.as_deref()));
            ui.end_row();
            ui.label(COL_GOLD);
            ui.label(dash(enc.main.gold.as_deref()));
            ui.end_row();
        });

        if enc.is_trackable() {
            track = ui.button("Track HP").clicked();
        }

        if let Some(note) = &enc.main.note {
            ui.separator();
            ui.label(RichText::new(COL_NOTE).strong());
            ui.label(note);
        }
        if let Some(pattern) = &enc.main.pattern {
            ui.separator();
            ui.label(RichText::new(COL_PATTERN).strong());
            for line in pattern_lines(pattern) {
                ui.label(line);
            }
        }
        if !enc.helpers.is_empty() {
            ui.separator();
            ui.label(RichText::new("Helpers").strong());
            for h in &enc.helpers {
                ui.label(format!("• {}", h.summary()));
                if let Some(n) = &h.note {
                    ui.label(RichText::new(n).weak());
                }
            }
        }
        if let Some(src) = &enc.main.source {
            ui.separator();
            ui.label(RichText::new(format!("{COL_SOURCE}: {src}")).weak());
        }
    });
    track
}
