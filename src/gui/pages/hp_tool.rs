// src/gui/pages/hp_tool.rs
//
// Boss HP calculator: pick a boss, type damage, watch the main body's HP.

use eframe::egui::{self, Color32, RichText};

use crate::encounter::EncounterKey;
use crate::gui::app::App;

use super::{game_combo, Page};

pub struct HpToolPage;
pub static PAGE: HpToolPage = HpToolPage;

const ALERT_COLOR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

impl Page for HpToolPage {
    fn title(&self) -> &'static str { "Boss HP" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.data.index.is_empty() {
            ui.label(if app.running { "Loading…" } else { "No bosses with HP data." });
            return;
        }

        boss_picker(ui, app);
        ui.add_space(6.0);
        hp_readout(ui, app);
        ui.add_space(6.0);
        damage_controls(ui, app);

        if let Some(msg) = &app.message {
            ui.label(RichText::new(msg).italics());
        }
        if let Some(alert) = app.tracker.view().and_then(|v| v.alert) {
            ui.label(RichText::new(alert).color(ALERT_COLOR).strong());
        }

        ui.separator();
        helpers(ui, app);
        damage_log(ui, app);
    }
}

fn boss_picker(ui: &mut egui::Ui, app: &mut App) {
    let mut pick: Option<EncounterKey> = None;

    ui.horizontal(|ui| {
        game_combo(ui, "hp_game", app.data.index.games(), &mut app.state.gui.hp_game, true);

        let shown = app
            .tracker
            .selected()
            .map_or_else(|| s!("Select a boss"), |k| k.to_string());
        let game = app.state.gui.hp_game.as_deref();
        egui::ComboBox::from_id_salt("hp_boss")
            .selected_text(shown)
            .width(280.0)
            .show_ui(ui, |ui| {
                for enc in app.data.index.sorted() {
                    if game.is_some_and(|g| g != enc.game) {
                        continue;
                    }
                    let key = enc.key();
                    let selected = app.tracker.selected() == Some(&key);
                    let text = format!("{key} (HP {})", enc.max_hp().unwrap_or(0));
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        pick = Some(key);
                    }
                }
            });
    });

    if let Some(key) = pick {
        match app.tracker.select(&app.data.index, &key) {
            Ok(()) => {
                logf!("UI: Tracking {key}");
                app.message = None;
                app.state.gui.damage_text.clear();
            }
            Err(e) => app.message = Some(e.to_string()),
        }
    }
}

fn hp_readout(ui: &mut egui::Ui, app: &App) {
    let view = app.tracker.view();
    let dash = || s!("-");
    let (max, cur, pct) = match &view {
        Some(v) => (v.max_hp.to_string(), v.current_hp.to_string(), v.percent.to_string()),
        None => (dash(), dash(), dash()),
    };

    egui::Grid::new("hp_grid").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
        ui.label("Max HP");
        ui.label(RichText::new(max).monospace());
        ui.end_row();
        ui.label("Current HP");
        ui.label(RichText::new(cur).monospace().strong());
        ui.end_row();
        ui.label("Remaining");
        ui.label(RichText::new(pct).monospace());
        ui.end_row();
    });
}

fn damage_controls(ui: &mut egui::Ui, app: &mut App) {
    let mut apply = false;
    let mut reset = false;

    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.damage_text)
                .hint_text("Damage")
                .desired_width(120.0),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            apply = true;
            edit.request_focus();
        }
        apply |= ui.button("Apply").clicked();
        reset = ui.button("Reset").clicked();
    });

    if apply {
        match app.tracker.apply_damage_input(&app.state.gui.damage_text) {
            Ok(applied) => {
                logd!("UI: damage applied, hp={} alert={}", applied.hp_after, applied.half_alert);
                app.message = None;
                app.state.gui.damage_text.clear();
            }
            Err(e) => app.message = Some(e.to_string()),
        }
    }
    if reset {
        app.message = app.tracker.reset().err().map(|e| e.to_string());
    }
}

fn helpers(ui: &mut egui::Ui, app: &App) {
    let Some(enc) = app.tracker.selected().and_then(|k| app.data.index.get(k)) else { return };
    if enc.helpers.is_empty() {
        return;
    }
    ui.label(RichText::new("Helpers").strong());
    for h in &enc.helpers {
        ui.label(format!("• {}", h.summary()));
    }
    ui.separator();
}

fn damage_log(ui: &mut egui::Ui, app: &App) {
    let Some(session) = app.tracker.session() else { return };
    if session.log().is_empty() {
        return;
    }
    ui.label(RichText::new("Log").strong());
    egui::ScrollArea::vertical().id_salt("hp_log").show(ui, |ui| {
        for entry in session.log().iter().rev() {
            ui.label(RichText::new(entry.to_string()).monospace());
        }
    });
}
