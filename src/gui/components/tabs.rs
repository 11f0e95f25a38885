// src/gui/components/tabs.rs
//
// Top tab strip plus the reload button.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {} → {}", app.current_page().title(), page.title());
                app.set_current_index(idx);
                page.on_enter(app);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = ui.add_enabled(!app.running, egui::Button::new("Reload data"));
            if btn.clicked() {
                logf!("UI: Reload clicked");
                app.reload();
            }
        });
    });
}
