// src/gui/pages/tables.rs
//
// Item tables as loaded, with a substring filter.

use eframe::egui;

use crate::gui::{app::App, components::data_table};
use crate::search::filter_rows;

use super::Page;

pub struct TablesPage;
pub static PAGE: TablesPage = TablesPage;

impl Page for TablesPage {
    fn title(&self) -> &'static str { "Tables" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.data.tables.is_empty() {
            ui.label(if app.running { "Loading…" } else { "No item tables configured." });
            return;
        }
        let gui = &mut app.state.gui;
        if gui.table_index >= app.data.tables.len() {
            gui.table_index = 0;
        }

        ui.horizontal(|ui| {
            let shown = app.data.tables[gui.table_index].label.clone();
            egui::ComboBox::from_id_salt("table_pick")
                .selected_text(shown)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for (i, t) in app.data.tables.iter().enumerate() {
                        ui.selectable_value(&mut gui.table_index, i, t.label.as_str());
                    }
                });
            ui.label("Filter");
            ui.add(egui::TextEdit::singleline(&mut gui.table_filter).desired_width(200.0));
        });

        let table = &app.data.tables[gui.table_index];
        let keep = filter_rows(&table.doc, &gui.table_filter);
        ui.label(egui::RichText::new(format!(
            "{} / {} rows · {}",
            keep.len(),
            table.doc.row_count(),
            table.location
        )).weak());
        ui.separator();

        data_table::draw(ui, "item_table", table.doc.header(), table.doc.rows(), &keep, None);
    }
}
