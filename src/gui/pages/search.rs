// src/gui/pages/search.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

use super::Page;

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl Page for SearchPage {
    fn title(&self) -> &'static str { "Search" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label("Search");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.search_text)
                    .hint_text("item, place, boss…")
                    .desired_width(320.0),
            );
            if ui.small_button("✖").clicked() {
                app.state.gui.search_text.clear();
            }
        });
        ui.separator();

        let q = app.state.gui.search_text.trim();
        if q.is_empty() {
            ui.label(RichText::new(format!(
                "{} pages and {} table rows indexed.",
                app.data.search.page_count(),
                app.data.search.item_count()
            )).weak());
            return;
        }

        let hits = app.data.search.query(q);
        if hits.is_empty() {
            ui.label("No matching pages or data.");
            return;
        }

        egui::ScrollArea::vertical().id_salt("search_hits").show(ui, |ui| {
            if !hits.pages.is_empty() {
                ui.label(RichText::new("Pages").strong());
                for p in &hits.pages {
                    ui.horizontal(|ui| {
                        ui.label(&p.title);
                        ui.label(RichText::new(&p.url).weak());
                    });
                }
                ui.separator();
            }
            if !hits.items.is_empty() {
                ui.label(RichText::new("Data").strong());
                for i in &hits.items {
                    ui.horizontal(|ui| {
                        ui.label(i.display());
                        ui.label(RichText::new(&i.link).weak());
                    });
                }
            }
        });
    }
}
