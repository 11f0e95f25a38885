// src/gui/components/data_table.rs
//
// Read-only sheet view. Draws `rows[ix]` for each `ix` in `row_ix`, so
// callers filter by index without cloning rows. Returns the source index
// of a clicked row.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{COL_COUNT, COL_EXP, COL_GOLD, COL_HP};

const NUMERIC_HEADERS: &[&str] = &[COL_HP, COL_COUNT, COL_EXP, COL_GOLD, "番号"];

fn default_width(header: &str) -> f32 {
    if NUMERIC_HEADERS.contains(&header) { 70.0 } else { 160.0 }
}

pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    header: &[String],
    rows: &[Vec<String>],
    row_ix: &[usize],
    selected: Option<usize>,
) -> Option<usize> {
    // Some sheets carry more cells than header names; show them as extra columns.
    let cols = row_ix
        .iter()
        .filter_map(|&i| rows.get(i))
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(header.len());
    if cols == 0 {
        ui.label("No rows.");
        return None;
    }

    let numeric: Vec<bool> = (0..cols)
        .map(|ci| header.get(ci).is_some_and(|h| NUMERIC_HEADERS.contains(&h.as_str())))
        .collect();

    let mut clicked = None;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .sense(egui::Sense::click())
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for ci in 0..cols {
                let w = header.get(ci).map_or(80.0, |h| default_width(h));
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut head| {
                    for ci in 0..cols {
                        let text = header.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                        head.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, row_ix.len(), |mut row| {
                        let Some(&src) = row_ix.get(row.index()) else { return };
                        let Some(data) = rows.get(src) else { return };
                        row.set_selected(selected == Some(src));

                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            let is_numeric = numeric[ci];
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let label = egui::Label::new(cell).selectable(false);
                                if is_numeric {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.add(label); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                                }
                            });
                        }
                        if row.response().clicked() {
                            clicked = Some(src);
                        }
                    });
                });
        });

    clicked
}
