// src/gui/components/results.rs
//
// Match count, one collapsible detail section per matching product, and the
// full-table view.

use eframe::egui::{self, RichText};

use crate::{gui::app::App, present, schema::Field};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(cat) = app.catalogue.as_ref() else {
        ui.label("Load a catalogue to browse products.");
        return;
    };

    ui.label(RichText::new(present::count_heading(cat.count())).heading());

    if cat.is_empty() {
        ui.label(present::NO_MATCHES);
    } else {
        let list_h = (ui.available_height() * 0.6).max(120.0);
        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .max_height(list_h)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (i, rec) in cat.rows().enumerate() {
                    egui::CollapsingHeader::new(present::display_name(rec))
                        .id_salt(("product", cat.row_indices()[i]))
                        .show(ui, |ui| {
                            egui::Grid::new(("details", i))
                                .num_columns(2)
                                .striped(true)
                                .show(ui, |ui| {
                                    for (label, value) in present::detail_fields(rec) {
                                        ui.strong(label);
                                        if label == Field::ProductUrl.label() {
                                            ui.hyperlink_to(value, value);
                                        } else {
                                            ui.label(value);
                                        }
                                        ui.end_row();
                                    }
                                });
                        });
                }
            });
    }

    ui.separator();

    egui::CollapsingHeader::new("Show Full Table")
        .id_salt("full_table")
        .show(ui, |ui| {
            super::data_table::draw(ui, cat);
        });
}
