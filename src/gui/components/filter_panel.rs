// src/gui/components/filter_panel.rs
//
// Sidebar filter controls. Writes into `app.state.gui` and refilters on any
// change.

use eframe::egui;

use crate::{filter::CATEGORICAL, gui::app::App, schema::Field};

const BLANK_LABEL: &str = "(blank)";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filter Options");

    let Some(domains) = app.catalogue.as_ref().map(|c| c.domains().clone()) else {
        ui.label("No catalogue loaded.");
        if ui.button("Retry").clicked() {
            app.load();
        }
        return;
    };

    let mut changed = false;

    ui.label("Product name");
    if ui.text_edit_singleline(&mut app.state.gui.name_query).changed() {
        changed = true;
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            if let Some((lo, hi)) = domains.molecular_weight {
                ui.strong(Field::MolecularWeight.label());
                let gui = &mut app.state.gui;
                let range = lo as f64..=hi as f64;
                changed |= ui.add(egui::Slider::new(&mut gui.mw_min, range.clone()).text("min")).changed();
                changed |= ui.add(egui::Slider::new(&mut gui.mw_max, range).text("max")).changed();
                ui.separator();
            }

            for field in CATEGORICAL {
                let Some(values) = domains.values(field) else { continue };
                if values.is_empty() && !domains.has_blanks(field) { continue; }

                egui::CollapsingHeader::new(field.label())
                    .id_salt(("multiselect", field))
                    .default_open(matches!(field, Field::Reactivity | Field::Partner))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if ui.button("All").clicked() {
                                app.state.gui.select_all(field, &domains);
                                changed = true;
                            }
                            if ui.button("None").clicked() {
                                app.state.gui.select_none(field);
                                changed = true;
                            }
                        });
                        if domains.has_blanks(field) {
                            let mut on = app.state.gui.is_blank_selected(field);
                            if ui.checkbox(&mut on, BLANK_LABEL).changed() {
                                app.state.gui.toggle_blank(field);
                                changed = true;
                            }
                        }
                        for v in values {
                            let mut on = app.state.gui.is_selected(field, v);
                            if ui.checkbox(&mut on, v.as_str()).changed() {
                                app.state.gui.toggle(field, v);
                                changed = true;
                            }
                        }
                    });
            }
        });

    if changed {
        app.apply_filters();
        logd!("UI: filters changed → {}", app.status);
    }
}
