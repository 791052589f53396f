// src/gui/components/data_table.rs
//
// Grid of the current filtered rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::Catalogue, schema::Field};

fn initial_width(field: Field) -> f32 {
    match field {
        Field::Name => 220.0,
        Field::MolecularWeight | Field::Pdi => 70.0,
        Field::ProductUrl => 260.0,
        _ => 140.0,
    }
}

fn is_numeric(field: Field) -> bool {
    matches!(field, Field::MolecularWeight | Field::Pdi)
}

pub fn draw(ui: &mut egui::Ui, cat: &Catalogue) {
    let fields: Vec<Field> = cat.table().columns().iter().collect();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt("full_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt("full_table_state")
                .striped(true)
                .max_scroll_height(360.0)
                .cell_layout(Layout::left_to_right(Align::Center));
            for &f in &fields {
                table = table.column(Column::initial(initial_width(f)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for &f in &fields {
                        header.col(|ui| {
                            ui.label(RichText::new(f.label()).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, cat.count(), |mut row| {
                        let Some(rec) = cat.row(row.index()) else { return };
                        for &f in &fields {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let Some(cell) = rec.get(f) else { return };
                                if f == Field::ProductUrl {
                                    ui.hyperlink(cell);
                                } else if is_numeric(f) {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
