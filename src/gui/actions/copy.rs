// src/gui/actions/copy.rs
use eframe::egui;

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = match app.catalogue.as_ref() {
        None => None,
        Some(cat) if cat.is_empty() => None,
        Some(cat) => {
            let export = &app.state.options.export;
            logf!("Copy: rows={}, headers={}", cat.count(), export.include_headers);
            Some((cat.count(), file::table_to_string(&cat.filtered(), export.include_headers, export.delim())))
        }
    };

    let Some((n, txt)) = txt else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {n} products to clipboard"));
}
