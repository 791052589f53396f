// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // Apply pending text from the path field.
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }

    let Some(cat) = app.catalogue.as_ref() else {
        app.status("Nothing to export (no catalogue loaded)");
        return;
    };

    let n = cat.count();
    let result = file::export_table(&app.state.options.export, &cat.filtered());
    match result {
        Ok(path) => {
            app.out_path_text = path.to_string_lossy().into_owned();
            app.status(format!("Exported {n} products to {}", path.display()));
        }
        Err(e) => {
            loge!("Export: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}
