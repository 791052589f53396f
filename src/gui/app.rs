// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::AppOptions,
        state::{AppState, GuiState},
    },
    data::Catalogue,
    present, store,
};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(app_options)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for controls/options (UI thread only)
    pub state: AppState,

    // loaded catalogue + current view; None if loading failed
    pub catalogue: Option<Catalogue>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        let mut app = Self {
            state: AppState { options, gui: GuiState::default() },
            catalogue: None,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.load();
        app
    }

    /// (Re)load the catalogue from the configured path and reset the controls.
    pub fn load(&mut self) {
        let path = self.state.options.data.path.clone();
        let loaded = store::load_table(&path)
            .map_err(|e| e.to_string())
            .and_then(|t| Catalogue::new(t).map_err(|e| e.to_string()));

        match loaded {
            Ok(cat) => {
                let policy = self.state.options.filter.empty_selection;
                self.state.gui = GuiState::for_domains(cat.domains(), policy);
                logf!("Init: {} records from {}", cat.table().len(), path.display());
                self.catalogue = Some(cat);
                self.apply_filters();
            }
            Err(e) => {
                loge!("Init: failed to load {}: {}", path.display(), e);
                self.catalogue = None;
                self.status = format!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    /// Rebuild criteria from the sidebar and refilter. Invalid criteria keep
    /// the previous result on screen.
    pub fn apply_filters(&mut self) {
        let Some(cat) = self.catalogue.as_mut() else { return };
        let policy = self.state.options.filter.empty_selection;
        let criteria = self.state.gui.criteria(cat.domains(), policy);

        self.status = match cat.refilter(criteria) {
            Ok(n) => present::count_heading(n),
            Err(e) => format!("{e} (showing previous results)"),
        };
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status")
            .show(ctx, |ui| {
                ui.label(self.status.as_str());
            });

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                super::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.label("Filter PEG products by functional group, molecular weight, polymer architecture, and other criteria.");

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::results::draw(ui, self);
        });
    }
}
