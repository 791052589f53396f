// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use peg_selector::config::consts::{APP_TITLE, WINDOW_H, WINDOW_W};
use peg_selector::config::options::AppOptions;
use peg_selector::gui;

fn main() {
    let mut app_options = AppOptions::default();
    // Optional positional argument: catalogue path
    if let Some(path) = std::env::args().nth(1) {
        app_options.data.path = path.into();
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
