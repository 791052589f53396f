// src/config/consts.rs

// Input
pub const DEFAULT_DATA_FILE: &str = "peg_products_v2.csv";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "peg_products_filtered";

// Window
pub const APP_TITLE: &str = "PEG Selector Tool";
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 780.0;
