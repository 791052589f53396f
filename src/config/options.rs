// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub data: DataOptions,
    pub filter: FilterOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub path: PathBuf,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DATA_FILE) }
    }
}

/// What an empty categorical selection means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptySelection {
    /// Nothing selected = no constraint, every row passes.
    #[default]
    NoConstraint,
    /// Nothing selected = nothing passes. The initial selection is the full domain.
    MatchNothing,
}

impl EmptySelection {
    pub fn from_means_all(means_all: bool) -> Self {
        if means_all { Self::NoConstraint } else { Self::MatchNothing }
    }

    pub fn means_all(self) -> bool {
        matches!(self, Self::NoConstraint)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub empty_selection: EmptySelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. An extension typed by the user wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut file = self.out_path.file_stem.clone();
        match &self.out_path.ext {
            Some(ext) => { file.push("."); file.push(ext); }
            None => { file.push("."); file.push(self.format.ext()); }
        }
        self.out_path.dir.join(file)
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
            ext: None,
        }
    }
}
