// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::error::Error;
use crate::record::Table;
use crate::schema::Field;

/// Serialize a table: optional header line of canonical labels, then one
/// line per record. Only columns present in the table are written.
pub fn table_to_string(table: &Table, include_headers: bool, sep: char) -> String {
    let fields: Vec<Field> = table.columns().iter().collect();
    let mut buf: Vec<u8> = Vec::new();

    // writes into a Vec<u8> cannot fail
    if include_headers {
        let headers: Vec<&str> = fields.iter().map(|f| f.label()).collect();
        let _ = write_row(&mut buf, &headers, sep);
    }
    for rec in table {
        let cells: Vec<&str> = fields.iter().map(|&f| rec.get(f).unwrap_or("")).collect();
        let _ = write_row(&mut buf, &cells, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Write `table` to the path implied by `export`. Returns the path written.
pub fn export_table(export: &ExportOptions, table: &Table) -> Result<PathBuf, Error> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = table_to_string(table, export.include_headers, export.delim());
    fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
    logf!("Export: {} rows → {}", table.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Usage(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
