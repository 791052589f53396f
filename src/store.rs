// src/store.rs
//! Reading the catalogue file into a [`Table`].

use std::{fs, path::Path};

use crate::csv::parse_rows;
use crate::error::{Error, SchemaError};
use crate::record::{Record, Table};
use crate::schema::{ColumnMap, Field};

/// Load and validate a catalogue CSV from disk.
pub fn load_table(path: &Path) -> Result<Table, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let table = load_table_from_str(&text)?;
    logf!("Load: {} → {} records, columns={:?}",
        path.display(),
        table.len(),
        table.columns().iter().map(Field::label).collect::<Vec<_>>()
    );
    Ok(table)
}

/// Parse catalogue text (header row first). Fails with a `SchemaError`
/// before building any rows if a required column is missing.
pub fn load_table_from_str(text: &str) -> Result<Table, SchemaError> {
    let mut rows = parse_rows(text, ',').into_iter();
    let headers = rows.next().ok_or(SchemaError::NoHeader)?;

    let map = match ColumnMap::resolve(&headers) {
        Ok(m) => m,
        Err(e) => {
            loge!("Load: {}", e);
            return Err(e);
        }
    };

    let records = rows.map(|row| to_record(&map, &row)).collect();
    Ok(Table::new(map.columns(), records))
}

fn to_record(map: &ColumnMap, row: &[String]) -> Record {
    let mut rec = Record::default();
    for field in Field::ALL {
        if let Some(cell) = map.index_of(field).and_then(|ix| row.get(ix)) {
            rec.set(field, cell);
        }
    }
    rec
}
