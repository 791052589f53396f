// src/present.rs
//! Plain-text rendering of records, shared by the GUI and the CLI.

use crate::record::Record;
use crate::schema::Field;

pub const NO_MATCHES: &str = "No products match your filter criteria.";

/// Shown where a record has no product name.
pub const UNNAMED: &str = "(unnamed product)";

/// Fields shown in a record's detail view, in order. Name is the heading.
pub const DETAIL_FIELDS: [Field; 9] = [
    Field::Partner,
    Field::Architecture,
    Field::Reactivity,
    Field::MolecularWeight,
    Field::Application,
    Field::IntendedApplication,
    Field::Solubility,
    Field::Pdi,
    Field::ProductUrl,
];

pub fn count_heading(n: usize) -> String {
    format!("{n} Products Found")
}

pub fn display_name(rec: &Record) -> &str {
    rec.name.as_deref().unwrap_or(UNNAMED)
}

/// Markdown list item: `- [name](url)`, or `- name` when there is no URL.
pub fn link_line(rec: &Record) -> String {
    match rec.product_url.as_deref() {
        Some(url) => format!("- [{}]({})", display_name(rec), url),
        None => format!("- {}", display_name(rec)),
    }
}

/// Label/value pairs for the fields this record actually has.
pub fn detail_fields(rec: &Record) -> Vec<(&'static str, &str)> {
    DETAIL_FIELDS
        .iter()
        .filter_map(|&f| rec.get(f).map(|v| (detail_label(f), v)))
        .collect()
}

fn detail_label(field: Field) -> &'static str {
    match field {
        Field::Reactivity => "Functional Group / Reactivity",
        Field::Pdi => "PDI",
        other => other.label(),
    }
}
