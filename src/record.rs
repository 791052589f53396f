// src/record.rs
//! In-memory catalogue rows.

use crate::schema::{Columns, Field};

/// Molecular weight as written in the source plus its numeric value in kDa.
///
/// Older files carry pre-binned labels ("20 kDa", "5-10 kDa") instead of
/// numbers; those resolve to the first number in the label.
#[derive(Clone, Debug, PartialEq)]
pub struct MolecularWeight {
    pub label: String,
    pub kda: Option<f64>,
}

impl MolecularWeight {
    pub fn parse(cell: &str) -> Self {
        let label = cell.trim();
        Self { label: s!(label), kda: parse_kda(label) }
    }

    pub fn from_kda(kda: f64) -> Self {
        Self { label: kda.to_string(), kda: Some(kda) }
    }
}

fn parse_kda(label: &str) -> Option<f64> {
    if let Ok(v) = label.parse::<f64>() {
        return v.is_finite().then_some(v);
    }

    // First run of digits (with at most one '.') anywhere in the label.
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let mut end = start;
    let mut seen_dot = false;
    for (i, ch) in label[start..].char_indices() {
        match ch {
            '0'..='9' => end = start + i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    label[start..end].parse::<f64>().ok()
}

/// One catalogue entry. Every field is optional at row level; an empty cell
/// or an absent column is `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub name: Option<String>,
    pub partner: Option<String>,
    pub architecture: Option<String>,
    pub reactivity: Option<String>,
    pub molecular_weight: Option<MolecularWeight>,
    pub application: Option<String>,
    pub intended_application: Option<String>,
    pub solubility: Option<String>,
    pub pdi: Option<String>,
    pub product_url: Option<String>,
}

impl Record {
    /// Numeric molecular weight in kDa, if known.
    pub fn kda(&self) -> Option<f64> {
        self.molecular_weight.as_ref().and_then(|mw| mw.kda)
    }

    /// Text value of a column, as it would be displayed.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Partner => self.partner.as_deref(),
            Field::Architecture => self.architecture.as_deref(),
            Field::Reactivity => self.reactivity.as_deref(),
            Field::MolecularWeight => self.molecular_weight.as_ref().map(|mw| mw.label.as_str()),
            Field::Application => self.application.as_deref(),
            Field::IntendedApplication => self.intended_application.as_deref(),
            Field::Solubility => self.solubility.as_deref(),
            Field::Pdi => self.pdi.as_deref(),
            Field::ProductUrl => self.product_url.as_deref(),
        }
    }

    /// Set a column from a raw cell. Blank cells become `None`.
    pub fn set(&mut self, field: Field, cell: &str) {
        let cell = cell.trim();
        if cell.is_empty() {
            return;
        }
        let text = Some(s!(cell));
        match field {
            Field::Name => self.name = text,
            Field::Partner => self.partner = text,
            Field::Architecture => self.architecture = text,
            Field::Reactivity => self.reactivity = text,
            Field::MolecularWeight => self.molecular_weight = Some(MolecularWeight::parse(cell)),
            Field::Application => self.application = text,
            Field::IntendedApplication => self.intended_application = text,
            Field::Solubility => self.solubility = text,
            Field::Pdi => self.pdi = text,
            Field::ProductUrl => self.product_url = text,
        }
    }
}

/// Ordered, read-only collection of records plus the columns it was loaded with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Columns,
    records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Columns, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Table with every canonical column present. Handy for building fixtures.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { columns: Columns::all(), records }
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.records.get(ix)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Same columns, only the rows at `row_ix` (in that order).
    pub fn select(&self, row_ix: &[usize]) -> Table {
        let records = row_ix.iter().filter_map(|&ix| self.records.get(ix).cloned()).collect();
        Table { columns: self.columns.clone(), records }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
