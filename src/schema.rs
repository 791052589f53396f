// src/schema.rs
//! Canonical catalogue columns and the header mapping that folds every CSV
//! schema version onto them.
//!
//! Each [`Field`] lists the header spellings seen across file versions.
//! Headers are trimmed and compared case-insensitively.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::SchemaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Partner,
    Architecture,
    Reactivity,
    MolecularWeight,
    Application,
    IntendedApplication,
    Solubility,
    Pdi,
    ProductUrl,
}

impl Field {
    /// Display / export order.
    pub const ALL: [Field; 10] = [
        Field::Name,
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

    /// Absence of any of these is a load failure.
    pub const REQUIRED: [Field; 4] =
        [Field::Name, Field::Partner, Field::Architecture, Field::MolecularWeight];

    /// Accepted CSV headers, first one is the canonical spelling.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["Product Name"],
            Field::Partner => &["Commercial Partner"],
            Field::Architecture => &["Polymer Architecture"],
            Field::Reactivity => &["Functional Group / Reactivity", "Functional Group"],
            Field::MolecularWeight => {
                &["Molecular Weight (kDa)", "Molecular Weight", "Molecular_Weight"]
            }
            Field::Application => &["Application"],
            Field::IntendedApplication => &["Intended Application"],
            Field::Solubility => &["Solubility"],
            Field::Pdi => &["Polydispersity Index (PDI)"],
            Field::ProductUrl => &["Product URL", "Product Page"],
        }
    }

    pub fn label(self) -> &'static str {
        self.headers()[0]
    }

    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }

    /// Match a raw header cell against the mapping table.
    pub fn from_header(raw: &str) -> Option<Field> {
        let h = raw.trim().trim_start_matches('\u{feff}').trim();
        Field::ALL
            .into_iter()
            .find(|f| f.headers().iter().any(|cand| cand.eq_ignore_ascii_case(h)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved header row: which source column feeds each canonical field.
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    slots: [Option<usize>; Field::ALL.len()],
}

impl ColumnMap {
    /// Map a header row. The first header that resolves to a field wins;
    /// unknown headers are ignored. Fails if a required field is unmapped.
    pub fn resolve(headers: &[String]) -> Result<Self, SchemaError> {
        let mut map = ColumnMap::default();
        for (ix, h) in headers.iter().enumerate() {
            match Field::from_header(h) {
                Some(field) => {
                    let slot = &mut map.slots[field as usize];
                    if slot.is_none() {
                        *slot = Some(ix);
                    } else {
                        logd!("Schema: duplicate header {:?} for {} ignored", h.trim(), field);
                    }
                }
                None => logd!("Schema: unmapped header {:?}", h.trim()),
            }
        }
        map.columns().validate()?;
        Ok(map)
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.slots[field as usize]
    }

    pub fn columns(&self) -> Columns {
        Columns(Field::ALL.into_iter().filter(|f| self.index_of(*f).is_some()).collect())
    }
}

/// Set of canonical columns present in a table.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Columns(BTreeSet<Field>);

impl Columns {
    pub fn all() -> Self {
        Columns(Field::ALL.into_iter().collect())
    }

    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Columns(fields.into_iter().collect())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    /// Present columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        match Field::REQUIRED.into_iter().find(|f| !self.contains(*f)) {
            Some(missing) => Err(SchemaError::missing(missing)),
            None => Ok(()),
        }
    }
}
