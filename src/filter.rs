// src/filter.rs
//! Filter engine: domains for the filter controls, and the conjunctive row
//! filter itself.
//!
//! Everything here is a pure function of `(table, criteria)`. Output keeps
//! source order; filtering an already filtered table with the same criteria
//! changes nothing.

use std::collections::BTreeSet;

use crate::config::options::EmptySelection;
use crate::error::{CriteriaError, SchemaError};
use crate::record::{Record, Table};
use crate::schema::Field;

/// Categorical columns that get a multiselect.
pub const CATEGORICAL: [Field; 4] =
    [Field::Partner, Field::Architecture, Field::Reactivity, Field::Application];

/// Distinct values per filterable column, sorted, plus integer molecular
/// weight bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterDomains {
    pub partners: BTreeSet<String>,
    pub architectures: BTreeSet<String>,
    pub reactivities: BTreeSet<String>,
    pub applications: BTreeSet<String>,
    /// Carried categorical columns with at least one blank cell.
    pub blanks: BTreeSet<Field>,
    /// `None` when no record has a numeric molecular weight.
    pub molecular_weight: Option<(i64, i64)>,
}

impl FilterDomains {
    pub fn values(&self, field: Field) -> Option<&BTreeSet<String>> {
        match field {
            Field::Partner => Some(&self.partners),
            Field::Architecture => Some(&self.architectures),
            Field::Reactivity => Some(&self.reactivities),
            Field::Application => Some(&self.applications),
            _ => None,
        }
    }

    pub fn values_mut(&mut self, field: Field) -> Option<&mut BTreeSet<String>> {
        match field {
            Field::Partner => Some(&mut self.partners),
            Field::Architecture => Some(&mut self.architectures),
            Field::Reactivity => Some(&mut self.reactivities),
            Field::Application => Some(&mut self.applications),
            _ => None,
        }
    }

    pub fn has_blanks(&self, field: Field) -> bool {
        self.blanks.contains(&field)
    }
}

/// Active constraints for one query. Empty sets and `None` are "no
/// constraint" unless `empty_selection` says otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub partners: BTreeSet<String>,
    pub architectures: BTreeSet<String>,
    pub reactivities: BTreeSet<String>,
    pub applications: BTreeSet<String>,
    /// Columns where a blank cell counts as selected.
    pub blanks: BTreeSet<Field>,
    pub molecular_weight_range: Option<(f64, f64)>,
    pub name_query: Option<String>,
    pub empty_selection: EmptySelection,
}

impl FilterCriteria {
    /// Starting criteria for a fresh session under `policy`.
    ///
    /// With `MatchNothing` every multiselect starts with its full domain
    /// selected, blanks included, so the initial result is still the whole
    /// table.
    pub fn initial(domains: &FilterDomains, policy: EmptySelection) -> Self {
        let mut c = FilterCriteria { empty_selection: policy, ..Default::default() };
        if policy == EmptySelection::MatchNothing {
            c.partners = domains.partners.clone();
            c.architectures = domains.architectures.clone();
            c.reactivities = domains.reactivities.clone();
            c.applications = domains.applications.clone();
            c.blanks = domains.blanks.clone();
        }
        c
    }

    pub fn selection(&self, field: Field) -> Option<&BTreeSet<String>> {
        match field {
            Field::Partner => Some(&self.partners),
            Field::Architecture => Some(&self.architectures),
            Field::Reactivity => Some(&self.reactivities),
            Field::Application => Some(&self.applications),
            _ => None,
        }
    }

    pub fn selection_mut(&mut self, field: Field) -> Option<&mut BTreeSet<String>> {
        match field {
            Field::Partner => Some(&mut self.partners),
            Field::Architecture => Some(&mut self.architectures),
            Field::Reactivity => Some(&mut self.reactivities),
            Field::Application => Some(&mut self.applications),
            _ => None,
        }
    }

    /// Set the name search from raw input; blank input clears it.
    pub fn set_name_query(&mut self, text: &str) {
        let q = text.trim();
        self.name_query = (!q.is_empty()).then(|| s!(q));
    }

    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let Some((min, max)) = self.molecular_weight_range {
            // also rejects NaN bounds
            if !(min <= max) {
                return Err(CriteriaError::InvertedRange { min, max });
            }
        }
        Ok(())
    }

    /// Does one record satisfy every active criterion?
    pub fn matches(&self, rec: &Record) -> bool {
        self.passes(rec, |_| true)
    }

    /// Like `matches`, but an empty multiselect over a column the source
    /// table does not carry is never a constraint.
    fn passes(&self, rec: &Record, has_column: impl Fn(Field) -> bool) -> bool {
        self.name_matches(rec)
            && self.weight_matches(rec)
            && CATEGORICAL
                .iter()
                .all(|&f| self.category_matches(f, rec, has_column(f)))
    }

    fn name_matches(&self, rec: &Record) -> bool {
        let Some(query) = self.name_query.as_deref() else { return true };
        let Some(name) = rec.name.as_deref() else { return false };
        name.to_lowercase().contains(&query.to_lowercase())
    }

    fn weight_matches(&self, rec: &Record) -> bool {
        match (self.molecular_weight_range, rec.kda()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some((min, max)), Some(v)) => min <= v && v <= max,
        }
    }

    fn category_matches(&self, field: Field, rec: &Record, has_column: bool) -> bool {
        let Some(selected) = self.selection(field) else { return true };
        let blank_selected = self.blanks.contains(&field);
        if selected.is_empty() && !blank_selected {
            return !has_column || self.empty_selection.means_all();
        }
        match rec.get(field) {
            Some(v) => selected.contains(v),
            None => blank_selected,
        }
    }
}

/// Distinct sorted values of each categorical column and the molecular
/// weight bounds (min floored, max ceiled). Fails if the table lacks a
/// required column.
pub fn derive_filter_domains(table: &Table) -> Result<FilterDomains, SchemaError> {
    table.columns().validate()?;

    let mut d = FilterDomains::default();
    let mut bounds: Option<(f64, f64)> = None;

    for rec in table {
        for field in CATEGORICAL {
            match rec.get(field) {
                Some(v) => {
                    if let Some(set) = d.values_mut(field) {
                        set.insert(s!(v));
                    }
                }
                None if table.columns().contains(field) => {
                    d.blanks.insert(field);
                }
                None => {}
            }
        }
        if let Some(v) = rec.kda() {
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
    }

    d.molecular_weight = bounds.map(|(lo, hi)| (lo.floor() as i64, hi.ceil() as i64));
    Ok(d)
}

/// Source positions of the rows that pass `criteria`, ascending.
pub fn matching_indices(table: &Table, criteria: &FilterCriteria) -> Result<Vec<usize>, CriteriaError> {
    criteria.validate()?;
    let columns = table.columns();
    Ok(table
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.passes(rec, |f| columns.contains(f)))
        .map(|(ix, _)| ix)
        .collect())
}

/// New table holding exactly the records that pass every active criterion,
/// in source order.
pub fn apply_filters(table: &Table, criteria: &FilterCriteria) -> Result<Table, CriteriaError> {
    let ix = matching_indices(table, criteria)?;
    Ok(table.select(&ix))
}

pub fn count_matches(table: &Table) -> usize {
    table.len()
}
