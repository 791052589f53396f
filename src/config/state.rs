// src/config/state.rs
use std::collections::{BTreeMap, BTreeSet};

use super::options::{AppOptions, EmptySelection};
use crate::filter::{CATEGORICAL, FilterCriteria, FilterDomains};
use crate::schema::Field;

/// Raw filter input as the sidebar holds it. Turned into `FilterCriteria`
/// on every interaction.
#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Name search box text
    pub name_query: String,

    /// Multiselect state per categorical column
    pub selected: BTreeMap<Field, BTreeSet<String>>,

    /// Columns whose "(blank)" entry is ticked
    pub blanks: BTreeSet<Field>,

    /// Molecular weight slider positions (kDa)
    pub mw_min: f64,
    pub mw_max: f64,
}

impl GuiState {
    /// Fresh controls for a loaded catalogue: sliders at the domain bounds,
    /// multiselects per the empty-selection policy.
    pub fn for_domains(domains: &FilterDomains, policy: EmptySelection) -> Self {
        let initial = FilterCriteria::initial(domains, policy);
        let selected = CATEGORICAL
            .into_iter()
            .map(|f| (f, initial.selection(f).cloned().unwrap_or_default()))
            .collect();
        let (lo, hi) = domains.molecular_weight.unwrap_or((0, 0));
        Self {
            selected,
            blanks: initial.blanks,
            mw_min: lo as f64,
            mw_max: hi as f64,
            ..Default::default()
        }
    }

    pub fn is_selected(&self, field: Field, value: &str) -> bool {
        self.selected.get(&field).is_some_and(|s| s.contains(value))
    }

    pub fn toggle(&mut self, field: Field, value: &str) {
        let set = self.selected.entry(field).or_default();
        if !set.remove(value) {
            set.insert(s!(value));
        }
    }

    pub fn is_blank_selected(&self, field: Field) -> bool {
        self.blanks.contains(&field)
    }

    pub fn toggle_blank(&mut self, field: Field) {
        if !self.blanks.remove(&field) {
            self.blanks.insert(field);
        }
    }

    /// Select every value of `field`, blanks included when the column has any.
    pub fn select_all(&mut self, field: Field, domains: &FilterDomains) {
        let values = domains.values(field).cloned().unwrap_or_default();
        self.selected.insert(field, values);
        if domains.has_blanks(field) {
            self.blanks.insert(field);
        }
    }

    pub fn select_none(&mut self, field: Field) {
        self.selected.entry(field).or_default().clear();
        self.blanks.remove(&field);
    }

    /// Build criteria from the controls. The weight range only constrains
    /// once a slider has left the domain bounds, so rows without a weight
    /// stay visible until then.
    pub fn criteria(&self, domains: &FilterDomains, policy: EmptySelection) -> FilterCriteria {
        let mut c = FilterCriteria {
            empty_selection: policy,
            blanks: self.blanks.clone(),
            ..Default::default()
        };
        for field in CATEGORICAL {
            if let (Some(dst), Some(src)) = (c.selection_mut(field), self.selected.get(&field)) {
                *dst = src.clone();
            }
        }
        if let Some((lo, hi)) = domains.molecular_weight {
            if self.mw_min != lo as f64 || self.mw_max != hi as f64 {
                c.molecular_weight_range = Some((self.mw_min, self.mw_max));
            }
        }
        c.set_name_query(&self.name_query);
        c
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
