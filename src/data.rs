// src/data.rs
//
// Catalogue: the loaded table plus the last valid filtered view.
//
// - The table is read-only after load.
// - The view is a list of row indexes into the table, replaced only when a
//   new set of criteria validates. Rejected criteria leave it untouched.

use crate::error::{CriteriaError, SchemaError};
use crate::filter::{self, FilterCriteria, FilterDomains};
use crate::record::{Record, Table};

#[derive(Clone, Debug)]
pub struct Catalogue {
    table: Table,
    domains: FilterDomains,
    criteria: FilterCriteria,
    /// Positions of kept rows in `table`
    row_ix: Vec<usize>,
}

impl Catalogue {
    /// Wrap a loaded table. The initial view holds every row.
    pub fn new(table: Table) -> Result<Self, SchemaError> {
        let domains = filter::derive_filter_domains(&table)?;
        let row_ix = (0..table.len()).collect();
        Ok(Self { table, domains, criteria: FilterCriteria::default(), row_ix })
    }

    /// Recompute the view for `criteria`. On error the previous view and
    /// criteria stay in place.
    pub fn refilter(&mut self, criteria: FilterCriteria) -> Result<usize, CriteriaError> {
        match filter::matching_indices(&self.table, &criteria) {
            Ok(ix) => {
                logd!("Filter: {} of {} rows match", ix.len(), self.table.len());
                self.row_ix = ix;
                self.criteria = criteria;
                Ok(self.row_ix.len())
            }
            Err(e) => {
                loge!("Filter: rejected criteria ({}); keeping {} rows", e, self.row_ix.len());
                Err(e)
            }
        }
    }

    pub fn table(&self) -> &Table { &self.table }
    pub fn domains(&self) -> &FilterDomains { &self.domains }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn row_indices(&self) -> &[usize] { &self.row_ix }

    pub fn count(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&Record> {
        self.row_ix.get(i).and_then(|&ix| self.table.get(ix))
    }

    pub fn rows(&self) -> impl Iterator<Item = &Record> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.table.get(ix))
    }

    /// Materialize the current view (for export/copy boundaries).
    pub fn filtered(&self) -> Table {
        self.table.select(&self.row_ix)
    }
}
