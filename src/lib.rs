// src/lib.rs

#[macro_use]
mod macros;

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod filter;
pub mod gui;
pub mod present;
pub mod record;
pub mod schema;
pub mod store;

pub use error::{CriteriaError, Error, SchemaError};
pub use filter::{FilterCriteria, FilterDomains, apply_filters, count_matches, derive_filter_domains};
pub use record::{MolecularWeight, Record, Table};
