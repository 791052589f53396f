// src/error.rs
use std::io;

use thiserror::Error;

use crate::schema::Field;

/// Load-time failure: the input cannot be mapped onto the catalogue schema.
/// No partial table is produced.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("input has no header row")]
    NoHeader,

    #[error("required column `{field}` is missing (accepted headers: {accepted})")]
    MissingColumn { field: Field, accepted: String },
}

impl SchemaError {
    pub fn missing(field: Field) -> Self {
        SchemaError::MissingColumn { field, accepted: field.headers().join(", ") }
    }
}

/// Rejected filter criteria. Recoverable: callers keep their previous result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("invalid molecular weight range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn io(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        Error::Io { path: path.as_ref().display().to_string(), source }
    }
}
