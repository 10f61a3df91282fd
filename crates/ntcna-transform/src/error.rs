use polars::prelude::PolarsError;
use thiserror::Error;

use ntcna_model::{FilterKind, ModelError};

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("source table has no column '{column}' (needed by {context})")]
    MissingColumn { column: String, context: String },
    #[error("filter column '{0}' is not present in the source table")]
    MissingFilterColumn(String),
    #[error("no filter is declared on column '{0}'")]
    UnknownFilter(String),
    #[error("filter on '{column}' is a {expected:?} filter, got a {found:?} value")]
    FilterKindMismatch {
        column: String,
        expected: FilterKind,
        found: FilterKind,
    },
    #[error("zoom {0} is outside the supported range 1..=20")]
    ZoomOutOfBounds(u8),
}

pub type Result<T> = std::result::Result<T, TransformError>;
