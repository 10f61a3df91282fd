use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no {table} entry has code '{code}'")]
    UnknownCode { table: &'static str, code: String },
    #[error("no {table} entry is named '{name}'")]
    UnknownName { table: &'static str, name: String },
    #[error("invalid {kind} code: '{value}'")]
    InvalidCode { kind: &'static str, value: String },
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfBounds { year: i64, min: u16, max: u16 },
    #[error("chart group '{group}' declares {found} column(s) per scope set, expected one for each of US, state and place")]
    ShapeMismatch { group: String, found: usize },
    #[error("chart template declares no columns")]
    EmptyTemplate,
    #[error("invalid filter declaration: {0}")]
    InvalidFilter(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
