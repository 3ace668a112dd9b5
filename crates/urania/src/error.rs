use thiserror::Error;

/// Errors raised when building analysis inputs from untrusted scalars.
///
/// Line-level parse problems are never errors; they are collected as
/// diagnostics on the parse result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UraniaError {
    #[error("House number must be in 1..=12, got {0}")]
    InvalidHouse(u32),
    #[error("Derived house index must be in 1..=12, got {0}")]
    InvalidDerivedIndex(u32),
    #[error("Unknown rulership system: {name}. Valid systems: {valid:?}")]
    UnknownRulershipSystem { name: String, valid: Vec<String> },
    #[error("Unknown house topic: {name}. Valid topics: {valid:?}")]
    UnknownTopic { name: String, valid: Vec<String> },
}

pub type Result<T> = std::result::Result<T, UraniaError>;
