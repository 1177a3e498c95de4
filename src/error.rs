// src/error.rs

use thiserror::Error;

/// Errors surfaced to callers of the library context and the graph window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// A required book or strategy was missing.
    #[error("invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),

    #[error("unknown function: '{0}'")]
    UnknownFunction(String),
}

pub type DemoResult<T> = Result<T, DemoError>;
