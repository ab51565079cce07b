//! Error types for schema sampling and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a `sample` call.
///
/// Cycle and depth truncation are not errors; they produce empty values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A `$ref` pointer names a segment missing from the document.
    #[error("Invalid reference token: {token} (in {reference})")]
    InvalidReference { reference: String, token: String },

    /// The step budget ran out before the sample was complete.
    #[error("Schema size exceeded: sampling needs more than {ticks} steps")]
    SchemaSizeExceeded { ticks: usize },
}

impl SampleError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SampleError::InvalidReference { .. } => 2,
            SampleError::SchemaSizeExceeded { .. } => 4,
        }
    }

    /// True when retrying with a larger budget may succeed.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, SampleError::SchemaSizeExceeded { .. })
    }
}

/// Errors while building a schema graph by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is a {actual}, expected an object")]
    NotAnObject { node: usize, actual: &'static str },

    #[error("node {node} is a {actual}, expected an array")]
    NotAnArray { node: usize, actual: &'static str },

    #[error("node {node} does not belong to this graph")]
    UnknownNode { node: usize },
}

/// Errors while loading schema text.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}
