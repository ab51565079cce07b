//! Schema loading from files and strings into a [`SchemaGraph`].

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::graph::{NodeId, SchemaGraph};

/// Load a JSON document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't valid JSON.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_json_str(&content)
}

/// Load a JSON document from a string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON.
pub fn load_json_str(content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Load a schema file into `graph`, returning its root node.
pub fn load_schema(graph: &mut SchemaGraph, path: &Path) -> Result<NodeId, LoadError> {
    let value = load_json(path)?;
    Ok(graph.import(&value))
}

/// Load schema text into `graph`, returning its root node.
pub fn load_schema_str(graph: &mut SchemaGraph, content: &str) -> Result<NodeId, LoadError> {
    let value = load_json_str(content)?;
    Ok(graph.import(&value))
}
