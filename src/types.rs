//! Core types for schema sampling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default maximum nesting of composite samples.
pub const DEFAULT_MAX_SAMPLE_DEPTH: usize = 15;

/// Default number of traversal steps allowed per `sample` call.
pub const DEFAULT_TICKS: usize = 1000;

/// Type names bound by the default sampler registry.
pub const BUILTIN_TYPES: &[&str] = &["object", "array", "string", "number", "integer", "boolean"];

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The neutral value used when descent is cut short.
///
/// Objects truncate to `{}`, arrays to `[]`, everything else to `null`.
pub fn neutral_value(type_name: Option<&str>) -> Value {
    match type_name {
        Some("object") => Value::Object(serde_json::Map::new()),
        Some("array") => Value::Array(Vec::new()),
        _ => Value::Null,
    }
}

/// Options for sample generation.
///
/// Deserializes from the camelCase names hosts already use
/// (`skipReadOnly`, `maxSampleDepth`, ...); missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleOptions {
    /// Omit properties marked `readOnly: true`.
    pub skip_read_only: bool,
    /// Omit properties marked `writeOnly: true`.
    pub skip_write_only: bool,
    /// Omit object properties not listed in `required`.
    pub skip_non_required: bool,
    /// Composite descent deeper than this is truncated.
    pub max_sample_depth: usize,
    /// Total traversal steps allowed before failing.
    pub ticks: usize,
    /// Suppress advisory warnings.
    pub quiet: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            skip_read_only: false,
            skip_write_only: false,
            skip_non_required: false,
            max_sample_depth: DEFAULT_MAX_SAMPLE_DEPTH,
            ticks: DEFAULT_TICKS,
            quiet: false,
        }
    }
}

impl SampleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_read_only(mut self, skip: bool) -> Self {
        self.skip_read_only = skip;
        self
    }

    pub fn skip_write_only(mut self, skip: bool) -> Self {
        self.skip_write_only = skip;
        self
    }

    pub fn skip_non_required(mut self, skip: bool) -> Self {
        self.skip_non_required = skip;
        self
    }

    pub fn max_sample_depth(mut self, depth: usize) -> Self {
        self.max_sample_depth = depth;
        self
    }

    pub fn ticks(mut self, ticks: usize) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
