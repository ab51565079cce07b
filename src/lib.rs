//! JSON Schema Sampler
//!
//! Produces one representative example value from a JSON Schema, for
//! documentation, mock servers or test fixtures.
//!
//! Schemas are object graphs held in a [`SchemaGraph`]: a subschema may be
//! shared by several parents or even contain itself. The sampler walks the
//! graph once, resolving `$ref` pointers, merging `allOf`/`if`/`oneOf`
//! composition, inferring missing types, and cutting cycles short.
//!
//! # Example
//!
//! ```
//! use json_schema_sampler::{sample_with_document, SampleOptions, SchemaGraph};
//! use serde_json::json;
//!
//! let mut graph = SchemaGraph::new();
//! let schema = graph.import(&json!({ "$ref": "#/defs/Pet" }));
//! let document = graph.import(&json!({
//!     "defs": {
//!         "Pet": {
//!             "type": "object",
//!             "required": ["name"],
//!             "properties": {
//!                 "name": { "type": "string", "example": "Rex" },
//!                 "owner": { "$ref": "#/defs/Pet" }
//!             }
//!         }
//!     }
//! }));
//!
//! let value = sample_with_document(&graph, schema, &SampleOptions::default(), document).unwrap();
//! assert_eq!(value, json!({ "name": "Rex", "owner": {} }));
//! ```
//!
//! # Composition Rules
//!
//! | Keyword | Effect |
//! |---------|--------|
//! | `allOf` | all branches merged, own keywords first |
//! | `oneOf` / `anyOf` | first branch merged; `oneOf` wins when both appear |
//! | `if` / `then` | both merged, `else` ignored |
//! | `$ref` | replaced by its target in the root document |
//!
//! # Limits
//!
//! A node met again on its own ancestor path samples as `{}`, `[]` or
//! `null`. The same happens past [`SampleOptions::max_sample_depth`]. Every
//! visit spends one of [`SampleOptions::ticks`]; running out fails the call
//! with [`SampleError::SchemaSizeExceeded`].

mod budget;
mod cycle;
mod error;
mod graph;
mod infer;
mod loader;
mod merge;
mod pointer;
mod registry;
mod samplers;
mod traverse;
mod types;

pub use error::{GraphError, LoadError, SampleError};
pub use graph::{Node, NodeId, SchemaGraph};
pub use infer::{declared_type, infer_type};
pub use loader::{load_json, load_json_str, load_schema, load_schema_str};
pub use merge::{Additional, Items, Schema, SchemaRef};
pub use pointer::resolve_ref;
pub use registry::{SamplerRegistry, TypeSampler};
pub use samplers::{ArraySampler, BooleanSampler, NumberSampler, ObjectSampler, StringSampler};
pub use traverse::{sample, sample_value, sample_with_document, Sampled, Sampler, Traversal};
pub use types::{
    json_type_name, SampleOptions, BUILTIN_TYPES, DEFAULT_MAX_SAMPLE_DEPTH, DEFAULT_TICKS,
};
