//! `$ref` resolution against the root document.
//!
//! Only intra-document JSON Pointers (`#/defs/Pet`) are supported. Each segment
//! is percent-decoded, then `~1`/`~0` unescaped, and walked from the
//! document root by object key or array index.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::SampleError;
use crate::graph::{NodeId, SchemaGraph};

/// Resolve a `$ref` string to the node it points at inside `document`.
///
/// # Errors
///
/// Returns `SampleError::InvalidReference` naming the first segment that
/// does not exist, or the whole reference when it is not a fragment pointer.
pub fn resolve_ref(
    graph: &SchemaGraph,
    document: NodeId,
    reference: &str,
) -> Result<NodeId, SampleError> {
    let Some(pointer) = reference.strip_prefix('#') else {
        // External documents are never fetched
        return Err(invalid(reference, reference));
    };
    if pointer.is_empty() {
        return Ok(document);
    }
    let Some(path) = pointer.strip_prefix('/') else {
        return Err(invalid(reference, pointer));
    };

    let mut current = document;
    for raw in path.split('/') {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        let token = unescape_segment(&decoded);
        current = step(graph, current, &token).ok_or_else(|| invalid(reference, &token))?;
    }
    Ok(current)
}

/// Unescape a single pointer segment (`~1` is `/`, `~0` is `~`).
pub fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

fn step(graph: &SchemaGraph, current: NodeId, token: &str) -> Option<NodeId> {
    if graph.is_array(current) {
        // Leading zeros are not valid array indexes
        if token.len() > 1 && token.starts_with('0') {
            return None;
        }
        let index = token.parse::<usize>().ok()?;
        graph.index(current, index)
    } else {
        graph.get(current, token)
    }
}

fn invalid(reference: &str, token: &str) -> SampleError {
    SampleError::InvalidReference {
        reference: reference.to_string(),
        token: token.to_string(),
    }
}
