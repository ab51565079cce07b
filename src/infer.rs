//! Type inference for schemas without a declared `type`.

use crate::graph::{Node, NodeId, SchemaGraph};

/// Keyword families in priority order. The first family with a keyword
/// present on the schema decides the type.
const KEYWORD_FAMILIES: &[(&str, &[&str])] = &[
    (
        "object",
        &[
            "properties",
            "additionalProperties",
            "patternProperties",
            "minProperties",
            "maxProperties",
            "required",
            "dependencies",
        ],
    ),
    (
        "array",
        &[
            "items",
            "prefixItems",
            "additionalItems",
            "minItems",
            "maxItems",
            "uniqueItems",
            "contains",
        ],
    ),
    (
        "number",
        &[
            "minimum",
            "maximum",
            "exclusiveMinimum",
            "exclusiveMaximum",
            "multipleOf",
        ],
    ),
    ("string", &["minLength", "maxLength", "pattern", "format"]),
];

/// Infer a type from which keywords are present.
pub fn infer_from_keywords(has: impl Fn(&str) -> bool) -> Option<&'static str> {
    KEYWORD_FAMILIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has(k)))
        .map(|(type_name, _)| *type_name)
}

/// The declared `type` of a schema node.
///
/// A list yields its first entry; an empty list counts as undeclared.
pub fn declared_type(graph: &SchemaGraph, schema: NodeId) -> Option<&str> {
    let type_node = graph.get(schema, "type")?;
    match graph.node(type_node) {
        Node::String(s) => Some(s),
        Node::Array(candidates) => candidates.first().and_then(|c| graph.as_str(*c)),
        _ => None,
    }
}

/// The type a schema node would be sampled as, ignoring `$ref` and
/// composition. `None` means the null fallback.
pub fn infer_type(graph: &SchemaGraph, schema: NodeId) -> Option<&str> {
    declared_type(graph, schema).or_else(|| infer_from_keywords(|k| graph.get(schema, k).is_some()))
}
