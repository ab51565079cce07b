//! Composition merging.
//!
//! A schema node plus its `allOf` branches, its `if`/`then` pair and the
//! first `oneOf`/`anyOf` alternative collapse into one effective [`Schema`].
//! Inputs are never mutated; merged subschemas are freshly built values.
//!
//! Merge rules, own keywords first and then branches in order:
//!
//! | keyword | rule |
//! |---------|------|
//! | `type` | first declared wins |
//! | `properties` | union by name, first-seen order; shared names merge recursively |
//! | `items` | first declared wins, two single-schema `items` merge recursively |
//! | `required` | set union |
//! | `readOnly` / `writeOnly` | logical or |
//! | everything else | first declared wins |

use serde_json::Value;

use crate::error::SampleError;
use crate::graph::{Node, NodeId, SchemaGraph};
use crate::infer::infer_from_keywords;

/// Keywords consumed by composition; they never reach the effective schema.
const COMPOSITION_KEYWORDS: &[&str] = &["$ref", "allOf", "oneOf", "anyOf", "if", "then", "else"];

/// A subschema inside an effective schema.
#[derive(Debug, Clone)]
pub enum SchemaRef<'g> {
    /// An untouched node of the input graph; keeps its identity.
    Node(NodeId),
    /// A subschema produced by merging several nodes.
    Merged(Box<Schema<'g>>),
}

/// Array item schemas.
#[derive(Debug, Clone)]
pub enum Items<'g> {
    Single(SchemaRef<'g>),
    Tuple(Vec<SchemaRef<'g>>),
}

/// `additionalProperties` in either of its forms.
#[derive(Debug, Clone)]
pub enum Additional<'g> {
    Allowed(bool),
    Schema(SchemaRef<'g>),
}

/// A resolved, merged schema ready for type dispatch.
#[derive(Debug, Clone)]
pub struct Schema<'g> {
    graph: &'g SchemaGraph,
    /// Node this schema was built from, if it was not synthesized.
    pub origin: Option<NodeId>,
    /// Declared type candidates, in declaration order.
    pub types: Vec<&'g str>,
    pub properties: Vec<(&'g str, SchemaRef<'g>)>,
    pub additional_properties: Option<Additional<'g>>,
    pub items: Option<Items<'g>>,
    pub required: Vec<&'g str>,
    pub read_only: bool,
    pub write_only: bool,
    /// Remaining keywords, first declaration wins.
    keywords: Vec<(&'g str, NodeId)>,
    /// Every keyword name seen across merged parts.
    declared: Vec<&'g str>,
}

impl<'g> Schema<'g> {
    /// A schema with no keywords at all.
    pub fn empty(graph: &'g SchemaGraph) -> Self {
        Self {
            graph,
            origin: None,
            types: Vec::new(),
            properties: Vec::new(),
            additional_properties: None,
            items: None,
            required: Vec::new(),
            read_only: false,
            write_only: false,
            keywords: Vec::new(),
            declared: Vec::new(),
        }
    }

    /// The node's own keywords, ignoring `$ref` and composition.
    pub fn own(graph: &'g SchemaGraph, id: NodeId) -> Self {
        let mut schema = Self::empty(graph);
        schema.origin = Some(id);

        for (key, child) in graph.entries(id) {
            let key = key.as_str();
            let child = *child;
            if COMPOSITION_KEYWORDS.iter().any(|k| *k == key) {
                continue;
            }
            schema.declared.push(key);
            match key {
                "type" => schema.types = type_candidates(graph, child),
                "properties" => {
                    schema.properties = graph
                        .entries(child)
                        .iter()
                        .map(|(name, prop)| (name.as_str(), SchemaRef::Node(*prop)))
                        .collect();
                }
                "additionalProperties" => {
                    schema.additional_properties = Some(match graph.as_bool(child) {
                        Some(allowed) => Additional::Allowed(allowed),
                        None => Additional::Schema(SchemaRef::Node(child)),
                    });
                }
                "items" | "prefixItems" => {}
                "required" => {
                    schema.required = graph
                        .elements(child)
                        .iter()
                        .filter_map(|name| graph.as_str(*name))
                        .collect();
                }
                "readOnly" => schema.read_only = graph.as_bool(child) == Some(true),
                "writeOnly" => schema.write_only = graph.as_bool(child) == Some(true),
                _ => schema.keywords.push((key, child)),
            }
        }

        schema.items = own_items(graph, id);
        schema
    }

    pub fn graph(&self) -> &'g SchemaGraph {
        self.graph
    }

    /// Raw node of a non-structural keyword such as `minimum` or `format`.
    pub fn keyword(&self, name: &str) -> Option<NodeId> {
        self.keywords
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, id)| *id)
    }

    pub fn has_keyword(&self, name: &str) -> bool {
        self.declared.iter().any(|k| *k == name)
    }

    pub fn string(&self, name: &str) -> Option<&'g str> {
        self.keyword(name).and_then(|id| self.graph.as_str(id))
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.keyword(name).and_then(|id| self.graph.as_f64(id))
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.keyword(name).and_then(|id| self.graph.as_bool(id))
    }

    pub fn unsigned(&self, name: &str) -> Option<u64> {
        self.keyword(name).and_then(|id| self.graph.as_u64(id))
    }

    /// Keyword value exported as JSON.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.keyword(name).map(|id| self.graph.to_value(id))
    }

    /// Declared type, or the inferred one when nothing is declared.
    pub fn effective_type(&self) -> Option<&'g str> {
        self.types
            .first()
            .copied()
            .or_else(|| infer_from_keywords(|k| self.has_keyword(k)))
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|k| *k == property)
    }

    /// A literal sample carried by the schema itself.
    ///
    /// Checked in order: `example`, `const`, `examples[0]`, `enum[0]`,
    /// `default`. Falsy values and `null` count as present.
    pub fn literal(&self) -> Option<Value> {
        if let Some(example) = self.value("example") {
            return Some(example);
        }
        if let Some(constant) = self.value("const") {
            return Some(constant);
        }
        let first_of = |name: &str| {
            self.keyword(name)
                .and_then(|list| self.graph.index(list, 0))
                .map(|first| self.graph.to_value(first))
        };
        first_of("examples")
            .or_else(|| first_of("enum"))
            .or_else(|| self.value("default"))
    }
}

fn type_candidates(graph: &SchemaGraph, type_node: NodeId) -> Vec<&str> {
    match graph.node(type_node) {
        Node::String(s) => vec![s.as_str()],
        Node::Array(candidates) => candidates
            .iter()
            .filter_map(|candidate| graph.as_str(*candidate))
            .collect(),
        _ => Vec::new(),
    }
}

fn own_items(graph: &SchemaGraph, id: NodeId) -> Option<Items<'_>> {
    let tuple = |list: NodeId| {
        Items::Tuple(
            graph
                .elements(list)
                .iter()
                .map(|item| SchemaRef::Node(*item))
                .collect(),
        )
    };
    if let Some(prefix) = graph.get(id, "prefixItems").filter(|p| graph.is_array(*p)) {
        return Some(tuple(prefix));
    }
    let items = graph.get(id, "items")?;
    match graph.node(items) {
        Node::Array(_) => Some(tuple(items)),
        Node::Bool(false) => None,
        _ => Some(Items::Single(SchemaRef::Node(items))),
    }
}

/// Supplies fully resolved branches to the merger.
pub trait BranchResolver<'g> {
    /// Follow `$ref` and merge the branch's own composition.
    ///
    /// Returns `None` when the branch is already on the active path and
    /// therefore contributes nothing.
    fn resolve_branch(&mut self, branch: SchemaRef<'g>) -> Result<Option<Schema<'g>>, SampleError>;

    /// Whether advisory warnings are suppressed.
    fn quiet(&self) -> bool {
        false
    }
}

/// Build the effective schema for a node that has no `$ref`.
pub fn effective_schema<'g, R>(
    graph: &'g SchemaGraph,
    id: NodeId,
    resolver: &mut R,
) -> Result<Schema<'g>, SampleError>
where
    R: BranchResolver<'g> + ?Sized,
{
    let mut schema = Schema::own(graph, id);
    for branch in composition_branches(graph, id, resolver.quiet()) {
        if let Some(resolved) = resolver.resolve_branch(SchemaRef::Node(branch))? {
            merge_into(&mut schema, resolved, resolver)?;
        }
    }
    Ok(schema)
}

/// Branches merged into a node, in merge order.
///
/// `if` is always treated as matching, so `else` never contributes.
fn composition_branches(graph: &SchemaGraph, id: NodeId, quiet: bool) -> Vec<NodeId> {
    let mut branches = Vec::new();

    if let Some(all_of) = graph.get(id, "allOf") {
        branches.extend_from_slice(graph.elements(all_of));
    }

    if let Some(condition) = graph.get(id, "if") {
        branches.push(condition);
        branches.extend(graph.get(id, "then"));
    }

    let first = |keyword: &str| {
        graph
            .get(id, keyword)
            .and_then(|list| graph.index(list, 0))
    };
    match (first("oneOf"), first("anyOf")) {
        (Some(one), any) => {
            if any.is_some() && !quiet {
                tracing::warn!(
                    node = id.index(),
                    "oneOf and anyOf on the same schema, anyOf ignored"
                );
            }
            branches.push(one);
        }
        (None, Some(any)) => branches.push(any),
        (None, None) => {}
    }

    branches
}

/// Merge `other` into `target`; `target` takes precedence.
pub fn merge_into<'g, R>(
    target: &mut Schema<'g>,
    other: Schema<'g>,
    resolver: &mut R,
) -> Result<(), SampleError>
where
    R: BranchResolver<'g> + ?Sized,
{
    let Schema {
        types,
        properties,
        additional_properties,
        items,
        required,
        read_only,
        write_only,
        keywords,
        declared,
        ..
    } = other;

    if target.types.is_empty() {
        target.types = types;
    } else if let (Some(mine), Some(theirs)) = (target.types.first(), types.first()) {
        if mine != theirs && !resolver.quiet() {
            tracing::warn!(
                kept = *mine,
                dropped = *theirs,
                "allOf: schemas with different types can't be merged"
            );
        }
    }

    for (name, incoming) in properties {
        match target.properties.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => merge_ref(slot, incoming, resolver)?,
            None => target.properties.push((name, incoming)),
        }
    }

    if target.additional_properties.is_none() {
        target.additional_properties = additional_properties;
    }

    if target.items.is_none() {
        target.items = items;
    } else if let (Some(Items::Single(slot)), Some(Items::Single(incoming))) =
        (target.items.as_mut(), items)
    {
        merge_ref(slot, incoming, resolver)?;
    }

    for name in required {
        if !target.required.contains(&name) {
            target.required.push(name);
        }
    }

    target.read_only |= read_only;
    target.write_only |= write_only;

    for (name, id) in keywords {
        if target.keyword(name).is_none() {
            target.keywords.push((name, id));
        }
    }
    for name in declared {
        if !target.declared.contains(&name) {
            target.declared.push(name);
        }
    }

    Ok(())
}

/// Deep-merge two subschemas declared under the same name.
///
/// When one side is truncated by the cycle guard the other is kept as is.
fn merge_ref<'g, R>(
    slot: &mut SchemaRef<'g>,
    incoming: SchemaRef<'g>,
    resolver: &mut R,
) -> Result<(), SampleError>
where
    R: BranchResolver<'g> + ?Sized,
{
    let mine = resolver.resolve_branch(slot.clone())?;
    let theirs = resolver.resolve_branch(incoming)?;
    match (mine, theirs) {
        (Some(mut base), Some(other)) => {
            merge_into(&mut base, other, resolver)?;
            *slot = SchemaRef::Merged(Box::new(base));
        }
        (None, Some(other)) => *slot = SchemaRef::Merged(Box::new(other)),
        (_, None) => {}
    }
    Ok(())
}
