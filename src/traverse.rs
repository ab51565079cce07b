//! Schema traversal - walks the schema graph once and builds the sample.
//!
//! Per visited node: cycle check, step budget, `$ref` resolution, merging,
//! type decision, literal short-circuit, then dispatch to the registered
//! sampler. All traversal state lives in a [`Traversal`] created for one
//! `sample` call, so concurrent calls never share anything.

use std::sync::OnceLock;

use serde_json::Value;

use crate::budget::Budget;
use crate::cycle::CycleGuard;
use crate::error::SampleError;
use crate::graph::{NodeId, SchemaGraph};
use crate::infer::infer_type;
use crate::merge::{effective_schema, BranchResolver, Schema, SchemaRef};
use crate::pointer::resolve_ref;
use crate::registry::{SamplerRegistry, TypeSampler};
use crate::types::{neutral_value, SampleOptions};

/// Result of visiting one subschema.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    pub value: Value,
    /// The subschema was marked `readOnly`.
    pub read_only: bool,
    /// The subschema was marked `writeOnly`.
    pub write_only: bool,
}

impl Sampled {
    fn truncated(type_name: Option<&str>) -> Self {
        Self {
            value: neutral_value(type_name),
            read_only: false,
            write_only: false,
        }
    }
}

/// Per-call traversal state.
pub struct Traversal<'a, 'g> {
    graph: &'g SchemaGraph,
    document: NodeId,
    options: &'a SampleOptions,
    registry: &'a SamplerRegistry,
    guard: CycleGuard,
    budget: Budget,
    depth: usize,
}

impl<'a, 'g> Traversal<'a, 'g> {
    fn new(
        graph: &'g SchemaGraph,
        document: NodeId,
        options: &'a SampleOptions,
        registry: &'a SamplerRegistry,
    ) -> Self {
        Self {
            graph,
            document,
            options,
            registry,
            guard: CycleGuard::new(),
            budget: Budget::new(options.ticks),
            depth: 0,
        }
    }

    pub fn graph(&self) -> &'g SchemaGraph {
        self.graph
    }

    pub fn options(&self) -> &SampleOptions {
        self.options
    }

    /// Current composite nesting level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Visit a nested subschema (property, item, ...) one level deeper.
    ///
    /// Past `max_sample_depth` a composite child is truncated to its neutral
    /// value; scalar leaves are still sampled. A truncated child costs one
    /// step like any other visit.
    pub fn visit_child(&mut self, child: SchemaRef<'g>) -> Result<Sampled, SampleError> {
        if self.depth >= self.options.max_sample_depth {
            let type_name = self.neutral_type(&child);
            if !is_scalar_type(type_name) {
                self.budget.tick()?;
                tracing::debug!(depth = self.depth, "maximum sample depth reached, truncating");
                return Ok(Sampled::truncated(type_name));
            }
        }
        self.depth += 1;
        let result = self.visit(child);
        self.depth -= 1;
        result
    }

    /// Visit a subschema at the current depth.
    pub fn visit(&mut self, schema: SchemaRef<'g>) -> Result<Sampled, SampleError> {
        match schema {
            SchemaRef::Node(id) => self.visit_node(id),
            SchemaRef::Merged(schema) => {
                self.budget.tick()?;
                self.sample_schema(*schema)
            }
        }
    }

    fn visit_node(&mut self, id: NodeId) -> Result<Sampled, SampleError> {
        self.budget.tick()?;
        if !self.guard.enter(id) {
            tracing::debug!(
                node = id.index(),
                path_len = self.guard.depth(),
                "circular schema, truncating"
            );
            return Ok(Sampled::truncated(self.neutral_type(&SchemaRef::Node(id))));
        }
        let result = self.visit_entered(id);
        self.guard.leave(id);
        result
    }

    fn visit_entered(&mut self, id: NodeId) -> Result<Sampled, SampleError> {
        if let Some(target) = self.reference(id)? {
            let mut sampled = self.visit_node(target)?;
            sampled.read_only |= self.flag(id, "readOnly");
            sampled.write_only |= self.flag(id, "writeOnly");
            return Ok(sampled);
        }

        let schema = effective_schema(self.graph, id, self)?;
        self.sample_schema(schema)
    }

    fn sample_schema(&mut self, schema: Schema<'g>) -> Result<Sampled, SampleError> {
        let read_only = schema.read_only;
        let write_only = schema.write_only;

        let value = match schema.literal() {
            Some(literal) => literal,
            None => {
                let registry = self.registry;
                match schema.effective_type().and_then(|t| registry.get(t)) {
                    Some(sampler) => sampler.sample(&schema, self)?,
                    None => Value::Null,
                }
            }
        };

        Ok(Sampled {
            value,
            read_only,
            write_only,
        })
    }

    /// The `$ref` target of a node, if it has one.
    fn reference(&self, id: NodeId) -> Result<Option<NodeId>, SampleError> {
        match self.graph.get(id, "$ref").and_then(|r| self.graph.as_str(r)) {
            Some(reference) => resolve_ref(self.graph, self.document, reference).map(Some),
            None => Ok(None),
        }
    }

    fn flag(&self, id: NodeId, keyword: &str) -> bool {
        self.graph
            .get(id, keyword)
            .and_then(|f| self.graph.as_bool(f))
            .unwrap_or(false)
    }

    /// Type used for a truncated subschema. Looks through one `$ref` hop.
    fn neutral_type(&self, schema: &SchemaRef<'g>) -> Option<&'g str> {
        match schema {
            SchemaRef::Merged(merged) => merged.effective_type(),
            SchemaRef::Node(id) => {
                let target = self.reference(*id).ok().flatten().unwrap_or(*id);
                infer_type(self.graph, target)
            }
        }
    }

    fn resolve_entered(&mut self, id: NodeId) -> Result<Option<Schema<'g>>, SampleError> {
        if let Some(target) = self.reference(id)? {
            let read_only = self.flag(id, "readOnly");
            let write_only = self.flag(id, "writeOnly");
            return Ok(self
                .resolve_branch(SchemaRef::Node(target))?
                .map(|mut schema| {
                    schema.read_only |= read_only;
                    schema.write_only |= write_only;
                    schema
                }));
        }

        effective_schema(self.graph, id, self).map(Some)
    }
}

/// Types whose samples never recurse.
fn is_scalar_type(type_name: Option<&str>) -> bool {
    matches!(type_name, Some("string" | "number" | "integer" | "boolean" | "null"))
}

impl<'g> BranchResolver<'g> for Traversal<'_, 'g> {
    fn resolve_branch(
        &mut self,
        branch: SchemaRef<'g>,
    ) -> Result<Option<Schema<'g>>, SampleError> {
        match branch {
            SchemaRef::Merged(schema) => Ok(Some(*schema)),
            SchemaRef::Node(id) => {
                self.budget.tick()?;
                if !self.guard.enter(id) {
                    tracing::debug!(node = id.index(), "circular composition branch skipped");
                    return Ok(None);
                }
                let result = self.resolve_entered(id);
                self.guard.leave(id);
                result
            }
        }
    }

    fn quiet(&self) -> bool {
        self.options.quiet
    }
}

/// Sample generator with a configurable sampler registry.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    registry: SamplerRegistry,
}

impl Sampler {
    /// A sampler with the built-in type samplers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: SamplerRegistry) -> Self {
        Self { registry }
    }

    /// Bind `type_name` to `sampler`, replacing any built-in.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        sampler: impl TypeSampler + 'static,
    ) -> &mut Self {
        self.registry.register(type_name, sampler);
        self
    }

    pub fn registry(&self) -> &SamplerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SamplerRegistry {
        &mut self.registry
    }

    /// Sample `schema`, resolving `$ref` against the schema itself.
    pub fn sample(
        &self,
        graph: &SchemaGraph,
        schema: NodeId,
        options: &SampleOptions,
    ) -> Result<Value, SampleError> {
        self.sample_with_document(graph, schema, options, schema)
    }

    /// Sample `schema`, resolving `$ref` against `document`.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidReference` for an unresolvable `$ref`
    /// and `SampleError::SchemaSizeExceeded` when `options.ticks` runs out.
    /// No partial sample is returned on failure.
    pub fn sample_with_document(
        &self,
        graph: &SchemaGraph,
        schema: NodeId,
        options: &SampleOptions,
        document: NodeId,
    ) -> Result<Value, SampleError> {
        let mut traversal = Traversal::new(graph, document, options, &self.registry);
        let sampled = traversal.visit(SchemaRef::Node(schema))?;
        tracing::trace!(
            steps = traversal.budget.used(),
            remaining = traversal.budget.remaining(),
            "sample finished"
        );
        Ok(sampled.value)
    }
}

fn default_sampler() -> &'static Sampler {
    static DEFAULT: OnceLock<Sampler> = OnceLock::new();
    DEFAULT.get_or_init(Sampler::new)
}

/// Sample `schema` with the built-in samplers.
///
/// # Example
///
/// ```
/// use json_schema_sampler::{sample, SampleOptions, SchemaGraph};
/// use serde_json::json;
///
/// let (graph, root) = SchemaGraph::from_value(&json!({
///     "type": "object",
///     "properties": { "title": { "type": "string", "default": "Example" } }
/// }));
/// let value = sample(&graph, root, &SampleOptions::default()).unwrap();
/// assert_eq!(value, json!({ "title": "Example" }));
/// ```
pub fn sample(
    graph: &SchemaGraph,
    schema: NodeId,
    options: &SampleOptions,
) -> Result<Value, SampleError> {
    default_sampler().sample(graph, schema, options)
}

/// Sample `schema` with the built-in samplers, resolving `$ref` against
/// `document`.
pub fn sample_with_document(
    graph: &SchemaGraph,
    schema: NodeId,
    options: &SampleOptions,
    document: NodeId,
) -> Result<Value, SampleError> {
    default_sampler().sample_with_document(graph, schema, options, document)
}

/// Sample a plain JSON schema tree.
pub fn sample_value(schema: &Value, options: &SampleOptions) -> Result<Value, SampleError> {
    let (graph, root) = SchemaGraph::from_value(schema);
    sample(&graph, root, options)
}
