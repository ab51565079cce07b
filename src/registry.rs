//! Type sampler registry.
//!
//! Leaf samplers turn a resolved, type-decided [`Schema`] into a value.
//! Composite samplers recurse through [`Traversal::visit_child`]. The
//! registry is keyed by type name and open: hosts can override a built-in
//! type or bind a new one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SampleError;
use crate::merge::Schema;
use crate::samplers::{ArraySampler, BooleanSampler, NumberSampler, ObjectSampler, StringSampler};
use crate::traverse::Traversal;

/// Produces a value for one effective type.
pub trait TypeSampler: Send + Sync {
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError>;
}

/// Adapter for plain functions and closures.
struct FnSampler<F>(F);

impl<F> TypeSampler for FnSampler<F>
where
    F: for<'g, 't> Fn(&Schema<'g>, &mut Traversal<'t, 'g>) -> Result<Value, SampleError>
        + Send
        + Sync,
{
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        (self.0)(schema, traversal)
    }
}

/// Mapping from type name to sampler.
#[derive(Clone)]
pub struct SamplerRegistry {
    samplers: HashMap<String, Arc<dyn TypeSampler>>,
}

impl SamplerRegistry {
    /// A registry with no samplers; every type samples as `null`.
    pub fn empty() -> Self {
        Self {
            samplers: HashMap::new(),
        }
    }

    /// Bind `type_name` to `sampler`, replacing any previous binding.
    pub fn register(&mut self, type_name: impl Into<String>, sampler: impl TypeSampler + 'static) {
        self.samplers.insert(type_name.into(), Arc::new(sampler));
    }

    /// Bind `type_name` to a function.
    pub fn register_fn<F>(&mut self, type_name: impl Into<String>, sampler: F)
    where
        F: for<'g, 't> Fn(&Schema<'g>, &mut Traversal<'t, 'g>) -> Result<Value, SampleError>
            + Send
            + Sync
            + 'static,
    {
        self.register(type_name, FnSampler(sampler));
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn TypeSampler> {
        self.samplers.get(type_name).map(|s| s.as_ref())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.samplers.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.samplers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SamplerRegistry {
    /// The built-in samplers. `integer` shares the number sampler.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("array", ArraySampler);
        registry.register("boolean", BooleanSampler);
        registry.register("integer", NumberSampler);
        registry.register("number", NumberSampler);
        registry.register("object", ObjectSampler);
        registry.register("string", StringSampler);
        registry
    }
}

impl fmt::Debug for SamplerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplerRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
