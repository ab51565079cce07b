//! Schema object graph.
//!
//! Schemas handed to the sampler are object graphs, not trees: the same
//! subschema may hang under several parents, and a caller may even make a
//! node its own descendant. `serde_json::Value` cannot express either, so
//! nodes live in an arena and are addressed by [`NodeId`]. Two handles are
//! the same schema exactly when they are equal; structurally identical nodes
//! added separately stay distinct.

use serde_json::{Map, Number, Value};

use crate::error::GraphError;

/// Identity of a node inside a [`SchemaGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single JSON node. Containers hold handles, never values.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<NodeId>),
    /// Members in insertion order. Keys are unique.
    Object(Vec<(String, NodeId)>),
}

impl Node {
    /// JSON type name of this node.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }
}

static NULL_NODE: Node = Node::Null;

/// Arena owning every node of one or more schema documents.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    nodes: Vec<Node>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a JSON tree, returning the graph and the root handle.
    pub fn from_value(value: &Value) -> (Self, NodeId) {
        let mut graph = Self::new();
        let root = graph.import(value);
        (graph, root)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node and return its fresh identity.
    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Add an empty object node.
    pub fn add_object(&mut self) -> NodeId {
        self.add(Node::Object(Vec::new()))
    }

    /// Add an empty array node.
    pub fn add_array(&mut self) -> NodeId {
        self.add(Node::Array(Vec::new()))
    }

    /// Copy a JSON tree into the graph. Every container gets a new identity.
    pub fn import(&mut self, value: &Value) -> NodeId {
        let node = match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(n.clone()),
            Value::String(s) => Node::String(s.clone()),
            Value::Array(arr) => Node::Array(arr.iter().map(|v| self.import(v)).collect()),
            Value::Object(map) => Node::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), self.import(v)))
                    .collect(),
            ),
        };
        self.add(node)
    }

    /// Set `key` on an object node, replacing any previous member in place.
    ///
    /// `child` may be any existing node, including `object` itself.
    pub fn set(
        &mut self,
        object: NodeId,
        key: impl Into<String>,
        child: NodeId,
    ) -> Result<(), GraphError> {
        self.check(child)?;
        let key = key.into();
        match self.nodes.get_mut(object.0) {
            Some(Node::Object(members)) => {
                match members.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = child,
                    None => members.push((key, child)),
                }
                Ok(())
            }
            Some(other) => Err(GraphError::NotAnObject {
                node: object.0,
                actual: other.kind_name(),
            }),
            None => Err(GraphError::UnknownNode { node: object.0 }),
        }
    }

    /// Append `child` to an array node.
    pub fn push(&mut self, array: NodeId, child: NodeId) -> Result<(), GraphError> {
        self.check(child)?;
        match self.nodes.get_mut(array.0) {
            Some(Node::Array(items)) => {
                items.push(child);
                Ok(())
            }
            Some(other) => Err(GraphError::NotAnArray {
                node: array.0,
                actual: other.kind_name(),
            }),
            None => Err(GraphError::UnknownNode { node: array.0 }),
        }
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node: id.0 })
        }
    }

    /// The node behind a handle. Foreign handles read as `null`.
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.0).unwrap_or(&NULL_NODE)
    }

    /// Object member lookup.
    pub fn get(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.entries(id)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| *child)
    }

    /// Array element lookup.
    pub fn index(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.elements(id).get(index).copied()
    }

    /// Object members, or nothing for other nodes.
    pub fn entries(&self, id: NodeId) -> &[(String, NodeId)] {
        match self.node(id) {
            Node::Object(members) => members,
            _ => &[],
        }
    }

    /// Array elements, or nothing for other nodes.
    pub fn elements(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Array(items) => items,
            _ => &[],
        }
    }

    pub fn is_object(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Object(_))
    }

    pub fn is_array(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Array(_))
    }

    pub fn as_str(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self, id: NodeId) -> Option<bool> {
        match self.node(id) {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self, id: NodeId) -> Option<f64> {
        match self.node(id) {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_u64(&self, id: NodeId) -> Option<u64> {
        match self.node(id) {
            Node::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Export a node as an owned JSON value.
    ///
    /// A literal cycle is cut with `null` where a node repeats on its own path.
    pub fn to_value(&self, id: NodeId) -> Value {
        let mut path = Vec::new();
        self.to_value_inner(id, &mut path)
    }

    fn to_value_inner(&self, id: NodeId, path: &mut Vec<NodeId>) -> Value {
        if path.contains(&id) {
            return Value::Null;
        }
        match self.node(id) {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => {
                path.push(id);
                let arr = items
                    .iter()
                    .map(|child| self.to_value_inner(*child, path))
                    .collect();
                path.pop();
                Value::Array(arr)
            }
            Node::Object(members) => {
                path.push(id);
                let mut map = Map::new();
                for (key, child) in members {
                    map.insert(key.clone(), self.to_value_inner(*child, path));
                }
                path.pop();
                Value::Object(map)
            }
        }
    }
}
