//! Cycle detection on the active traversal path.
//!
//! A node is circular only when it reappears among its own ancestors. The
//! same node reached again from a sibling branch is sampled in full.

use std::collections::HashSet;

use crate::graph::NodeId;

/// Identities currently on the recursion path.
#[derive(Debug, Default)]
pub struct CycleGuard {
    stack: Vec<NodeId>,
    active: HashSet<NodeId>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `id` onto the path.
    ///
    /// Returns `false` (and leaves the path untouched) when `id` is already an
    /// ancestor, meaning descent must be truncated.
    pub fn enter(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.active.insert(id);
        self.stack.push(id);
        true
    }

    /// Pop `id`, which must be the innermost entered node.
    pub fn leave(&mut self, id: NodeId) {
        debug_assert_eq!(self.stack.last(), Some(&id));
        self.stack.pop();
        self.active.remove(&id);
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.active.contains(&id)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
