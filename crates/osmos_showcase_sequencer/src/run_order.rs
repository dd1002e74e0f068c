// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed cyclic visiting order over node ids.

use osmos_showcase_graph::{NodeId, PipelineGraph};
use serde::{Deserialize, Serialize};

/// An ordered sequence of node ids defining a cyclic traversal.
///
/// Fixed at construction. May cover a subset of a graph's nodes; ids that do
/// not exist in the graph are tolerated (the animator skips them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOrder {
    steps: Vec<NodeId>,
}

impl RunOrder {
    /// Create a run order from an id sequence
    pub fn new(steps: Vec<NodeId>) -> Self {
        Self { steps }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the order has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The id at `index`, if in range
    pub fn step(&self, index: usize) -> Option<&NodeId> {
        self.steps.get(index)
    }

    /// The wrap-aware successor of `index`
    pub fn next_index(&self, index: usize) -> usize {
        if self.steps.is_empty() {
            0
        } else {
            (index + 1) % self.steps.len()
        }
    }

    /// Iterate the steps in order
    pub fn steps(&self) -> impl Iterator<Item = &NodeId> {
        self.steps.iter()
    }

    /// Ids in this order that do not exist in `graph`.
    ///
    /// At runtime such steps are a silent skip; this helper exists for tests
    /// and startup diagnostics.
    pub fn missing_from(&self, graph: &PipelineGraph) -> Vec<NodeId> {
        self.steps
            .iter()
            .filter(|id| !graph.contains(id))
            .cloned()
            .collect()
    }
}

impl From<Vec<NodeId>> for RunOrder {
    fn from(steps: Vec<NodeId>) -> Self {
        Self::new(steps)
    }
}
