// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the pipeline graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a pipeline node.
///
/// Ids are stable, human-readable strings ("plan", "merge", ...) so the run
/// order can reference nodes across layout rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pipeline stage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Lead sources (directories, registries)
    Source,
    /// Merge/normalize steps
    Transform,
    /// Data enrichment
    Enrich,
    /// Contact validation
    Validate,
    /// Fit scoring
    Scoring,
    /// Top-K selection
    Selection,
    /// Outreach sequencing and sending
    Outreach,
    /// Exports and CRM routing
    Storage,
    /// End of the pipeline
    Terminal,
}

impl NodeKind {
    /// Get the display name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Transform => "transform",
            Self::Enrich => "enrich",
            Self::Validate => "validate",
            Self::Scoring => "scoring",
            Self::Selection => "select",
            Self::Outreach => "outreach",
            Self::Storage => "storage",
            Self::Terminal => "done",
        }
    }

    /// Get the chip icon for this kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Source => "\u{1f310}",    // globe
            Self::Transform => "\u{2699}",  // gear
            Self::Enrich => "\u{1f5c3}",    // card box
            Self::Validate => "\u{1f6e1}",  // shield
            Self::Scoring => "\u{1f4ca}",   // chart
            Self::Selection => "\u{2696}",  // scales
            Self::Outreach => "\u{2709}",   // envelope
            Self::Storage => "\u{1f5c4}",   // cabinet
            Self::Terminal => "\u{2714}",   // check
        }
    }

    /// Get the chip accent color for this kind
    pub fn chip_color(&self) -> [u8; 3] {
        match self {
            Self::Source => [125, 211, 252],
            Self::Transform => [196, 181, 253],
            Self::Enrich => [110, 231, 183],
            Self::Validate => [252, 211, 77],
            Self::Scoring => [240, 171, 252],
            Self::Selection => [253, 224, 71],
            Self::Outreach => [253, 164, 175],
            Self::Storage => [103, 232, 249],
            Self::Terminal => [110, 231, 183],
        }
    }
}

/// Visual run status of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Not yet visited this cycle
    #[default]
    Idle,
    /// Currently highlighted
    Running,
    /// Visited earlier this cycle
    Done,
    /// Reserved for styling; never produced by the animator
    Error,
}

/// A node in the pipeline graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique id, referenced by the run order
    pub id: NodeId,
    /// Display text
    pub label: String,
    /// Position in layout space (not screen pixels), immutable after construction
    pub position: [f32; 2],
    /// Accent color for the card strip and tint
    pub color: [u8; 3],
    /// Stage category
    pub kind: NodeKind,
    /// Run status; the only mutable field, owned by the status animator
    pub status: NodeStatus,
    /// Optional secondary line under the label
    pub note: Option<String>,
}

impl Node {
    /// Create a new idle node at the origin
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: [0.0, 0.0],
            color: [148, 163, 184],
            kind,
            status: NodeStatus::Idle,
            note: None,
        }
    }

    /// Set the layout-space position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Set the accent color
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the secondary note line
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// The pipeline graph: an insertion-ordered registry of display nodes.
///
/// Paint order and "first node" seeding both follow insertion order, so the
/// container is an [`IndexMap`] rather than a hash map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineGraph {
    /// Graph name
    pub name: String,
    /// Nodes by id
    nodes: IndexMap<NodeId, Node>,
}

impl PipelineGraph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
        }
    }

    /// Add a node to the graph, replacing any node with the same id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Get a node by id
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by id
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether the graph contains a node with this id
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all nodes mutably, in insertion order
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Get all node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set the status of a node; returns `false` if the id is unknown
    pub fn set_status(&mut self, id: &NodeId, status: NodeStatus) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.status = status;
                true
            }
            None => false,
        }
    }

    /// Reset every node back to [`NodeStatus::Idle`]
    pub fn reset_statuses(&mut self) {
        for node in self.nodes.values_mut() {
            node.status = NodeStatus::Idle;
        }
    }

    /// Count nodes currently in the given status
    pub fn count_with_status(&self, status: NodeStatus) -> usize {
        self.nodes.values().filter(|n| n.status == status).count()
    }
}

impl Default for PipelineGraph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = Node::new("plan", "Plan", NodeKind::Transform)
            .with_position(-520.0, -60.0)
            .with_color([240, 34, 71]);
        assert_eq!(node.id.as_str(), "plan");
        assert_eq!(node.status, NodeStatus::Idle);
        assert_eq!(node.position, [-520.0, -60.0]);
        assert!(node.note.is_none());
    }

    #[test]
    fn test_graph_insertion_order() {
        let mut graph = PipelineGraph::new("test");
        graph.add_node(Node::new("a", "A", NodeKind::Source));
        graph.add_node(Node::new("b", "B", NodeKind::Transform));
        graph.add_node(Node::new("c", "C", NodeKind::Terminal));

        let ids: Vec<_> = graph.node_ids().map(NodeId::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_insert_replaces() {
        let mut graph = PipelineGraph::new("test");
        graph.add_node(Node::new("a", "first", NodeKind::Source));
        graph.add_node(Node::new("a", "second", NodeKind::Source));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node(&"a".into()).unwrap().label, "second");
    }

    #[test]
    fn test_status_updates() {
        let mut graph = PipelineGraph::new("test");
        graph.add_node(Node::new("a", "A", NodeKind::Source));

        assert!(graph.set_status(&"a".into(), NodeStatus::Running));
        assert_eq!(graph.count_with_status(NodeStatus::Running), 1);

        // Unknown ids are a silent no-op for callers that ignore the flag.
        assert!(!graph.set_status(&"ghost".into(), NodeStatus::Running));

        graph.reset_statuses();
        assert_eq!(graph.count_with_status(NodeStatus::Idle), 1);
    }

    #[test]
    fn test_graph_serialization() {
        let mut graph = PipelineGraph::new("roundtrip");
        graph.add_node(
            Node::new("a", "A", NodeKind::Source)
                .with_position(10.0, -20.0)
                .with_note("note"),
        );

        let ron = ron::to_string(&graph).unwrap();
        let loaded: PipelineGraph = ron::from_str(&ron).unwrap();
        assert_eq!(loaded.name, graph.name);
        assert_eq!(loaded.node_count(), 1);
        assert_eq!(loaded.node(&"a".into()).unwrap().position, [10.0, -20.0]);
    }
}
