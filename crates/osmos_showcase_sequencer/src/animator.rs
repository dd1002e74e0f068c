// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cyclic status animator.

use crate::run_order::RunOrder;
use osmos_showcase_graph::{NodeStatus, PipelineGraph};

/// Default tick interval in seconds
pub const DEFAULT_TICK_INTERVAL: f32 = 0.72;

/// Smallest accepted tick interval; guards a zero or negative config value
const MIN_TICK_INTERVAL: f32 = 0.05;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not ticking
    #[default]
    Stopped,
    /// Advancing on each elapsed interval
    Playing,
}

/// Timed loop that walks a [`RunOrder`] and flips node statuses.
///
/// The state is an index into the run order, wrapping on overflow. Each tick
/// marks the next node `Running` and the previous one `Done`; any stray
/// `Running` node is also demoted to `Done`, so a missed frame can never
/// leave two highlights behind. Nodes already `Done` never revert to `Idle`
/// within a cycle. There is no terminal state: the walk loops while the
/// owning view is alive, and stops with it.
#[derive(Debug, Clone)]
pub struct StatusAnimator {
    order: RunOrder,
    interval: f32,
    cursor: usize,
    elapsed: f32,
    state: PlaybackState,
}

impl StatusAnimator {
    /// Create a stopped animator over `order`, ticking every `interval_secs`
    pub fn new(order: RunOrder, interval_secs: f32) -> Self {
        Self {
            order,
            interval: interval_secs.max(MIN_TICK_INTERVAL),
            cursor: 0,
            elapsed: 0.0,
            state: PlaybackState::Stopped,
        }
    }

    /// The visiting order
    pub fn order(&self) -> &RunOrder {
        &self.order
    }

    /// The tick interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Current index into the run order
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the animator is ticking
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Seed the graph and begin ticking: cursor 0, the first run-order node
    /// `Running`, every other node `Idle`.
    ///
    /// Also used to reseed after a layout swap.
    pub fn start(&mut self, graph: &mut PipelineGraph) {
        self.cursor = 0;
        self.elapsed = 0.0;
        graph.reset_statuses();

        if let Some(first) = self.order.step(0) {
            graph.set_status(first, NodeStatus::Running);
            self.state = PlaybackState::Playing;
        } else {
            self.state = PlaybackState::Stopped;
        }
    }

    /// Halt ticking. Subsequent [`update`] calls mutate nothing.
    ///
    /// [`update`]: StatusAnimator::update
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.elapsed = 0.0;
    }

    /// Advance the elapsed-time gate by `dt` seconds; ticks at most once per
    /// call (per-frame cadence). Returns `true` when a tick fired.
    pub fn update(&mut self, dt: f32, graph: &mut PipelineGraph) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed < self.interval {
            return false;
        }

        // Residual time is dropped on purpose: a late frame advances one
        // step, never several.
        self.elapsed = 0.0;
        self.tick(graph);
        true
    }

    fn tick(&mut self, graph: &mut PipelineGraph) {
        let next = self.order.next_index(self.cursor);
        let current_id = self.order.step(self.cursor);
        let next_id = self.order.step(next);

        for node in graph.nodes_mut() {
            if Some(&node.id) == next_id {
                node.status = NodeStatus::Running;
            } else if Some(&node.id) == current_id {
                node.status = NodeStatus::Done;
            } else if node.status == NodeStatus::Running {
                node.status = NodeStatus::Done;
            }
        }

        self.cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osmos_showcase_graph::{Node, NodeId, NodeKind};

    fn graph_with(ids: &[&str]) -> PipelineGraph {
        let mut graph = PipelineGraph::new("test");
        for id in ids {
            graph.add_node(Node::new(*id, id.to_uppercase(), NodeKind::Source));
        }
        graph
    }

    fn order(ids: &[&str]) -> RunOrder {
        RunOrder::new(ids.iter().map(|id| NodeId::from(*id)).collect())
    }

    fn status(graph: &PipelineGraph, id: &str) -> NodeStatus {
        graph.node(&id.into()).unwrap().status
    }

    /// Advance far enough for exactly one tick
    fn one_tick(animator: &mut StatusAnimator, graph: &mut PipelineGraph) {
        assert!(animator.update(animator.interval(), graph));
    }

    #[test]
    fn test_start_seeds_first_running() {
        let mut graph = graph_with(&["a", "b", "c"]);
        let mut animator = StatusAnimator::new(order(&["a", "b", "c"]), 0.72);
        animator.start(&mut graph);

        assert!(animator.is_playing());
        assert_eq!(status(&graph, "a"), NodeStatus::Running);
        assert_eq!(status(&graph, "b"), NodeStatus::Idle);
        assert_eq!(status(&graph, "c"), NodeStatus::Idle);
    }

    #[test]
    fn test_tick_sequence_and_full_cycle() {
        let mut graph = graph_with(&["a", "b", "c"]);
        let mut animator = StatusAnimator::new(order(&["a", "b", "c"]), 0.72);
        animator.start(&mut graph);

        one_tick(&mut animator, &mut graph);
        assert_eq!(status(&graph, "a"), NodeStatus::Done);
        assert_eq!(status(&graph, "b"), NodeStatus::Running);
        assert_eq!(status(&graph, "c"), NodeStatus::Idle);

        one_tick(&mut animator, &mut graph);
        assert_eq!(status(&graph, "c"), NodeStatus::Running);

        // One full cycle: back at the first node, everything else done.
        one_tick(&mut animator, &mut graph);
        assert_eq!(animator.cursor(), 0);
        assert_eq!(status(&graph, "a"), NodeStatus::Running);
        assert_eq!(status(&graph, "b"), NodeStatus::Done);
        assert_eq!(status(&graph, "c"), NodeStatus::Done);
    }

    #[test]
    fn test_cyclic_after_length_ticks() {
        let ids = ["a", "b", "c", "d", "e"];
        let mut graph = graph_with(&ids);
        let mut animator = StatusAnimator::new(order(&ids), 0.1);
        animator.start(&mut graph);

        for _ in 0..ids.len() {
            one_tick(&mut animator, &mut graph);
        }
        assert_eq!(animator.cursor(), 0);
        assert_eq!(status(&graph, "a"), NodeStatus::Running);
    }

    #[test]
    fn test_exactly_one_running_every_tick() {
        let ids = ["a", "b", "c", "d"];
        let mut graph = graph_with(&ids);
        let mut animator = StatusAnimator::new(order(&ids), 0.1);
        animator.start(&mut graph);

        for _ in 0..(ids.len() * 2 + 1) {
            assert_eq!(graph.count_with_status(NodeStatus::Running), 1);
            one_tick(&mut animator, &mut graph);
        }
    }

    #[test]
    fn test_done_never_reverts_to_idle() {
        let ids = ["a", "b", "c"];
        let mut graph = graph_with(&ids);
        let mut animator = StatusAnimator::new(order(&ids), 0.1);
        animator.start(&mut graph);

        for _ in 0..(ids.len() * 3) {
            one_tick(&mut animator, &mut graph);
            // After the first full cycle every node is either running or done.
        }
        assert_eq!(graph.count_with_status(NodeStatus::Idle), 0);
    }

    #[test]
    fn test_interval_gating_accumulates() {
        let mut graph = graph_with(&["a", "b"]);
        let mut animator = StatusAnimator::new(order(&["a", "b"]), 0.72);
        animator.start(&mut graph);

        assert!(!animator.update(0.3, &mut graph));
        assert!(!animator.update(0.3, &mut graph));
        assert!(animator.update(0.3, &mut graph));
        assert_eq!(status(&graph, "b"), NodeStatus::Running);
    }

    #[test]
    fn test_late_frame_advances_once() {
        let mut graph = graph_with(&["a", "b", "c"]);
        let mut animator = StatusAnimator::new(order(&["a", "b", "c"]), 0.1);
        animator.start(&mut graph);

        // A frame worth many intervals still moves a single step.
        assert!(animator.update(5.0, &mut graph));
        assert_eq!(animator.cursor(), 1);
        assert_eq!(graph.count_with_status(NodeStatus::Running), 1);
    }

    #[test]
    fn test_unknown_id_is_silently_skipped() {
        let mut graph = graph_with(&["a", "b"]);
        let mut animator = StatusAnimator::new(order(&["a", "ghost", "b"]), 0.1);
        animator.start(&mut graph);

        one_tick(&mut animator, &mut graph);
        assert_eq!(status(&graph, "a"), NodeStatus::Done);
        // The ghost step highlights nothing; the walk continues regardless.
        one_tick(&mut animator, &mut graph);
        assert_eq!(status(&graph, "b"), NodeStatus::Running);
    }

    #[test]
    fn test_single_step_order_stays_running() {
        let mut graph = graph_with(&["a"]);
        let mut animator = StatusAnimator::new(order(&["a"]), 0.1);
        animator.start(&mut graph);

        one_tick(&mut animator, &mut graph);
        assert_eq!(status(&graph, "a"), NodeStatus::Running);
    }

    #[test]
    fn test_empty_order_never_plays() {
        let mut graph = graph_with(&["a"]);
        let mut animator = StatusAnimator::new(RunOrder::new(Vec::new()), 0.1);
        animator.start(&mut graph);

        assert!(!animator.is_playing());
        assert!(!animator.update(10.0, &mut graph));
        assert_eq!(status(&graph, "a"), NodeStatus::Idle);
    }

    #[test]
    fn test_stop_ceases_all_mutation() {
        let mut graph = graph_with(&["a", "b"]);
        let mut animator = StatusAnimator::new(order(&["a", "b"]), 0.1);
        animator.start(&mut graph);
        one_tick(&mut animator, &mut graph);

        animator.stop();
        let before: Vec<_> = graph.nodes().map(|node| node.status).collect();
        for _ in 0..10 {
            assert!(!animator.update(1.0, &mut graph));
        }
        let after: Vec<_> = graph.nodes().map(|node| node.status).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restart_reseeds_after_swap() {
        // Simulates a breakpoint crossing: new graph, new order, reseed.
        let mut graph = graph_with(&["a", "b", "c"]);
        let mut animator = StatusAnimator::new(order(&["a", "b", "c"]), 0.1);
        animator.start(&mut graph);
        one_tick(&mut animator, &mut graph);
        one_tick(&mut animator, &mut graph);

        let mut swapped = graph_with(&["x", "y"]);
        let mut animator = StatusAnimator::new(order(&["x", "y"]), 0.1);
        animator.start(&mut swapped);

        assert_eq!(animator.cursor(), 0);
        assert_eq!(status(&swapped, "x"), NodeStatus::Running);
        assert_eq!(status(&swapped, "y"), NodeStatus::Idle);
    }

    #[test]
    fn test_zero_interval_clamped() {
        let animator = StatusAnimator::new(order(&["a"]), 0.0);
        assert!(animator.interval() > 0.0);
    }
}
