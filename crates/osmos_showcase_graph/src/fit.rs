// SPDX-License-Identifier: MIT OR Apache-2.0
//! Auto-fit viewport transform.
//!
//! The canvas is locked (no pan or zoom), so the only camera logic is a
//! recomputed-from-scratch fit: scale the bounding box of all node footprints
//! to the panel and center it.

use crate::node::Node;
use egui::{Pos2, Rect, Vec2};

/// Minimum span used wherever geometry could collapse to zero
const MIN_EXTENT: f32 = 1.0;

/// Node footprint and fit constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    /// Width and height of a node card, centered on its position
    pub node_size: Vec2,
    /// Total padding reserved inside the panel, split across both sides
    pub padding: f32,
    /// Lower clamp for the computed scale
    pub min_scale: f32,
    /// Upper clamp for the computed scale
    pub max_scale: f32,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            node_size: Vec2::new(168.0, 64.0),
            padding: 120.0,
            min_scale: 0.22,
            max_scale: 2.5,
        }
    }
}

/// Uniform scale + translation mapping layout space to screen space.
///
/// Derived state: recomputed whole whenever the node set or panel changes,
/// never updated incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor
    pub scale: f32,
    /// Screen-space offset applied after scaling
    pub translation: Vec2,
}

impl ViewTransform {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Convert a layout-space position to screen space
    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            pos.x * self.scale + self.translation.x,
            pos.y * self.scale + self.translation.y,
        )
    }

    /// Convert a screen-space position back to layout space
    pub fn to_layout(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            (pos.x - self.translation.x) / self.scale,
            (pos.y - self.translation.y) / self.scale,
        )
    }

    /// Map a layout-space rect to screen space
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_size(self.to_screen(rect.min), rect.size() * self.scale)
    }
}

/// Axis-aligned bounding box over all node footprints, in layout space
pub fn bounding_box<'a>(
    nodes: impl IntoIterator<Item = &'a Node>,
    node_size: Vec2,
) -> Option<Rect> {
    let half = node_size * 0.5;
    let mut bounds: Option<Rect> = None;
    for node in nodes {
        let center = Pos2::new(node.position[0], node.position[1]);
        let rect = Rect::from_min_max(center - half, center + half);
        bounds = Some(match bounds {
            Some(b) => b.union(rect),
            None => rect,
        });
    }
    bounds
}

/// Compute the transform that centers all node footprints in `panel` and
/// scales them to fit within the padded area.
///
/// Degenerate geometry (a single node, zero footprint, a collapsed panel)
/// never divides by zero: spans are floored at a minimum extent, and a
/// non-finite result falls back to scale 1 before clamping. Never mutates
/// node data.
pub fn fit_to_rect<'a>(
    nodes: impl IntoIterator<Item = &'a Node>,
    panel: Rect,
    params: &FitParams,
) -> ViewTransform {
    let Some(bounds) = bounding_box(nodes, params.node_size) else {
        return ViewTransform {
            scale: 1.0f32.clamp(params.min_scale, params.max_scale),
            translation: panel.center().to_vec2(),
        };
    };

    let graph_w = bounds.width().max(MIN_EXTENT);
    let graph_h = bounds.height().max(MIN_EXTENT);
    let avail_w = (panel.width() - params.padding).max(MIN_EXTENT);
    let avail_h = (panel.height() - params.padding).max(MIN_EXTENT);

    let mut scale = (avail_w / graph_w).min(avail_h / graph_h);
    if !scale.is_finite() || scale <= 0.0 {
        scale = 1.0;
    }
    let scale = scale.clamp(params.min_scale, params.max_scale);

    let center = bounds.center();
    let translation = panel.center().to_vec2() - center.to_vec2() * scale;

    ViewTransform { scale, translation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeKind};
    use proptest::prelude::*;

    fn node_at(id: &str, x: f32, y: f32) -> Node {
        Node::new(id, id.to_uppercase(), NodeKind::Source).with_position(x, y)
    }

    const EPS: f32 = 1e-3;

    #[test]
    fn test_two_node_panel_scenario() {
        // Zero footprint isolates the position bounding box: A@(0,0), B@(100,0)
        // in a 200x200 panel with padding 40 gives scale min(160/100, large)
        // and centers the midpoint (50, 0) on (100, 100).
        let nodes = [node_at("a", 0.0, 0.0), node_at("b", 100.0, 0.0)];
        let params = FitParams {
            node_size: Vec2::ZERO,
            padding: 40.0,
            ..FitParams::default()
        };
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::splat(200.0));

        let t = fit_to_rect(nodes.iter(), panel, &params);
        assert!((t.scale - 1.6).abs() < EPS);

        let mapped = t.to_screen(Pos2::new(50.0, 0.0));
        assert!((mapped.x - 100.0).abs() < EPS);
        assert!((mapped.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_single_node_does_not_divide_by_zero() {
        let nodes = [node_at("only", 40.0, -80.0)];
        let params = FitParams::default();
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));

        let t = fit_to_rect(nodes.iter(), panel, &params);
        assert!(t.scale.is_finite());
        assert!(t.scale >= params.min_scale && t.scale <= params.max_scale);

        // The lone node's center maps to the panel center.
        let mapped = t.to_screen(Pos2::new(40.0, -80.0));
        assert!((mapped.x - panel.center().x).abs() < EPS);
        assert!((mapped.y - panel.center().y).abs() < EPS);
    }

    #[test]
    fn test_zero_footprint_single_node_falls_back() {
        let nodes = [node_at("only", 0.0, 0.0)];
        let params = FitParams {
            node_size: Vec2::ZERO,
            padding: 0.0,
            ..FitParams::default()
        };
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0));

        let t = fit_to_rect(nodes.iter(), panel, &params);
        assert!(t.scale.is_finite());
        assert!(t.scale >= params.min_scale && t.scale <= params.max_scale);
    }

    #[test]
    fn test_empty_set_yields_identity_scale() {
        let t = fit_to_rect(
            std::iter::empty(),
            Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0)),
            &FitParams::default(),
        );
        assert!((t.scale - 1.0).abs() < EPS);
    }

    #[test]
    fn test_wide_layout_fits_default_panel() {
        let graph = crate::layout::build_graph(crate::layout::LayoutMode::Wide);
        let params = FitParams::default();
        let panel = Rect::from_min_size(Pos2::new(12.0, 380.0), Vec2::new(1000.0, 560.0));

        let t = fit_to_rect(graph.nodes(), panel, &params);
        assert!(t.scale >= params.min_scale && t.scale <= params.max_scale);

        let bounds = bounding_box(graph.nodes(), params.node_size).unwrap();
        let mapped = t.to_screen(bounds.center());
        assert!((mapped.x - panel.center().x).abs() < EPS);
        assert!((mapped.y - panel.center().y).abs() < EPS);

        // Everything visible: the scaled bounding box fits inside the panel.
        let screen_bounds = t.rect_to_screen(bounds);
        assert!(panel.contains_rect(screen_bounds));
    }

    #[test]
    fn test_round_trip_through_layout_space() {
        let nodes = [node_at("a", -200.0, 60.0), node_at("b", 340.0, -90.0)];
        let panel = Rect::from_min_size(Pos2::new(50.0, 20.0), Vec2::new(640.0, 480.0));
        let t = fit_to_rect(nodes.iter(), panel, &FitParams::default());

        let p = Pos2::new(-200.0, 60.0);
        let back = t.to_layout(t.to_screen(p));
        assert!((back.x - p.x).abs() < EPS);
        assert!((back.y - p.y).abs() < EPS);
    }

    proptest! {
        #[test]
        fn prop_scale_always_clamped_and_finite(
            positions in prop::collection::vec((-10_000.0f32..10_000.0, -10_000.0f32..10_000.0), 1..40),
            panel_w in 1.0f32..3000.0,
            panel_h in 1.0f32..3000.0,
        ) {
            let nodes: Vec<Node> = positions
                .iter()
                .enumerate()
                .map(|(i, (x, y))| node_at(&format!("n{i}"), *x, *y))
                .collect();
            let params = FitParams::default();
            let panel = Rect::from_min_size(Pos2::ZERO, Vec2::new(panel_w, panel_h));

            let t = fit_to_rect(nodes.iter(), panel, &params);
            prop_assert!(t.scale.is_finite());
            prop_assert!(t.scale >= params.min_scale);
            prop_assert!(t.scale <= params.max_scale);
        }

        #[test]
        fn prop_centroid_maps_to_panel_center(
            positions in prop::collection::vec((-5_000.0f32..5_000.0, -5_000.0f32..5_000.0), 1..30),
            panel_w in 50.0f32..3000.0,
            panel_h in 50.0f32..3000.0,
        ) {
            let nodes: Vec<Node> = positions
                .iter()
                .enumerate()
                .map(|(i, (x, y))| node_at(&format!("n{i}"), *x, *y))
                .collect();
            let params = FitParams::default();
            let panel = Rect::from_min_size(Pos2::new(7.0, 13.0), Vec2::new(panel_w, panel_h));

            let t = fit_to_rect(nodes.iter(), panel, &params);
            let bounds = bounding_box(nodes.iter(), params.node_size).unwrap();
            let mapped = t.to_screen(bounds.center());

            // Tolerance scales with coordinate magnitude.
            let tol = 0.01 * (1.0 + mapped.x.abs().max(mapped.y.abs()));
            prop_assert!((mapped.x - panel.center().x).abs() < tol);
            prop_assert!((mapped.y - panel.center().y).abs() < tol);
        }
    }
}
