// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pipeline canvas painting.
//!
//! Features:
//! - Background grid and a soft bottom under-glow
//! - Node cards with kind chip, label, note and status ring
//! - Locked view: auto-fit only, no pan/zoom, no hit testing
//!
//! Page scrolling passes straight through the panel; the canvas never senses
//! input.

use crate::fit::{fit_to_rect, FitParams, ViewTransform};
use crate::node::{Node, NodeStatus, PipelineGraph};
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Vec2};

/// Grid parameters
const GRID_SPACING: f32 = 42.0;
const GRID_MINOR: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 10);
const GRID_MAJOR: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 18);

/// Node card visuals
const CARD_ROUNDING: f32 = 10.0;
const CARD_SHADOW_OFFSET: f32 = 3.0;
const CARD_BG: Color32 = Color32::from_rgba_premultiplied(10, 11, 12, 235);

/// Under-glow accent (brand red)
const GLOW_COLOR: [u8; 3] = [255, 34, 71];

fn status_ring(status: NodeStatus) -> Color32 {
    match status {
        NodeStatus::Running => Color32::from_rgba_unmultiplied(252, 211, 77, 210),
        NodeStatus::Done => Color32::from_rgba_unmultiplied(52, 211, 153, 190),
        NodeStatus::Error => Color32::from_rgba_unmultiplied(251, 113, 133, 190),
        NodeStatus::Idle => Color32::from_rgba_unmultiplied(255, 255, 255, 26),
    }
}

/// Painter for the locked pipeline panel.
///
/// Owns the fit transform and its bookkeeping: the transform is recomputed
/// from scratch when the panel rect changes or [`invalidate`] is called after
/// a node-set swap, at most once per painted frame.
///
/// [`invalidate`]: PipelineCanvas::invalidate
pub struct PipelineCanvas {
    params: FitParams,
    transform: ViewTransform,
    last_rect: Option<Rect>,
    needs_fit: bool,
}

impl PipelineCanvas {
    /// Create a canvas with the given fit parameters
    pub fn new(params: FitParams) -> Self {
        Self {
            params,
            transform: ViewTransform::IDENTITY,
            last_rect: None,
            needs_fit: true,
        }
    }

    /// The fit parameters in use
    pub fn params(&self) -> &FitParams {
        &self.params
    }

    /// The current layout-to-screen transform
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Force a refit on the next paint (call after swapping the node set)
    pub fn invalidate(&mut self) {
        self.needs_fit = true;
    }

    /// Recompute the transform if the panel rect or node set changed.
    /// Returns `true` when a refit happened.
    pub fn refit_if_needed(&mut self, rect: Rect, graph: &PipelineGraph) -> bool {
        if !self.needs_fit && self.last_rect == Some(rect) {
            return false;
        }
        self.transform = fit_to_rect(graph.nodes(), rect, &self.params);
        self.last_rect = Some(rect);
        self.needs_fit = false;
        true
    }

    /// Paint the panel contents into `rect`
    pub fn paint(&mut self, painter: &egui::Painter, rect: Rect, graph: &PipelineGraph) {
        self.refit_if_needed(rect, graph);

        self.draw_grid(painter, rect);
        self.draw_underglow(painter, rect);

        for node in graph.nodes() {
            self.draw_node(painter, rect, node);
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: Rect) {
        let major_spacing = GRID_SPACING * 5.0;

        let mut x = rect.left();
        while x < rect.right() {
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                Stroke::new(1.0, GRID_MINOR),
            );
            x += GRID_SPACING;
        }

        let mut y = rect.top();
        while y < rect.bottom() {
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, GRID_MINOR),
            );
            y += GRID_SPACING;
        }

        let mut x = rect.left();
        while x < rect.right() {
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                Stroke::new(1.0, GRID_MAJOR),
            );
            x += major_spacing;
        }

        let mut y = rect.top();
        while y < rect.bottom() {
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, GRID_MAJOR),
            );
            y += major_spacing;
        }
    }

    fn draw_underglow(&self, painter: &egui::Painter, rect: Rect) {
        // Layered translucent circles stand in for a radial gradient.
        let center = Pos2::new(rect.center().x, rect.bottom() + 30.0);
        let base = rect.width().min(680.0) * 0.5;
        let [r, g, b] = GLOW_COLOR;
        for (factor, alpha) in [(1.0, 6), (0.75, 8), (0.5, 10), (0.3, 12)] {
            painter.circle_filled(
                center,
                base * factor,
                Color32::from_rgba_unmultiplied(r, g, b, alpha),
            );
        }
    }

    fn draw_node(&self, painter: &egui::Painter, rect: Rect, node: &Node) {
        let s = self.transform.scale;
        let center = Pos2::new(node.position[0], node.position[1]);
        let card = self
            .transform
            .rect_to_screen(Rect::from_center_size(center, self.params.node_size));

        if !card.intersects(rect) {
            return;
        }

        let rounding = Rounding::same(CARD_ROUNDING * s);

        // Shadow
        painter.rect_filled(
            card.translate(Vec2::splat(CARD_SHADOW_OFFSET * s)),
            rounding,
            Color32::from_rgba_unmultiplied(0, 0, 0, 90),
        );

        // Body with a faint tint of the node color
        let [r, g, b] = node.color;
        painter.rect_filled(card, rounding, CARD_BG);
        painter.rect_filled(card, rounding, Color32::from_rgba_unmultiplied(r, g, b, 30));

        // Accent strip along the top edge
        let strip = Rect::from_min_size(card.min, Vec2::new(card.width(), 2.5 * s));
        painter.rect_filled(
            strip,
            Rounding {
                nw: CARD_ROUNDING * s,
                ne: CARD_ROUNDING * s,
                sw: 0.0,
                se: 0.0,
            },
            Color32::from_rgba_unmultiplied(r, g, b, 178),
        );

        // Status ring
        painter.rect_stroke(card, rounding, Stroke::new(1.5 * s.max(0.6), status_ring(node.status)));

        self.draw_card_text(painter, card, node, s);
    }

    fn draw_card_text(&self, painter: &egui::Painter, card: Rect, node: &Node, s: f32) {
        let inset = 10.0 * s;
        let [cr, cg, cb] = node.kind.chip_color();

        // Kind chip: icon + category name on a tinted pill
        let chip_text = format!("{} {}", node.kind.icon(), node.kind.name());
        let chip_font = FontId::proportional(8.5 * s);
        let chip_galley = painter.layout_no_wrap(
            chip_text,
            chip_font,
            Color32::from_rgba_unmultiplied(cr, cg, cb, 230),
        );
        let chip_pad = Vec2::new(5.0 * s, 2.5 * s);
        let chip_rect = Rect::from_min_size(
            card.min + Vec2::new(inset, 7.0 * s),
            chip_galley.size() + chip_pad * 2.0,
        );
        painter.rect_filled(
            chip_rect,
            Rounding::same(4.0 * s),
            Color32::from_rgba_unmultiplied(cr, cg, cb, 38),
        );
        painter.rect_stroke(
            chip_rect,
            Rounding::same(4.0 * s),
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(cr, cg, cb, 76)),
        );
        painter.galley(chip_rect.min + chip_pad, chip_galley, Color32::WHITE);

        // Label, elided to the card width
        let label_font = FontId::proportional(12.0 * s);
        let max_w = card.width() - inset * 2.0;
        let label = elide_to_width(painter, &node.label, &label_font, max_w);
        painter.text(
            Pos2::new(card.left() + inset, card.bottom() - 11.0 * s),
            Align2::LEFT_BOTTOM,
            label,
            label_font,
            Color32::from_gray(235),
        );

        if let Some(note) = &node.note {
            let note_font = FontId::proportional(9.5 * s);
            let note = elide_to_width(painter, note, &note_font, max_w);
            painter.text(
                Pos2::new(card.left() + inset, card.bottom() - 2.0 * s),
                Align2::LEFT_BOTTOM,
                note,
                note_font,
                Color32::from_gray(150),
            );
        }
    }
}

impl Default for PipelineCanvas {
    fn default() -> Self {
        Self::new(FitParams::default())
    }
}

/// Shorten `text` until it fits within `max_width`, appending an ellipsis
fn elide_to_width(
    painter: &egui::Painter,
    text: &str,
    font: &FontId,
    max_width: f32,
) -> String {
    let fits = |t: &str| {
        painter
            .layout_no_wrap(t.to_owned(), font.clone(), Color32::WHITE)
            .size()
            .x
            <= max_width
    };

    if fits(text) {
        return text.to_owned();
    }

    let mut end = text.len();
    while end > 0 {
        end = text
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i < end)
            .last()
            .unwrap_or(0);
        let candidate = format!("{}\u{2026}", &text[..end]);
        if fits(&candidate) {
            return candidate;
        }
    }
    String::from("\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build_graph, LayoutMode};

    fn panel(w: f32, h: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(w, h))
    }

    #[test]
    fn test_refit_on_first_use_and_rect_change() {
        let graph = build_graph(LayoutMode::Wide);
        let mut canvas = PipelineCanvas::default();

        assert!(canvas.refit_if_needed(panel(900.0, 540.0), &graph));
        assert!(!canvas.refit_if_needed(panel(900.0, 540.0), &graph));
        assert!(canvas.refit_if_needed(panel(640.0, 420.0), &graph));
    }

    #[test]
    fn test_invalidate_forces_refit() {
        let graph = build_graph(LayoutMode::Wide);
        let mut canvas = PipelineCanvas::default();
        canvas.refit_if_needed(panel(900.0, 540.0), &graph);

        let swapped = build_graph(LayoutMode::Compact);
        canvas.invalidate();
        assert!(canvas.refit_if_needed(panel(900.0, 540.0), &swapped));
    }

    #[test]
    fn test_refit_updates_transform() {
        let graph = build_graph(LayoutMode::Wide);
        let mut canvas = PipelineCanvas::default();
        canvas.refit_if_needed(panel(1000.0, 560.0), &graph);
        let wide = canvas.transform();

        canvas.refit_if_needed(panel(300.0, 560.0), &graph);
        let narrow = canvas.transform();
        assert!(narrow.scale < wide.scale);
    }
}
