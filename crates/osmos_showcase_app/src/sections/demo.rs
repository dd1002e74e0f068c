// SPDX-License-Identifier: MIT OR Apache-2.0
//! Demo section: the animated pipeline panel.
//!
//! Owns the graph, the animator and the canvas. Crossing the width breakpoint
//! fully replaces the node set, refits the viewport and reseeds the animator
//! to the first run-order step.

use crate::config::ShowcaseConfig;
use crate::reveal::Reveal;
use crate::theme::ShowcaseTheme;
use egui::{Color32, Rect, RichText, Rounding, Sense, Stroke, Vec2};
use osmos_showcase_graph::{layout, FitParams, LayoutMode, PipelineCanvas, PipelineGraph};
use osmos_showcase_sequencer::{RunOrder, StatusAnimator};

/// Panel width cap
const MAX_PANEL_WIDTH: f32 = 1000.0;

/// Dark panel surface behind the canvas
const PANEL_BG: Color32 = Color32::from_rgb(18, 19, 20);

/// The demo section
pub struct DemoSection {
    graph: PipelineGraph,
    animator: StatusAnimator,
    canvas: PipelineCanvas,
    mode: LayoutMode,
    tick_interval: f32,
    breakpoint: f32,
    started: bool,
}

impl DemoSection {
    /// Build the section with the wide layout; the real mode is picked from
    /// the panel width on the first frame
    pub fn new(config: &ShowcaseConfig) -> Self {
        let mode = LayoutMode::Wide;
        let tick_interval = config.demo.tick_interval_secs();
        Self {
            graph: layout::build_graph(mode),
            animator: StatusAnimator::new(RunOrder::from(layout::run_order(mode)), tick_interval),
            canvas: PipelineCanvas::new(FitParams::default()),
            mode,
            tick_interval,
            breakpoint: config.demo.compact_breakpoint,
            started: false,
        }
    }

    /// Advance the animation by the frame's delta time
    pub fn tick(&mut self, dt: f32) {
        if self.started {
            self.animator.update(dt, &mut self.graph);
        }
    }

    /// Show the section; returns its rect for scroll targeting
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &ShowcaseTheme, reveal: &mut Reveal) -> Rect {
        let fade = reveal.begin(ui, "demo");

        let response = ui.scope(|ui| {
            ui.set_opacity(fade);
            ui.add_space(Reveal::slide(fade) + 72.0);

            ui.label(
                RichText::new("Lead Scraper & Outreach \u{2014} Nodes")
                    .size(34.0)
                    .color(theme.colors.text_primary),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new("Minimal, production-style mock. Fixed view (no zoom or pan).")
                    .size(16.0)
                    .color(theme.colors.text_secondary),
            );
            ui.add_space(26.0);

            self.panel(ui);
        });

        let rect = response.response.rect;
        reveal.end("demo", rect);
        rect
    }

    fn panel(&mut self, ui: &mut egui::Ui) {
        let panel_w = ui.available_width().min(MAX_PANEL_WIDTH);
        let panel_h = panel_height(panel_w);

        let mode = LayoutMode::for_width(panel_w, self.breakpoint);
        if !self.started || mode != self.mode {
            self.apply_layout(mode);
        }

        // Hover only: page scrolling passes through, nothing pans or zooms.
        let (rect, _response) = ui.allocate_exact_size(Vec2::new(panel_w, panel_h), Sense::hover());

        let painter = ui.painter();
        let rounding = Rounding::same(24.0);
        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 10.0)),
            rounding,
            Color32::from_rgba_unmultiplied(0, 0, 0, 28),
        );
        painter.rect_filled(rect, rounding, PANEL_BG);
        painter.rect_stroke(
            rect,
            rounding,
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 26)),
        );

        let inner = rect.shrink(1.0);
        let clipped = painter.with_clip_rect(inner);
        self.canvas.paint(&clipped, inner, &self.graph);
    }

    /// Replace the node set for `mode` and reseed the animation
    fn apply_layout(&mut self, mode: LayoutMode) {
        tracing::debug!("Switching pipeline layout to {}", mode.name());

        self.mode = mode;
        self.graph = layout::build_graph(mode);

        let order = RunOrder::from(layout::run_order(mode));
        let missing = order.missing_from(&self.graph);
        if !missing.is_empty() {
            tracing::debug!("Run order references {} unknown node(s)", missing.len());
        }

        self.animator = StatusAnimator::new(order, self.tick_interval);
        self.animator.start(&mut self.graph);
        self.canvas.invalidate();
        self.started = true;
    }
}

fn panel_height(panel_w: f32) -> f32 {
    if panel_w < 560.0 {
        420.0
    } else if panel_w < 860.0 {
        500.0
    } else {
        560.0
    }
}
