// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page composition: header, scrolling sections, navigation.

use crate::config::ShowcaseConfig;
use crate::header::HeaderBar;
use crate::reveal::Reveal;
use crate::section_types::SectionType;
use crate::sections::{
    ApproachSection, ContactSection, DemoSection, FooterSection, HeroSection,
};
use crate::theme::ShowcaseTheme;
use egui::{Id, Pos2, Rect, Stroke};
use std::collections::HashMap;

/// Content column width cap
const MAX_CONTENT_WIDTH: f32 = 1080.0;

/// Background grid spacing
const GRID_SPACING: f32 = 28.0;

/// Scroll offset past which the header turns opaque
const SCROLLED_THRESHOLD: f32 = 10.0;

/// The whole landing page.
///
/// Owns every section and all animation bookkeeping; dropping the page stops
/// the pipeline animation and releases all listeners with it.
pub struct ShowcasePage {
    header: HeaderBar,
    hero: HeroSection,
    demo: DemoSection,
    approach: ApproachSection,
    contact: ContactSection,
    footer: FooterSection,
    reveal: Reveal,
    /// Requested jump target, consumed on the next layout pass
    nav: Option<SectionType>,
    /// Section rects from the current frame, for scroll-to-section
    rects: HashMap<SectionType, Rect>,
    scroll_progress: f32,
    scrolled: bool,
}

impl ShowcasePage {
    /// Build the page from config
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            header: HeaderBar,
            hero: HeroSection,
            demo: DemoSection::new(config),
            approach: ApproachSection,
            contact: ContactSection::new(config),
            footer: FooterSection,
            reveal: Reveal::new(),
            nav: None,
            rects: HashMap::new(),
            scroll_progress: 0.0,
            scrolled: false,
        }
    }

    /// Run one frame of the page
    pub fn update(&mut self, ctx: &egui::Context, theme: &ShowcaseTheme) {
        let dt = ctx.input(|i| i.stable_dt);
        self.demo.tick(dt);

        // Springy progress strip: ease toward the measured fraction.
        let progress =
            ctx.animate_value_with_time(Id::new("scroll_progress"), self.scroll_progress, 0.2);
        self.header
            .ui(ctx, theme, progress, self.scrolled, &mut self.nav);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme.colors.bg_primary))
            .show(ctx, |ui| {
                draw_background_grid(ui.painter(), ui.max_rect(), theme);

                let target = self.nav.take();
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(MAX_CONTENT_WIDTH.min(ui.available_width()));

                            let rect = self.hero.ui(ui, theme, &mut self.reveal, &mut self.nav);
                            self.rects.insert(SectionType::Hero, rect);

                            let rect = self.demo.ui(ui, theme, &mut self.reveal);
                            self.rects.insert(SectionType::Demo, rect);

                            let rect = self.approach.ui(ui, theme, &mut self.reveal);
                            self.rects.insert(SectionType::Approach, rect);

                            let rect = self.contact.ui(ui, theme, &mut self.reveal);
                            self.rects.insert(SectionType::Contact, rect);

                            let rect = self.footer.ui(ui, theme);
                            self.rects.insert(SectionType::Footer, rect);
                        });

                        if let Some(section) = target {
                            if let Some(rect) = self.rects.get(&section) {
                                tracing::debug!("Jumping to {} section", section.name());
                                ui.scroll_to_rect(*rect, Some(egui::Align::Min));
                            }
                        }
                    });

                let offset = output.state.offset.y;
                let scrollable = (output.content_size.y - output.inner_rect.height()).max(0.0);
                self.scroll_progress = if scrollable > 0.0 {
                    (offset / scrollable).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.scrolled = offset > SCROLLED_THRESHOLD;
            });

        // The pipeline animation never idles while the page is alive.
        ctx.request_repaint();
    }
}

/// Faint full-page grid behind all content
fn draw_background_grid(painter: &egui::Painter, rect: Rect, theme: &ShowcaseTheme) {
    let stroke = Stroke::new(1.0, theme.colors.grid_color);

    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke,
        );
        x += GRID_SPACING;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke,
        );
        y += GRID_SPACING;
    }
}
