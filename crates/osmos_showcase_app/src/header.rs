// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed top bar: wordmark and scroll progress strip.

use crate::section_types::SectionType;
use crate::theme::ShowcaseTheme;
use egui::{Button, Color32, Frame, Margin, Rect, RichText, Stroke, Vec2};

/// Progress strip height in points
const STRIP_HEIGHT: f32 = 2.0;

/// The page header
#[derive(Default)]
pub struct HeaderBar;

impl HeaderBar {
    /// Show the header panel.
    ///
    /// `progress` is the smoothed scroll fraction in `[0, 1]`; `scrolled`
    /// switches the bar from transparent to a frosted surface. A wordmark
    /// click requests a jump back to the hero.
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        theme: &ShowcaseTheme,
        progress: f32,
        scrolled: bool,
        nav: &mut Option<SectionType>,
    ) {
        let fill = if scrolled {
            Color32::from_rgba_unmultiplied(255, 255, 255, 235)
        } else {
            theme.colors.bg_primary
        };

        egui::TopBottomPanel::top("page_header")
            .frame(Frame::none().fill(fill).inner_margin(Margin::symmetric(16.0, 14.0)))
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let brand = RichText::new("OSMOS")
                        .size(20.0)
                        .strong()
                        .color(theme.colors.ink);
                    let clicked = ui
                        .add(Button::new(brand).frame(false).fill(Color32::TRANSPARENT))
                        .clicked();
                    if clicked {
                        *nav = Some(SectionType::Hero);
                    }
                });

                let screen = ui.ctx().screen_rect();
                let painter = ui.painter();

                // Reading progress strip along the very top edge.
                let strip = Rect::from_min_size(
                    screen.min,
                    Vec2::new(screen.width() * progress.clamp(0.0, 1.0), STRIP_HEIGHT),
                );
                painter.rect_filled(strip, 0.0, theme.colors.ink);

                if scrolled {
                    let y = ui.max_rect().bottom() + 14.0;
                    painter.hline(
                        screen.min.x..=screen.max.x,
                        y,
                        Stroke::new(1.0, theme.colors.border),
                    );
                }
            });
    }
}
