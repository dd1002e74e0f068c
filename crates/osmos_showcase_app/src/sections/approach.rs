// SPDX-License-Identifier: MIT OR Apache-2.0
//! Approach section: the three-phase project flow.

use crate::reveal::Reveal;
use crate::theme::ShowcaseTheme;
use egui::{Align2, Color32, FontId, Id, Pos2, Rect, RichText, Rounding, Sense, Stroke, Vec2};

/// Card height
const CARD_HEIGHT: f32 = 232.0;

/// Width below which the cards stack vertically
const STACK_BREAKPOINT: f32 = 700.0;

struct Step {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "\u{1f9ed}",
        title: "Discovery",
        desc: "A short call to understand what matters most. We identify the systems, \
               automations, or agents that create true leverage.",
    },
    Step {
        icon: "\u{2699}",
        title: "Prototype",
        desc: "A functional demo in days, not weeks. You see it run \u{2014} rapid iteration, \
               refined precision, real performance.",
    },
    Step {
        icon: "\u{2713}",
        title: "Integration",
        desc: "Seamless deployment, testing, and documentation until it runs autonomously \
               \u{2014} monitored, scalable, and self-reliant.",
    },
];

/// The approach section
#[derive(Default)]
pub struct ApproachSection;

impl ApproachSection {
    /// Show the section; returns its rect for scroll targeting
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &ShowcaseTheme, reveal: &mut Reveal) -> Rect {
        let fade = reveal.begin(ui, "approach");

        let response = ui.scope(|ui| {
            ui.set_opacity(fade);
            ui.add_space(Reveal::slide(fade) + 88.0);

            ui.label(
                RichText::new("Our Approach")
                    .size(34.0)
                    .color(theme.colors.text_primary),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Simple, deliberate, and efficient \u{2014} every project follows the same \
                     three-phase flow.",
                )
                .size(16.0)
                .color(theme.colors.text_secondary),
            );
            ui.add_space(40.0);

            if ui.available_width() < STACK_BREAKPOINT {
                for (i, step) in STEPS.iter().enumerate() {
                    draw_card(ui, theme, step, i);
                    ui.add_space(14.0);
                }
            } else {
                ui.columns(3, |cols| {
                    for (i, step) in STEPS.iter().enumerate() {
                        draw_card(&mut cols[i], theme, step, i);
                    }
                });
            }
        });

        let rect = response.response.rect;
        reveal.end("approach", rect);
        rect
    }
}

fn draw_card(ui: &mut egui::Ui, theme: &ShowcaseTheme, step: &Step, index: usize) {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, CARD_HEIGHT), Sense::hover());

    let hover = ui
        .ctx()
        .animate_bool_with_time(Id::new(("approach_card", index)), response.hovered(), 0.25);

    // Lift the card slightly while hovered.
    let card = rect.translate(Vec2::new(0.0, -3.0 * hover));
    let rounding = Rounding::same(18.0);
    let painter = ui.painter();

    painter.rect_filled(
        card.translate(Vec2::new(0.0, 7.0 + 4.0 * hover)),
        rounding,
        Color32::from_rgba_unmultiplied(0, 0, 0, (10.0 + 12.0 * hover) as u8),
    );
    painter.rect_filled(card, rounding, Color32::from_rgba_unmultiplied(255, 255, 255, 235));
    painter.rect_stroke(card, rounding, Stroke::new(1.0, theme.colors.border));

    let inset = 24.0;

    // Icon tile
    let icon_rect = Rect::from_min_size(card.min + Vec2::splat(inset), Vec2::splat(48.0));
    painter.rect_filled(icon_rect, Rounding::same(12.0), theme.colors.bg_tertiary);
    painter.rect_stroke(icon_rect, Rounding::same(12.0), Stroke::new(1.0, theme.colors.border));
    painter.text(
        icon_rect.center(),
        Align2::CENTER_CENTER,
        step.icon,
        FontId::proportional(22.0),
        theme.colors.accent,
    );

    painter.text(
        card.min + Vec2::new(inset, 94.0),
        Align2::LEFT_TOP,
        step.title,
        FontId::proportional(19.0),
        theme.colors.text_primary,
    );

    let desc = painter.layout(
        step.desc.to_owned(),
        FontId::proportional(13.5),
        theme.colors.text_secondary,
        width - inset * 2.0,
    );
    painter.galley(card.min + Vec2::new(inset, 126.0), desc, theme.colors.text_secondary);

    // Accent line sweeping in along the bottom edge on hover.
    if hover > 0.0 {
        let line = Rect::from_min_size(
            Pos2::new(card.left() + 18.0, card.bottom() - 3.0),
            Vec2::new((card.width() - 36.0) * hover, 3.0),
        );
        painter.rect_filled(line, Rounding::same(2.0), theme.colors.accent.gamma_multiply(0.55));
    }
}
