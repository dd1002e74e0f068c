// SPDX-License-Identifier: MIT OR Apache-2.0
//! Hero section: badge, headline, calls to action.

use crate::reveal::Reveal;
use crate::section_types::SectionType;
use crate::theme::ShowcaseTheme;
use egui::text::LayoutJob;
use egui::{
    Align, Button, Color32, FontId, Frame, Layout, Margin, Rect, RichText, Rounding, Stroke,
    TextFormat, Vec2,
};

/// The hero section
#[derive(Default)]
pub struct HeroSection;

impl HeroSection {
    /// Show the section; returns its rect for scroll targeting
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        theme: &ShowcaseTheme,
        reveal: &mut Reveal,
        nav: &mut Option<SectionType>,
    ) -> Rect {
        let fade = reveal.begin(ui, "hero");

        let response = ui.scope(|ui| {
            ui.set_opacity(fade);
            ui.add_space(Reveal::slide(fade) + 56.0);

            self.badge(ui, theme);
            ui.add_space(26.0);

            ui.label(headline_job(theme));
            ui.add_space(18.0);

            ui.label(
                RichText::new(
                    "Systems that think, act, and deliver with surgical precision \u{2014}\n\
                     built to automate flawlessly and operate in silence.",
                )
                .size(17.0)
                .color(theme.colors.text_secondary),
            );

            ui.add_space(38.0);
            self.cta_row(ui, theme, nav);

            ui.add_space(56.0);
            separator_rules(ui, theme);
            ui.add_space(24.0);
        });

        let rect = response.response.rect;
        reveal.end("hero", rect);
        rect
    }

    fn badge(&self, ui: &mut egui::Ui, theme: &ShowcaseTheme) {
        Frame::none()
            .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 210))
            .stroke(Stroke::new(1.0, theme.colors.border))
            .rounding(Rounding::same(999.0))
            .inner_margin(Margin::symmetric(14.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(Vec2::splat(6.0), egui::Sense::hover());
                    ui.painter().circle_filled(dot.center(), 3.0, theme.colors.accent);
                    ui.label(
                        RichText::new("Online \u{2014} Building Quietly")
                            .size(12.0)
                            .color(theme.colors.text_secondary),
                    );
                });
            });
    }

    fn cta_row(&self, ui: &mut egui::Ui, theme: &ShowcaseTheme, nav: &mut Option<SectionType>) {
        ui.allocate_ui_with_layout(
            Vec2::new(ui.available_width(), 44.0),
            Layout::left_to_right(Align::Center).with_main_align(Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                if ui
                    .add(Button::new(
                        RichText::new("See What They Do").size(14.0),
                    ))
                    .clicked()
                {
                    *nav = Some(SectionType::Demo);
                }

                let outline = Button::new(
                    RichText::new("Contact")
                        .size(14.0)
                        .color(theme.colors.text_primary),
                )
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.0, theme.colors.border));
                if ui.add(outline).clicked() {
                    *nav = Some(SectionType::Contact);
                }
            },
        );
    }
}

fn headline_job(theme: &ShowcaseTheme) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        "OSMOS. ",
        0.0,
        TextFormat {
            font_id: FontId::proportional(44.0),
            color: theme.colors.text_primary,
            ..Default::default()
        },
    );
    job.append(
        "The Automation Layer.",
        0.0,
        TextFormat {
            font_id: FontId::proportional(44.0),
            color: theme.colors.text_secondary,
            ..Default::default()
        },
    );
    job
}

/// Two fading horizontal rules under the hero
fn separator_rules(ui: &mut egui::Ui, theme: &ShowcaseTheme) {
    let painter = ui.painter();
    let avail = ui.available_width();
    let cursor = ui.cursor().min;

    for (i, width_frac) in [0.9, 0.7].into_iter().enumerate() {
        let w = avail * width_frac;
        let x0 = cursor.x + (avail - w) * 0.5;
        let y = cursor.y + i as f32 * 6.0;
        painter.hline(
            x0..=x0 + w,
            y,
            Stroke::new(1.0, theme.colors.border.gamma_multiply(1.0 - i as f32 * 0.4)),
        );
    }
    ui.add_space(12.0);
}
