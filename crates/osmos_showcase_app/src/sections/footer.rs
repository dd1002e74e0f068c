// SPDX-License-Identifier: MIT OR Apache-2.0
//! Footer section.

use crate::theme::ShowcaseTheme;
use chrono::Datelike;
use egui::{Rect, RichText, Stroke};

/// The footer
#[derive(Default)]
pub struct FooterSection;

impl FooterSection {
    /// Show the footer; returns its rect for scroll targeting
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &ShowcaseTheme) -> Rect {
        let response = ui.scope(|ui| {
            ui.add_space(40.0);

            let avail = ui.available_width();
            let y = ui.cursor().min.y;
            let x0 = ui.cursor().min.x;
            ui.painter()
                .hline(x0..=x0 + avail, y, Stroke::new(1.0, theme.colors.border));
            ui.add_space(32.0);

            let year = chrono::Local::now().year();
            ui.label(
                RichText::new(format!(
                    "\u{a9} {year} OSMOS \u{2014} Crafted with clarity, not noise."
                ))
                .size(13.0)
                .color(theme.colors.text_secondary),
            );
            ui.add_space(36.0);
        });

        response.response.rect
    }
}
