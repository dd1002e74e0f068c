// SPDX-License-Identifier: MIT OR Apache-2.0
//! Contact section: mock email capture.
//!
//! Submitting never calls a network endpoint. [`ContactSection::submit`] is
//! the explicit integration point for a real backend; today it validates the
//! address shape, logs, and flips a local "sent" flag that reverts after a
//! fixed display duration.

use crate::config::ShowcaseConfig;
use crate::reveal::Reveal;
use crate::theme::ShowcaseTheme;
use egui::{Frame, Margin, Rect, RichText, Rounding, Stroke, TextEdit, Vec2};

/// Seconds the "Sent!" state stays on the button
const SENT_DISPLAY_SECS: f64 = 3.0;

/// The contact section
pub struct ContactSection {
    email: String,
    /// Time of the last accepted submit, while the "Sent!" state shows
    sent_at: Option<f64>,
    error: Option<&'static str>,
    address: String,
}

impl ContactSection {
    /// Build the section from config
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            email: String::new(),
            sent_at: None,
            error: None,
            address: config.contact.address.clone(),
        }
    }

    fn sent(&self, now: f64) -> bool {
        self.sent_at.is_some_and(|at| now - at < SENT_DISPLAY_SECS)
    }

    /// Mock submit: no request leaves the process
    fn submit(&mut self, now: f64) {
        if !is_valid_email(&self.email) {
            self.error = Some("Enter a valid email address");
            return;
        }
        tracing::info!("Contact request captured (mock), no endpoint wired");
        self.error = None;
        self.sent_at = Some(now);
        self.email.clear();
    }

    /// Show the section; returns its rect for scroll targeting
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &ShowcaseTheme, reveal: &mut Reveal) -> Rect {
        let fade = reveal.begin(ui, "contact");
        let now = ui.input(|i| i.time);

        // Revert the sent flag after its display window.
        if self.sent_at.is_some() && !self.sent(now) {
            self.sent_at = None;
        }

        let response = ui.scope(|ui| {
            ui.set_opacity(fade);
            ui.add_space(Reveal::slide(fade) + 88.0);

            ui.label(
                RichText::new("Get in Touch")
                    .size(34.0)
                    .color(theme.colors.text_primary),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "For collaborations, projects, or updates on the OSMOS ecosystem \u{2014} \
                     leave your email below.",
                )
                .size(16.0)
                .color(theme.colors.text_secondary),
            );
            ui.add_space(32.0);

            self.form(ui, theme, now);

            if let Some(error) = self.error {
                ui.add_space(8.0);
                ui.label(RichText::new(error).size(12.5).color(theme.colors.accent));
            }

            ui.add_space(32.0);
            ui.hyperlink_to(
                RichText::new(self.address.clone()).size(14.0),
                format!("mailto:{}", self.address),
            );
            ui.add_space(24.0);
        });

        let rect = response.response.rect;
        reveal.end("contact", rect);
        rect
    }

    fn form(&mut self, ui: &mut egui::Ui, theme: &ShowcaseTheme, now: f64) {
        let sent = self.sent(now);

        Frame::none()
            .fill(theme.colors.bg_secondary)
            .stroke(Stroke::new(1.0, theme.colors.border))
            .rounding(Rounding::same(12.0))
            .inner_margin(Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("\u{2709}")
                            .size(16.0)
                            .color(theme.colors.text_disabled),
                    );

                    let edit = ui.add(
                        TextEdit::singleline(&mut self.email)
                            .hint_text("you@example.com")
                            .frame(false)
                            .desired_width(240.0),
                    );
                    if edit.changed() {
                        self.error = None;
                    }

                    let label = if sent { "Sent!" } else { "Send \u{2192}" };
                    let button = egui::Button::new(RichText::new(label).size(13.0))
                        .min_size(Vec2::new(72.0, 30.0));
                    let clicked = ui.add_enabled(!sent, button).clicked();

                    let submitted = clicked
                        || (edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
                    if submitted && !sent {
                        self.submit(now);
                    }
                });
            });
    }
}

/// Shape check for an email address; standard form-constraint strictness,
/// nothing more
pub fn is_valid_email(address: &str) -> bool {
    let address = address.trim();
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if address.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && tld.len() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> ContactSection {
        ContactSection::new(&ShowcaseConfig::default())
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("you@example.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(is_valid_email("  padded@example.org  "));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("you@"));
        assert!(!is_valid_email("you@nodot"));
        assert!(!is_valid_email("you@domain.c"));
        assert!(!is_valid_email("you@.com"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("you@@example.com"));
    }

    #[test]
    fn test_submit_sets_and_reverts_sent_flag() {
        let mut contact = section();
        contact.email = "you@example.com".to_owned();

        contact.submit(10.0);
        assert!(contact.sent(10.5));
        assert!(contact.email.is_empty());
        assert!(contact.error.is_none());

        // Reverts after the display window.
        assert!(!contact.sent(10.0 + SENT_DISPLAY_SECS + 0.1));
    }

    #[test]
    fn test_submit_rejects_bad_address() {
        let mut contact = section();
        contact.email = "not-an-email".to_owned();

        contact.submit(5.0);
        assert!(!contact.sent(5.1));
        assert!(contact.error.is_some());
        // Input is kept for correction.
        assert_eq!(contact.email, "not-an-email");
    }
}
