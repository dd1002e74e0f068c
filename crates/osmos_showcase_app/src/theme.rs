// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page theme.
//!
//! One canonical light theme with the OSMOS red accent. The demo panel keeps
//! its own dark surface as local constants; there is no runtime theme toggle.

use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// Theme colors for the page
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Page background
    pub bg_primary: Color32,
    /// Cards and raised surfaces
    pub bg_secondary: Color32,
    /// Nested elements
    pub bg_tertiary: Color32,

    /// Primary text
    pub text_primary: Color32,
    /// Secondary text (subtitles, hints)
    pub text_secondary: Color32,
    /// Disabled text
    pub text_disabled: Color32,

    /// Brand accent (OSMOS red)
    pub accent: Color32,
    /// Accent hover state
    pub accent_hover: Color32,
    /// Accent active state
    pub accent_active: Color32,

    /// Solid buttons and the wordmark
    pub ink: Color32,
    /// Ink hover state
    pub ink_hover: Color32,

    /// Hairline borders
    pub border: Color32,
    /// Focused borders
    pub border_focused: Color32,

    /// Selection background
    pub selection_bg: Color32,

    /// Background grid lines
    pub grid_color: Color32,
}

impl ThemeColors {
    /// The light page palette
    pub fn light() -> Self {
        Self {
            bg_primary: Color32::from_rgb(250, 250, 250),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(243, 243, 243),

            text_primary: Color32::from_rgb(23, 23, 23),
            text_secondary: Color32::from_rgb(99, 99, 99),
            text_disabled: Color32::from_rgb(163, 163, 163),

            accent: Color32::from_rgb(255, 34, 71),
            accent_hover: Color32::from_rgb(255, 82, 110),
            accent_active: Color32::from_rgb(220, 20, 55),

            ink: Color32::from_rgb(23, 23, 23),
            ink_hover: Color32::from_rgb(45, 45, 45),

            border: Color32::from_rgb(229, 229, 229),
            border_focused: Color32::from_rgb(23, 23, 23),

            selection_bg: Color32::from_rgba_unmultiplied(255, 34, 71, 50),

            grid_color: Color32::from_rgba_unmultiplied(0, 0, 0, 10),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::light()
    }
}

/// Complete page theme configuration
#[derive(Debug, Clone)]
pub struct ShowcaseTheme {
    /// Theme colors
    pub colors: ThemeColors,
    /// Panel rounding
    pub panel_rounding: f32,
    /// Widget rounding
    pub widget_rounding: f32,
    /// Border width
    pub border_width: f32,
    /// Item spacing
    pub item_spacing: f32,
}

impl Default for ShowcaseTheme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::light(),
            panel_rounding: 16.0,
            widget_rounding: 8.0,
            border_width: 1.0,
            item_spacing: 8.0,
        }
    }
}

impl ShowcaseTheme {
    /// Convert to egui Style
    pub fn to_egui_style(&self) -> Style {
        let mut style = Style::default();

        style.visuals = self.to_egui_visuals();

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(18.0, 9.0);

        style
    }

    /// Convert to egui Visuals
    pub fn to_egui_visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::light();

        visuals.window_fill = colors.bg_secondary;
        visuals.window_stroke = Stroke::new(self.border_width, colors.border);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        visuals.panel_fill = colors.bg_primary;

        visuals.widgets.noninteractive.bg_fill = colors.bg_secondary;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(self.border_width, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text_primary);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.inactive.bg_fill = colors.ink;
        visuals.widgets.inactive.weak_bg_fill = colors.ink;
        visuals.widgets.inactive.bg_stroke = Stroke::new(self.border_width, colors.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.bg_secondary);
        visuals.widgets.inactive.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.hovered.bg_fill = colors.ink_hover;
        visuals.widgets.hovered.weak_bg_fill = colors.ink_hover;
        visuals.widgets.hovered.bg_stroke = Stroke::new(self.border_width, colors.border_focused);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors.bg_secondary);
        visuals.widgets.hovered.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.active.bg_fill = colors.accent_active;
        visuals.widgets.active.weak_bg_fill = colors.accent_active;
        visuals.widgets.active.bg_stroke = Stroke::new(self.border_width, colors.accent);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors.bg_secondary);
        visuals.widgets.active.rounding = Rounding::same(self.widget_rounding);

        visuals.selection.bg_fill = colors.selection_bg;
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);

        visuals.hyperlink_color = colors.text_secondary;

        visuals.extreme_bg_color = colors.bg_secondary;
        visuals.faint_bg_color = colors.bg_tertiary;

        visuals
    }

    /// Apply this theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.to_egui_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_visuals() {
        let theme = ShowcaseTheme::default();
        let visuals = theme.to_egui_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, theme.colors.bg_primary);
        assert_eq!(visuals.selection.stroke.color, theme.colors.accent);
    }

    #[test]
    fn test_brand_accent() {
        let colors = ThemeColors::light();
        assert_eq!(colors.accent, Color32::from_rgb(255, 34, 71));
    }
}
