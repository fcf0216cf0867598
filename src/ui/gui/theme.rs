//! Theme and color system for the GUI.
//!
//! A light, warm palette with semantic colors for session status and seat
//! availability. All layout code pulls spacing, rounding, and colors from here.

use eframe::egui::{self, Color32, Rounding, Stroke, Style, Visuals};

/// Spacing scale for consistent layout throughout the application.
pub mod spacing {
    /// Extra small spacing (4px) - tight spacing between related elements.
    pub const XS: f32 = 4.0;

    /// Small spacing (8px) - standard spacing between related elements.
    pub const SM: f32 = 8.0;

    /// Medium spacing (12px) - spacing between sections within a component.
    pub const MD: f32 = 12.0;

    /// Standard spacing (16px) - component padding, gaps between cards.
    pub const LG: f32 = 16.0;

    /// Large spacing (24px) - spacing between major sections.
    pub const XL: f32 = 24.0;
}

/// Corner rounding values.
pub mod rounding {
    /// Cards and panels.
    pub const CARD: f32 = 8.0;

    /// Buttons and inputs.
    pub const BUTTON: f32 = 4.0;

    /// Badges.
    pub const SMALL: f32 = 2.0;
}

/// Shadow depths for elevated surfaces.
pub mod shadow {
    use super::Color32;
    use eframe::egui::Shadow;

    const SHADOW_WARM: Color32 = Color32::from_rgba_premultiplied(40, 30, 20, 255);

    fn warm(alpha: u8) -> Color32 {
        Color32::from_rgba_premultiplied(SHADOW_WARM.r(), SHADOW_WARM.g(), SHADOW_WARM.b(), alpha)
    }

    /// Resting cards.
    pub fn subtle() -> Shadow {
        Shadow {
            offset: [0.0, 1.0].into(),
            blur: 3.0,
            spread: 0.0,
            color: warm(12),
        }
    }

    /// Hovered or selected cards, popups.
    pub fn medium() -> Shadow {
        Shadow {
            offset: [0.0, 2.0].into(),
            blur: 8.0,
            spread: 0.0,
            color: warm(18),
        }
    }

    /// Modals.
    pub fn elevated() -> Shadow {
        Shadow {
            offset: [0.0, 4.0].into(),
            blur: 16.0,
            spread: 0.0,
            color: warm(24),
        }
    }
}

/// Semantic color palette.
pub mod colors {
    use super::Color32;

    // Backgrounds
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 249, 247);
    pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const SURFACE_HOVER: Color32 = Color32::from_rgb(245, 243, 239);
    pub const SURFACE_SELECTED: Color32 = Color32::from_rgb(238, 235, 229);

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 28, 30);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(99, 99, 102);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(142, 142, 147);

    // Borders
    pub const BORDER: Color32 = Color32::from_rgb(232, 229, 222);
    pub const BORDER_FOCUSED: Color32 = Color32::from_rgb(205, 200, 190);
    pub const SEPARATOR: Color32 = Color32::from_rgb(232, 229, 222);

    // Accent
    pub const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
    pub const ACCENT_SUBTLE: Color32 = Color32::from_rgb(230, 244, 255);

    // Status
    pub const STATUS_SCHEDULED: Color32 = Color32::from_rgb(0, 149, 255);
    pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(52, 199, 89);
    pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 59, 48);

    pub const STATUS_SCHEDULED_BG: Color32 = Color32::from_rgb(230, 244, 255);
    pub const STATUS_SUCCESS_BG: Color32 = Color32::from_rgb(232, 250, 238);
    pub const STATUS_ERROR_BG: Color32 = Color32::from_rgb(255, 235, 234);
}

/// Configure egui Visuals for the light theme.
pub fn configure_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = colors::SURFACE;
    visuals.panel_fill = colors::BACKGROUND;
    visuals.faint_bg_color = colors::SURFACE_HOVER;
    visuals.extreme_bg_color = colors::SURFACE;

    visuals.selection.bg_fill = colors::ACCENT_SUBTLE;
    visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);
    visuals.hyperlink_color = colors::ACCENT;

    visuals.window_shadow = shadow::elevated();
    visuals.popup_shadow = shadow::medium();
    visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    visuals.window_rounding = Rounding::same(rounding::CARD);
    visuals.menu_rounding = Rounding::same(rounding::BUTTON);

    let widgets = &mut visuals.widgets;
    for (state, fill, stroke) in [
        (&mut widgets.noninteractive, colors::SURFACE, colors::BORDER),
        (&mut widgets.inactive, colors::SURFACE, colors::BORDER),
        (&mut widgets.hovered, colors::SURFACE_HOVER, colors::BORDER_FOCUSED),
        (&mut widgets.active, colors::SURFACE_SELECTED, colors::ACCENT),
        (&mut widgets.open, colors::SURFACE, colors::ACCENT),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
        state.bg_stroke = Stroke::new(1.0, stroke);
        state.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
        state.rounding = Rounding::same(rounding::BUTTON);
    }

    visuals
}

/// Configure the egui Style with the spacing scale.
pub fn configure_style() -> Style {
    let default_style = Style::default();
    let mut style_spacing = default_style.spacing.clone();

    style_spacing.item_spacing = egui::vec2(spacing::SM, spacing::XS);
    style_spacing.window_margin = egui::Margin::same(spacing::LG);
    style_spacing.button_padding = egui::vec2(spacing::MD, 6.0);
    style_spacing.combo_width = 140.0;

    Style {
        visuals: configure_visuals(),
        spacing: style_spacing,
        animation_time: 0.1,
        ..Default::default()
    }
}

/// Apply the theme globally. Call once from the creation context.
pub fn init(ctx: &egui::Context) {
    ctx.set_style(configure_style());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }

    #[test]
    fn test_shadows_grow_with_elevation() {
        let subtle = shadow::subtle();
        let medium = shadow::medium();
        let elevated = shadow::elevated();
        assert!(subtle.blur < medium.blur);
        assert!(medium.blur < elevated.blur);
        assert!(elevated.color.a() <= 30);
    }

    #[test]
    fn test_configure_visuals() {
        let visuals = configure_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, colors::BACKGROUND);
        assert_eq!(visuals.widgets.hovered.bg_fill, colors::SURFACE_HOVER);
        assert_eq!(visuals.widgets.active.bg_fill, colors::SURFACE_SELECTED);
    }

    #[test]
    fn test_danger_and_success_are_distinct() {
        assert_ne!(colors::STATUS_ERROR, colors::STATUS_SUCCESS);
        assert_ne!(colors::STATUS_ERROR, colors::TEXT_SECONDARY);
    }
}
