//! Type scale for the GUI.
//!
//! Uses egui's bundled proportional and monospace fonts. Weight is expressed
//! through `RichText::strong` since the bundled set has a single weight.

use eframe::egui::{self, Color32, FontFamily, FontId, RichText, TextStyle};
use std::collections::BTreeMap;

/// Standard font sizes for the type scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Captions and badges (11px).
    Caption,
    /// Labels and secondary information (12px).
    Small,
    /// Body text (14px).
    Body,
    /// Card titles (16px).
    Large,
    /// Section headings (18px).
    Heading,
    /// Page titles (24px).
    Title,
}

impl FontSize {
    pub fn pixels(self) -> f32 {
        match self {
            FontSize::Caption => 11.0,
            FontSize::Small => 12.0,
            FontSize::Body => 14.0,
            FontSize::Large => 16.0,
            FontSize::Heading => 18.0,
            FontSize::Title => 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontWeight {
    Regular,
    Strong,
}

pub fn font(size: FontSize) -> FontId {
    FontId::new(size.pixels(), FontFamily::Proportional)
}

pub fn mono(size: FontSize) -> FontId {
    FontId::new(size.pixels(), FontFamily::Monospace)
}

/// Styled text at the given size, weight, and color.
pub fn text(content: impl Into<String>, size: FontSize, weight: FontWeight, color: Color32) -> RichText {
    let rich = RichText::new(content).font(font(size)).color(color);
    match weight {
        FontWeight::Regular => rich,
        FontWeight::Strong => rich.strong(),
    }
}

/// Map egui's built-in text styles onto the type scale.
pub fn init(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let text_styles: BTreeMap<TextStyle, FontId> = [
        (TextStyle::Small, font(FontSize::Small)),
        (TextStyle::Body, font(FontSize::Body)),
        (TextStyle::Button, font(FontSize::Body)),
        (TextStyle::Heading, font(FontSize::Heading)),
        (TextStyle::Monospace, mono(FontSize::Body)),
    ]
    .into();
    style.text_styles = text_styles;
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_increase() {
        let sizes = [
            FontSize::Caption,
            FontSize::Small,
            FontSize::Body,
            FontSize::Large,
            FontSize::Heading,
            FontSize::Title,
        ];
        assert!(sizes.windows(2).all(|w| w[0].pixels() < w[1].pixels()));
    }

    #[test]
    fn test_font_families() {
        assert_eq!(font(FontSize::Body).family, FontFamily::Proportional);
        assert_eq!(mono(FontSize::Body).family, FontFamily::Monospace);
        assert_eq!(font(FontSize::Title).size, 24.0);
    }
}
