//! Logout confirmation prompt.
//!
//! Drawn over a dimmed backdrop while the shell has a logout pending. Escape,
//! a backdrop click, or "Stay" keep the user logged in.

use eframe::egui::{self, Color32, Key, Order, Pos2, Rounding, Sense, Stroke};

use crate::ui::gui::theme::{colors, rounding, shadow, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};

const PROMPT_WIDTH: f32 = 380.0;
const PROMPT_HEIGHT_ESTIMATE: f32 = 180.0;
const PROMPT_PADDING: f32 = spacing::XL;
const BUTTON_SIZE: [f32; 2] = [100.0, 34.0];
const BACKDROP_ALPHA: u8 = 128;

/// What the user did with the prompt this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutChoice {
    Confirm,
    Cancel,
    Pending,
}

impl LogoutChoice {
    /// `Some(confirmed)` once the user has answered.
    pub fn resolved(self) -> Option<bool> {
        match self {
            LogoutChoice::Confirm => Some(true),
            LogoutChoice::Cancel => Some(false),
            LogoutChoice::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptButton {
    Stay,
    LogOut,
}

impl PromptButton {
    fn label(self) -> &'static str {
        match self {
            PromptButton::Stay => "Stay",
            PromptButton::LogOut => "Log out",
        }
    }

    fn fill(self) -> Color32 {
        match self {
            PromptButton::Stay => colors::SURFACE,
            PromptButton::LogOut => colors::STATUS_ERROR,
        }
    }

    fn text_color(self) -> Color32 {
        match self {
            PromptButton::Stay => colors::TEXT_PRIMARY,
            PromptButton::LogOut => Color32::WHITE,
        }
    }

    fn stroke(self) -> Stroke {
        match self {
            PromptButton::Stay => Stroke::new(1.0, colors::BORDER),
            PromptButton::LogOut => Stroke::NONE,
        }
    }

    fn render(self, ui: &mut egui::Ui) -> egui::Response {
        let button = egui::Button::new(typography::text(
            self.label(),
            FontSize::Body,
            FontWeight::Regular,
            self.text_color(),
        ))
        .fill(self.fill())
        .stroke(self.stroke())
        .rounding(Rounding::same(rounding::BUTTON));
        ui.add_sized(BUTTON_SIZE, button)
    }
}

/// Confirmation shown before signing the current user out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutPrompt {
    message: String,
}

impl LogoutPrompt {
    pub fn for_user(name: &str) -> Self {
        let message = if name.is_empty() {
            "You will be signed out and the window returns to the guest view.".to_string()
        } else {
            format!("{name} will be signed out and the window returns to the guest view.")
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn show(&self, ctx: &egui::Context) -> LogoutChoice {
        let mut choice = LogoutChoice::Pending;
        let screen = ctx.screen_rect();

        egui::Area::new(egui::Id::new("logout_backdrop"))
            .order(Order::Foreground)
            .fixed_pos(Pos2::ZERO)
            .show(ctx, |ui| {
                ui.painter().rect_filled(
                    screen,
                    Rounding::ZERO,
                    Color32::from_rgba_unmultiplied(0, 0, 0, BACKDROP_ALPHA),
                );
                if ui.allocate_exact_size(screen.size(), Sense::click()).1.clicked() {
                    choice = LogoutChoice::Cancel;
                }
            });

        let origin = Pos2::new(
            (screen.width() - PROMPT_WIDTH) / 2.0,
            (screen.height() - PROMPT_HEIGHT_ESTIMATE) / 2.0,
        );
        egui::Area::new(egui::Id::new("logout_prompt"))
            .order(Order::Foreground)
            .fixed_pos(origin)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors::SURFACE)
                    .rounding(Rounding::same(rounding::CARD))
                    .shadow(shadow::elevated())
                    .stroke(Stroke::new(1.0, colors::BORDER))
                    .inner_margin(egui::Margin::same(PROMPT_PADDING))
                    .show(ui, |ui| {
                        ui.set_width(PROMPT_WIDTH - 2.0 * PROMPT_PADDING);
                        ui.label(typography::text(
                            "Log out?",
                            FontSize::Heading,
                            FontWeight::Strong,
                            colors::TEXT_PRIMARY,
                        ));
                        ui.add_space(spacing::MD);
                        ui.label(typography::text(
                            &self.message,
                            FontSize::Body,
                            FontWeight::Regular,
                            colors::TEXT_SECONDARY,
                        ));
                        ui.add_space(spacing::XL);

                        // Right-to-left: the destructive action sits at the edge.
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if PromptButton::LogOut.render(ui).clicked() {
                                choice = LogoutChoice::Confirm;
                            }
                            ui.add_space(spacing::MD);
                            if PromptButton::Stay.render(ui).clicked() {
                                choice = LogoutChoice::Cancel;
                            }
                        });
                    });
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            choice = LogoutChoice::Cancel;
        }
        choice
    }
}
