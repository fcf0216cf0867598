//! Reusable widgets for the GUI.
//!
//! Session cards, status badges, the detail panel, and the filter bar. Each
//! widget renders a shared view model and reports interactions back to the
//! caller instead of mutating state itself.

use crate::session::SessionStatus;
use crate::ui::gui::theme::{colors, rounding, shadow, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};
use crate::ui::shared::{
    AvailabilityStyle, CapacityStyle, DetailContent, ScheduleBrowser, SessionCard, SessionDetails,
};
use eframe::egui::{self, Color32, Rounding, Sense, Stroke, Vec2};

/// Width of the session list in the master/detail split.
const LIST_WIDTH_FRACTION: f32 = 0.45;

/// Minimum width of either side of the split.
const SPLIT_MIN_WIDTH: f32 = 240.0;

// ============================================================================
// Color Mapping
// ============================================================================

/// Foreground and background colors for a status badge.
pub fn status_colors(status: SessionStatus) -> (Color32, Color32) {
    match status {
        SessionStatus::Scheduled => (colors::STATUS_SCHEDULED, colors::STATUS_SCHEDULED_BG),
        SessionStatus::Completed => (colors::STATUS_SUCCESS, colors::STATUS_SUCCESS_BG),
        SessionStatus::Cancelled => (colors::STATUS_ERROR, colors::STATUS_ERROR_BG),
    }
}

/// Text color of the remaining-seats figure on a card.
pub fn capacity_color(style: CapacityStyle) -> Color32 {
    match style {
        CapacityStyle::Neutral => colors::TEXT_SECONDARY,
        CapacityStyle::Danger => colors::STATUS_ERROR,
    }
}

/// Text color of the available-slots figure in the detail view.
pub fn availability_color(style: AvailabilityStyle) -> Color32 {
    match style {
        AvailabilityStyle::Success => colors::STATUS_SUCCESS,
        AvailabilityStyle::Danger => colors::STATUS_ERROR,
    }
}

/// Card background for the selection/hover state.
pub fn card_fill(card: &SessionCard) -> Color32 {
    if card.is_selected {
        colors::SURFACE_SELECTED
    } else if card.is_hovered {
        colors::SURFACE_HOVER
    } else {
        colors::SURFACE
    }
}

// ============================================================================
// Small Widgets
// ============================================================================

pub fn status_badge(ui: &mut egui::Ui, status: SessionStatus) -> egui::Response {
    let (fg, bg) = status_colors(status);
    egui::Frame::none()
        .fill(bg)
        .rounding(Rounding::same(rounding::SMALL))
        .inner_margin(egui::Margin::symmetric(spacing::SM, 2.0))
        .show(ui, |ui| {
            ui.label(typography::text(
                status.label(),
                FontSize::Caption,
                FontWeight::Strong,
                fg,
            ));
        })
        .response
}

/// Centered muted message used for empty states.
pub fn placeholder(ui: &mut egui::Ui, message: &str) {
    ui.add_space(spacing::XL);
    ui.vertical_centered(|ui| {
        ui.label(typography::text(
            message,
            FontSize::Body,
            FontWeight::Regular,
            colors::TEXT_MUTED,
        ));
    });
}

pub fn page_title(ui: &mut egui::Ui, title: &str) {
    ui.label(typography::text(
        title,
        FontSize::Title,
        FontWeight::Strong,
        colors::TEXT_PRIMARY,
    ));
    ui.add_space(spacing::SM);
}

// ============================================================================
// Session Card
// ============================================================================

/// Interaction with a card this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardResponse {
    pub clicked: bool,
    pub hovered: bool,
}

pub fn session_card(ui: &mut egui::Ui, card: &SessionCard) -> CardResponse {
    let stroke_color = if card.is_selected {
        colors::ACCENT
    } else {
        colors::BORDER
    };

    let inner = egui::Frame::none()
        .fill(card_fill(card))
        .rounding(Rounding::same(rounding::CARD))
        .stroke(Stroke::new(1.0, stroke_color))
        .shadow(if card.is_hovered || card.is_selected {
            shadow::medium()
        } else {
            shadow::subtle()
        })
        .inner_margin(egui::Margin::same(spacing::MD))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(typography::text(
                    &card.title,
                    FontSize::Large,
                    FontWeight::Strong,
                    colors::TEXT_PRIMARY,
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    status_badge(ui, card.status);
                });
            });
            ui.label(typography::text(
                format!("{}  ·  {}", card.date, card.time),
                FontSize::Small,
                FontWeight::Regular,
                colors::TEXT_SECONDARY,
            ));
            ui.horizontal(|ui| {
                ui.label(typography::text(
                    format!("{}  ·  {}", card.venue, card.type_label),
                    FontSize::Small,
                    FontWeight::Regular,
                    colors::TEXT_SECONDARY,
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(typography::text(
                        card.remaining_label(),
                        FontSize::Small,
                        FontWeight::Strong,
                        capacity_color(card.capacity_style),
                    ));
                });
            });
        });

    let response = inner.response.interact(Sense::click());
    CardResponse {
        clicked: response.clicked(),
        hovered: response.hovered(),
    }
}

// ============================================================================
// Detail View
// ============================================================================

pub fn detail_view(ui: &mut egui::Ui, content: &DetailContent) {
    match content {
        DetailContent::Placeholder(message) => placeholder(ui, message),
        DetailContent::Details(details) => render_details(ui, details),
    }
}

fn render_details(ui: &mut egui::Ui, details: &SessionDetails) {
    ui.horizontal(|ui| {
        ui.label(typography::text(
            &details.title,
            FontSize::Heading,
            FontWeight::Strong,
            colors::TEXT_PRIMARY,
        ));
        status_badge(ui, details.status);
    });
    ui.add_space(spacing::MD);

    egui::Grid::new("session_detail_grid")
        .num_columns(2)
        .spacing(Vec2::new(spacing::LG, spacing::SM))
        .show(ui, |ui| {
            // Status is already shown as a badge next to the title.
            for (label, value) in details.rows().into_iter().skip(1) {
                ui.label(typography::text(
                    label,
                    FontSize::Small,
                    FontWeight::Regular,
                    colors::TEXT_MUTED,
                ));
                ui.label(typography::text(
                    value,
                    FontSize::Body,
                    FontWeight::Regular,
                    colors::TEXT_PRIMARY,
                ));
                ui.end_row();
            }
            ui.label(typography::text(
                "Available",
                FontSize::Small,
                FontWeight::Regular,
                colors::TEXT_MUTED,
            ));
            ui.label(typography::text(
                details.available.to_string(),
                FontSize::Body,
                FontWeight::Strong,
                availability_color(details.availability_style),
            ));
            ui.end_row();
        });

    if let Some(description) = &details.description {
        ui.add_space(spacing::LG);
        ui.label(typography::text(
            "Description",
            FontSize::Small,
            FontWeight::Strong,
            colors::TEXT_SECONDARY,
        ));
        ui.add_space(spacing::XS);
        ui.label(typography::text(
            description,
            FontSize::Body,
            FontWeight::Regular,
            colors::TEXT_PRIMARY,
        ));
    }
}

// ============================================================================
// Filter Bar and Schedule View
// ============================================================================

/// A filter picker selection made this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Date(String),
    Type(&'static str),
}

pub fn filter_bar(ui: &mut egui::Ui, id: &str, browser: &ScheduleBrowser) -> Option<FilterChange> {
    let criteria = browser.criteria();
    let current_date = criteria.date_label();
    let current_type = criteria.type_label();
    let mut change = None;

    ui.horizontal(|ui| {
        ui.label(typography::text(
            "Date",
            FontSize::Small,
            FontWeight::Regular,
            colors::TEXT_SECONDARY,
        ));
        egui::ComboBox::from_id_salt(format!("{}_date_filter", id))
            .selected_text(current_date.as_str())
            .show_ui(ui, |ui| {
                for option in browser.date_options() {
                    if ui.selectable_label(option == current_date, option.as_str()).clicked() {
                        change = Some(FilterChange::Date(option));
                    }
                }
            });

        ui.add_space(spacing::MD);
        ui.label(typography::text(
            "Type",
            FontSize::Small,
            FontWeight::Regular,
            colors::TEXT_SECONDARY,
        ));
        egui::ComboBox::from_id_salt(format!("{}_type_filter", id))
            .selected_text(current_type)
            .show_ui(ui, |ui| {
                for option in browser.type_options() {
                    if ui.selectable_label(option == current_type, option).clicked() {
                        change = Some(FilterChange::Type(option));
                    }
                }
            });

        ui.add_space(spacing::MD);
        ui.label(typography::text(
            format!("{} of {}", browser.list().sessions().len(), browser.total()),
            FontSize::Small,
            FontWeight::Regular,
            colors::TEXT_MUTED,
        ));
    });

    change
}

/// Filter bar above a list/detail split. Applies filter, click, and hover
/// interactions to the browser.
pub fn schedule_view(
    ui: &mut egui::Ui,
    id: &str,
    browser: &mut ScheduleBrowser,
    detail_footer: impl FnOnce(&mut egui::Ui, &ScheduleBrowser),
) {
    match filter_bar(ui, id, browser) {
        Some(FilterChange::Date(label)) => browser.set_date_label(&label),
        Some(FilterChange::Type(label)) => browser.set_type_label(label),
        None => {}
    }
    ui.add_space(spacing::MD);

    let available = ui.available_size();
    let list_width = (available.x * LIST_WIDTH_FRACTION).max(SPLIT_MIN_WIDTH);
    let mut clicked = None;
    let mut hovered = None;

    ui.horizontal_top(|ui| {
        ui.allocate_ui_with_layout(
            Vec2::new(list_width, available.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                if let Some(message) = browser.list().placeholder() {
                    placeholder(ui, message);
                    return;
                }
                egui::ScrollArea::vertical()
                    .id_salt(format!("{}_list", id))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for card in browser.list().cards() {
                            let response = session_card(ui, &card);
                            if response.clicked {
                                clicked = Some(card.id);
                            }
                            if response.hovered {
                                hovered = Some(card.id);
                            }
                            ui.add_space(spacing::SM);
                        }
                    });
            },
        );

        ui.separator();

        ui.allocate_ui_with_layout(
            Vec2::new(ui.available_width().max(SPLIT_MIN_WIDTH), available.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(format!("{}_detail", id))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        detail_view(ui, browser.detail().content());
                        detail_footer(ui, &*browser);
                    });
            },
        );
    });

    browser.set_hovered(hovered);
    if let Some(id) = clicked {
        browser.select(id);
    }
}
