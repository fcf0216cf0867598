//! Content panels hosted by the main window.
//!
//! Every navigation target maps to one panel type. Panels keep their own view
//! state between visits (the shell caches them) and report user intents as
//! [`PanelAction`]s that the app applies against the store.

use crate::session::{Session, SessionId, SessionStatus};
use crate::store::SessionStore;
use crate::ui::gui::components::{self, page_title};
use crate::ui::gui::theme::{colors, rounding, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};
use crate::ui::shared::{
    BrowseScope, DashboardSummary, NavTarget, Panel, Refreshable, ScheduleBrowser,
};
use eframe::egui::{self, Color32, Rounding};
use egui_extras::{Column, TableBuilder};

const TABLE_ROW_HEIGHT: f32 = 22.0;
const STAT_CARD_WIDTH: f32 = 150.0;

/// Something a panel asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Register(SessionId),
}

/// A panel that can draw itself into the content region.
pub trait GuiPanel: Panel {
    fn ui(&mut self, ui: &mut egui::Ui) -> Option<PanelAction>;

    /// Selected session, for panels that list sessions.
    fn selected(&self) -> Option<SessionId> {
        None
    }

    /// Select `id` if the panel lists it. No-op for other panels.
    fn select(&mut self, _id: SessionId) {}
}

/// Build the panel behind a navigation target.
pub fn build_panel(
    target: NavTarget,
    store: &dyn SessionStore,
    username: Option<&str>,
) -> Box<dyn GuiPanel> {
    match target {
        NavTarget::Schedule => Box::new(SchedulePanel::new(
            target.label(),
            BrowseScope::All,
            store,
        )),
        NavTarget::Assigned => Box::new(SchedulePanel::new(
            target.label(),
            BrowseScope::AssignedTo(username.unwrap_or_default().to_string()),
            store,
        )),
        NavTarget::Registration => Box::new(RegistrationPanel::new(
            store,
            username.unwrap_or_default(),
        )),
        NavTarget::Dashboard => Box::new(DashboardPanel::new(store)),
    }
}

// ============================================================================
// Schedule Panel
// ============================================================================

/// Read-only schedule browser.
pub struct SchedulePanel {
    title: String,
    browser: ScheduleBrowser,
}

impl SchedulePanel {
    pub fn new(title: &str, scope: BrowseScope, store: &dyn SessionStore) -> Self {
        Self {
            title: title.to_string(),
            browser: ScheduleBrowser::new(scope, store),
        }
    }

    pub fn browser(&self) -> &ScheduleBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut ScheduleBrowser {
        &mut self.browser
    }
}

impl Panel for SchedulePanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn as_refreshable(&mut self) -> Option<&mut dyn Refreshable> {
        Some(self)
    }
}

impl Refreshable for SchedulePanel {
    fn refresh(&mut self, store: &dyn SessionStore) {
        self.browser.reload(store);
    }
}

impl GuiPanel for SchedulePanel {
    fn ui(&mut self, ui: &mut egui::Ui) -> Option<PanelAction> {
        page_title(ui, &self.title);
        components::schedule_view(ui, &self.title, &mut self.browser, |_, _| {});
        None
    }

    fn selected(&self) -> Option<SessionId> {
        self.browser.list().selected()
    }

    fn select(&mut self, id: SessionId) {
        self.browser.select(id);
    }
}

// ============================================================================
// Registration Panel
// ============================================================================

/// Why `username` cannot register for `session`, if they cannot.
pub fn registration_block(session: &Session, username: &str) -> Option<&'static str> {
    if username.is_empty() {
        Some("Log in to register")
    } else if session.status != SessionStatus::Scheduled {
        Some("Registration is closed")
    } else if session.has_attendee(username) {
        Some("You are registered")
    } else if session.is_full() {
        Some("No seats left")
    } else {
        None
    }
}

/// Open sessions with a register button under the detail view.
pub struct RegistrationPanel {
    username: String,
    browser: ScheduleBrowser,
}

impl RegistrationPanel {
    pub fn new(store: &dyn SessionStore, username: &str) -> Self {
        Self {
            username: username.to_string(),
            browser: ScheduleBrowser::new(BrowseScope::Scheduled, store),
        }
    }

    pub fn browser(&self) -> &ScheduleBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut ScheduleBrowser {
        &mut self.browser
    }
}

impl Panel for RegistrationPanel {
    fn title(&self) -> &str {
        NavTarget::Registration.label()
    }

    fn as_refreshable(&mut self) -> Option<&mut dyn Refreshable> {
        Some(self)
    }
}

impl Refreshable for RegistrationPanel {
    fn refresh(&mut self, store: &dyn SessionStore) {
        self.browser.reload(store);
    }
}

impl GuiPanel for RegistrationPanel {
    fn ui(&mut self, ui: &mut egui::Ui) -> Option<PanelAction> {
        page_title(ui, NavTarget::Registration.label());
        let username = self.username.as_str();
        let mut action = None;

        components::schedule_view(ui, "registration", &mut self.browser, |ui, browser| {
            let Some(session) = browser.selected_session() else {
                return;
            };
            ui.add_space(spacing::LG);
            match registration_block(session, username) {
                Some(reason) => {
                    ui.label(typography::text(
                        reason,
                        FontSize::Body,
                        FontWeight::Regular,
                        colors::TEXT_MUTED,
                    ));
                }
                None => {
                    let button = egui::Button::new(typography::text(
                        "Register",
                        FontSize::Body,
                        FontWeight::Strong,
                        Color32::WHITE,
                    ))
                    .fill(colors::ACCENT)
                    .rounding(Rounding::same(rounding::BUTTON));
                    if ui.add(button).clicked() {
                        action = Some(PanelAction::Register(session.id));
                    }
                }
            }
        });

        action
    }

    fn selected(&self) -> Option<SessionId> {
        self.browser.list().selected()
    }

    fn select(&mut self, id: SessionId) {
        self.browser.select(id);
    }
}

// ============================================================================
// Dashboard Panel
// ============================================================================

/// Coordinator overview of the whole schedule.
pub struct DashboardPanel {
    summary: DashboardSummary,
}

impl DashboardPanel {
    pub fn new(store: &dyn SessionStore) -> Self {
        Self {
            summary: DashboardSummary::load(store),
        }
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    fn stat_card(ui: &mut egui::Ui, label: &str, value: String, color: Color32) {
        egui::Frame::none()
            .fill(colors::SURFACE)
            .rounding(Rounding::same(rounding::CARD))
            .stroke(egui::Stroke::new(1.0, colors::BORDER))
            .inner_margin(egui::Margin::same(spacing::MD))
            .show(ui, |ui| {
                ui.set_width(STAT_CARD_WIDTH);
                ui.label(typography::text(
                    label,
                    FontSize::Small,
                    FontWeight::Regular,
                    colors::TEXT_MUTED,
                ));
                ui.label(typography::text(
                    value,
                    FontSize::Title,
                    FontWeight::Strong,
                    color,
                ));
            });
    }

    fn render_days(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(TABLE_ROW_HEIGHT, |mut header| {
                for title in ["Date", "Sessions", "Seats taken"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for day in &self.summary.days {
                    body.row(TABLE_ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(day.date.format("%a %Y-%m-%d").to_string());
                        });
                        row.col(|ui| {
                            ui.label(day.sessions.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{} / {}", day.registered, day.capacity));
                        });
                    });
                }
            });
    }
}

impl Panel for DashboardPanel {
    fn title(&self) -> &str {
        NavTarget::Dashboard.label()
    }

    fn as_refreshable(&mut self) -> Option<&mut dyn Refreshable> {
        Some(self)
    }
}

impl Refreshable for DashboardPanel {
    fn refresh(&mut self, store: &dyn SessionStore) {
        self.summary = DashboardSummary::load(store);
    }
}

impl GuiPanel for DashboardPanel {
    fn ui(&mut self, ui: &mut egui::Ui) -> Option<PanelAction> {
        page_title(ui, NavTarget::Dashboard.label());
        let summary = &self.summary;

        ui.horizontal_wrapped(|ui| {
            Self::stat_card(ui, "Sessions", summary.total.to_string(), colors::TEXT_PRIMARY);
            Self::stat_card(
                ui,
                "Scheduled",
                summary.scheduled.to_string(),
                colors::STATUS_SCHEDULED,
            );
            Self::stat_card(
                ui,
                "Cancelled",
                summary.cancelled.to_string(),
                colors::STATUS_ERROR,
            );
            Self::stat_card(
                ui,
                "Seats taken",
                format!("{:.0}%", summary.utilization() * 100.0),
                colors::ACCENT,
            );
        });
        ui.add_space(spacing::SM);
        ui.label(typography::text(
            format!(
                "{} oral, {} poster, {} completed",
                summary.oral, summary.poster, summary.completed
            ),
            FontSize::Small,
            FontWeight::Regular,
            colors::TEXT_SECONDARY,
        ));

        ui.add_space(spacing::XL);
        ui.label(typography::text(
            "Full sessions",
            FontSize::Heading,
            FontWeight::Strong,
            colors::TEXT_PRIMARY,
        ));
        ui.add_space(spacing::SM);
        if summary.full_sessions.is_empty() {
            components::placeholder(ui, "Every scheduled session has seats left");
        }
        for session in &summary.full_sessions {
            ui.label(typography::text(
                format!(
                    "{}  {}  {}  ({} seats)",
                    session.date.format("%Y-%m-%d"),
                    session.time_range(),
                    session.title,
                    session.capacity
                ),
                FontSize::Body,
                FontWeight::Regular,
                colors::STATUS_ERROR,
            ));
        }

        ui.add_space(spacing::XL);
        ui.label(typography::text(
            "By day",
            FontSize::Heading,
            FontWeight::Strong,
            colors::TEXT_PRIMARY,
        ));
        ui.add_space(spacing::SM);
        self.render_days(ui);
        None
    }
}
