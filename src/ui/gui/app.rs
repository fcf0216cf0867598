//! Main GUI application.
//!
//! Owns the session store, the auth service, and the shell. Each frame renders
//! the header, sidebar, content, and status bar, collecting user intents as it
//! goes; the intents are applied once rendering is finished.

use crate::auth::{AuthService, LocalAuthService};
use crate::config::WindowConfig;
use crate::error::{Result, SeminarError};
use crate::store::{InMemorySessionStore, SeminarData, SessionStore};
use crate::ui::gui::modal::LogoutPrompt;
use crate::ui::gui::panels::{build_panel, GuiPanel, PanelAction};
use crate::ui::gui::theme::{self, colors, rounding, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};
use crate::ui::shared::{NavTarget, ShellWindow};
use eframe::egui::{self, Color32, Rounding, Stroke};

/// Minimum window width in pixels.
const MIN_WIDTH: f32 = 640.0;

/// Minimum window height in pixels.
const MIN_HEIGHT: f32 = 420.0;

const HEADER_HEIGHT: f32 = 48.0;
const STATUS_BAR_HEIGHT: f32 = 26.0;
const SIDEBAR_WIDTH: f32 = 190.0;
const NAV_ITEM_HEIGHT: f32 = 32.0;

/// User intents collected while rendering a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Intent {
    Login(String),
    Logout,
    Refresh,
    Navigate(NavTarget),
    Panel(PanelAction),
}

/// The seminar desk window.
pub struct SeminarApp {
    store: InMemorySessionStore,
    auth: LocalAuthService,
    shell: ShellWindow<dyn GuiPanel>,
    /// Account picked in the header login box.
    login_choice: String,
}

impl SeminarApp {
    pub fn new(data: SeminarData) -> Result<Self> {
        let store = InMemorySessionStore::new(data.sessions)?;
        let login_choice = data
            .users
            .first()
            .map(|u| u.username.clone())
            .unwrap_or_default();
        Ok(Self {
            store,
            auth: LocalAuthService::new(data.users),
            shell: ShellWindow::new(),
            login_choice,
        })
    }

    pub fn shell(&self) -> &ShellWindow<dyn GuiPanel> {
        &self.shell
    }

    pub fn store(&self) -> &dyn SessionStore {
        &self.store
    }

    pub fn auth(&self) -> &dyn AuthService {
        &self.auth
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Log in and land on the role's default page.
    pub fn login(&mut self, username: &str) -> Result<()> {
        let role = self.auth.login(username)?;
        let target = self.shell.update_for_role(role);
        if let Some(user) = self.auth.current_user() {
            let label = format!("{} ({})", user.name(), role.label());
            self.shell.set_user_label(label);
        }
        self.navigate(target);
        Ok(())
    }

    /// Show the panel behind `target`, building it on first visit.
    pub fn navigate(&mut self, target: NavTarget) {
        let store = &self.store;
        let username = self.auth.current_user().map(|u| u.username.as_str());
        self.shell
            .navigate(target, || build_panel(target, store, username));
    }

    /// Reload the active panel from the store.
    pub fn refresh(&mut self) {
        if self.shell.refresh_active(&self.store) {
            self.shell.set_status("Refreshed");
        }
    }

    pub fn apply_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Register(id) => {
                let Some(username) = self.auth.current_user().map(|u| u.username.clone()) else {
                    self.shell.set_status("Log in to register");
                    return;
                };
                match self.store.register(id, &username) {
                    Ok(()) => {
                        let title = self
                            .store
                            .get_session(id)
                            .map(|s| s.title)
                            .unwrap_or_else(|| id.to_string());
                        tracing::info!("{} registered for session {}", username, id);
                        self.shell.set_status(format!("Registered for {}", title));
                    }
                    Err(e) => {
                        tracing::warn!("Registration for session {} failed: {}", id, e);
                        self.shell.set_status(e.to_string());
                    }
                }
                // Refresh clears the selection; bring the acted-on session back.
                self.shell.refresh_active(&self.store);
                if let Some(panel) = self.shell.active_panel_mut() {
                    panel.select(id);
                }
            }
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Login(username) => {
                if let Err(e) = self.login(&username) {
                    tracing::warn!("Login failed: {}", e);
                    self.shell.set_status(e.to_string());
                }
            }
            Intent::Logout => self.shell.request_logout(),
            Intent::Refresh => self.refresh(),
            Intent::Navigate(target) => self.navigate(target),
            Intent::Panel(action) => self.apply_action(action),
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_header(&mut self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.horizontal_centered(|ui| {
            ui.label(typography::text(
                &self.shell.chrome().header_title,
                FontSize::Heading,
                FontWeight::Strong,
                colors::TEXT_PRIMARY,
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.auth.current_user().is_some() {
                    if ui.button("Log out").clicked() {
                        intents.push(Intent::Logout);
                    }
                    ui.label(typography::text(
                        &self.shell.chrome().user_label,
                        FontSize::Body,
                        FontWeight::Regular,
                        colors::TEXT_SECONDARY,
                    ));
                } else {
                    if ui.button("Log in").clicked() && !self.login_choice.is_empty() {
                        intents.push(Intent::Login(self.login_choice.clone()));
                    }
                    egui::ComboBox::from_id_salt("login_account")
                        .selected_text(self.login_choice.as_str())
                        .show_ui(ui, |ui| {
                            for account in self.auth.accounts() {
                                let label = format!("{} ({})", account.name(), account.role.label());
                                ui.selectable_value(
                                    &mut self.login_choice,
                                    account.username.clone(),
                                    label,
                                );
                            }
                        });
                }

                ui.add_space(spacing::MD);
                if ui.button("Refresh").clicked() {
                    intents.push(Intent::Refresh);
                }
            });
        });
    }

    fn render_sidebar(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.label(typography::text(
            "PAGES",
            FontSize::Caption,
            FontWeight::Strong,
            colors::TEXT_MUTED,
        ));
        ui.add_space(spacing::SM);

        for target in &self.shell.chrome().nav_items {
            let selected = !self.shell.is_welcome() && self.shell.selected_nav() == *target;
            let (fill, text_color) = if selected {
                (colors::SURFACE_SELECTED, colors::TEXT_PRIMARY)
            } else {
                (Color32::TRANSPARENT, colors::TEXT_SECONDARY)
            };
            let button = egui::Button::new(typography::text(
                target.label(),
                FontSize::Body,
                if selected {
                    FontWeight::Strong
                } else {
                    FontWeight::Regular
                },
                text_color,
            ))
            .fill(fill)
            .stroke(Stroke::NONE)
            .rounding(Rounding::same(rounding::BUTTON));

            let width = ui.available_width();
            if ui.add_sized([width, NAV_ITEM_HEIGHT], button).clicked() {
                intents.push(Intent::Navigate(*target));
            }
        }
    }

    fn render_welcome(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let target = NavTarget::default_for(self.shell.role());
        ui.add_space(spacing::XL * 2.0);
        ui.vertical_centered(|ui| {
            ui.label(typography::text(
                "Welcome to Seminar Desk",
                FontSize::Title,
                FontWeight::Strong,
                colors::TEXT_PRIMARY,
            ));
            ui.add_space(spacing::SM);
            ui.label(typography::text(
                "Pick a page from the sidebar, or log in from the header.",
                FontSize::Body,
                FontWeight::Regular,
                colors::TEXT_SECONDARY,
            ));
            ui.add_space(spacing::LG);
            if ui.button(format!("Open {}", target.label())).clicked() {
                intents.push(Intent::Navigate(target));
            }
        });
    }

    fn render_content(&mut self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        if self.shell.is_welcome() {
            self.render_welcome(ui, intents);
            return;
        }
        if let Some(panel) = self.shell.active_panel_mut() {
            if let Some(action) = panel.ui(ui) {
                intents.push(Intent::Panel(action));
            }
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            let message = &self.shell.chrome().status_message;
            let text = if message.is_empty() {
                format!("{} sessions", self.store.len())
            } else {
                message.clone()
            };
            ui.label(typography::text(
                text,
                FontSize::Small,
                FontWeight::Regular,
                colors::TEXT_MUTED,
            ));
        });
    }

    fn render_logout_prompt(&mut self, ctx: &egui::Context) {
        let user = self
            .auth
            .current_user()
            .map(|u| u.name().to_string())
            .unwrap_or_default();
        if let Some(confirmed) = LogoutPrompt::for_user(&user).show(ctx).resolved() {
            self.shell.resolve_logout(confirmed, &mut self.auth);
        }
    }
}

impl eframe::App for SeminarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(colors::SURFACE)
                    .inner_margin(egui::Margin::symmetric(spacing::LG, 0.0))
                    .stroke(Stroke::new(1.0, colors::SEPARATOR)),
            )
            .show(ctx, |ui| self.render_header(ui, &mut intents));

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(colors::SURFACE)
                    .inner_margin(egui::Margin::symmetric(spacing::LG, 0.0))
                    .stroke(Stroke::new(1.0, colors::SEPARATOR)),
            )
            .show(ctx, |ui| self.render_status_bar(ui));

        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin {
                        left: spacing::MD,
                        right: spacing::MD,
                        top: spacing::LG,
                        bottom: spacing::LG,
                    })
                    .stroke(Stroke::new(1.0, colors::SEPARATOR)),
            )
            .show(ctx, |ui| self.render_sidebar(ui, &mut intents));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin::same(spacing::LG)),
            )
            .show(ctx, |ui| self.render_content(ui, &mut intents));

        if self.shell.is_logout_pending() {
            self.render_logout_prompt(ctx);
        }

        for intent in intents {
            self.apply(intent);
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn build_viewport(window: &WindowConfig) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title("Seminar Desk")
        .with_inner_size([window.width.max(MIN_WIDTH), window.height.max(MIN_HEIGHT)])
        .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
}

/// Open the native window and block until it is closed.
pub fn run_gui(app: SeminarApp, window: &WindowConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: build_viewport(window),
        ..Default::default()
    };

    eframe::run_native(
        "seminar-desk",
        options,
        Box::new(|cc| {
            // Theme replaces the whole style; typography then adjusts text styles.
            theme::init(&cc.egui_ctx);
            typography::init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| SeminarError::Gui(e.to_string()))
}
