//! Main window navigation: panel cache, active panel, and role-driven chrome.
//!
//! The shell is framework-agnostic. The GUI instantiates it with its own
//! panel trait object; tests use plain structs.

use crate::auth::AuthService;
use crate::session::Role;
use crate::store::SessionStore;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

// ============================================================================
// Panel Capabilities
// ============================================================================

/// A panel that can reload its data and reset transient state on demand.
pub trait Refreshable {
    fn refresh(&mut self, store: &dyn SessionStore);
}

/// A unit of content displayable in the shell's content region.
pub trait Panel {
    fn title(&self) -> &str;

    /// The refresh capability, if this panel has one.
    fn as_refreshable(&mut self) -> Option<&mut dyn Refreshable> {
        None
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Role-scoped navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Schedule,
    Registration,
    Dashboard,
    Assigned,
}

impl NavTarget {
    /// Cache key of the panel behind this target.
    pub fn key(self) -> &'static str {
        match self {
            NavTarget::Schedule => "schedule",
            NavTarget::Registration => "registration",
            NavTarget::Dashboard => "dashboard",
            NavTarget::Assigned => "assigned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Schedule => "Schedule",
            NavTarget::Registration => "Registration",
            NavTarget::Dashboard => "Dashboard",
            NavTarget::Assigned => "Assigned Sessions",
        }
    }

    /// Landing target after a role change.
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Coordinator => NavTarget::Dashboard,
            Role::Evaluator => NavTarget::Assigned,
            Role::Student => NavTarget::Registration,
            Role::Guest => NavTarget::Schedule,
        }
    }

    /// Menu items visible to a role, default target first.
    pub fn menu_for(role: Role) -> Vec<NavTarget> {
        match role {
            Role::Guest => vec![NavTarget::Schedule],
            Role::Student => vec![NavTarget::Registration, NavTarget::Schedule],
            Role::Coordinator => vec![NavTarget::Dashboard, NavTarget::Schedule],
            Role::Evaluator => vec![NavTarget::Assigned, NavTarget::Schedule],
        }
    }
}

/// Header, sidebar, and status bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellChrome {
    pub header_title: String,
    pub user_label: String,
    pub nav_items: Vec<NavTarget>,
    pub status_message: String,
}

impl ShellChrome {
    fn for_role(role: Role) -> Self {
        Self {
            header_title: format!("Seminar Desk - {}", role.label()),
            user_label: role.label().to_string(),
            nav_items: NavTarget::menu_for(role),
            status_message: String::new(),
        }
    }
}

// ============================================================================
// Panel Cache
// ============================================================================

/// Constructed panels keyed by string. At most one entry per key.
pub struct PanelCache<P: ?Sized> {
    panels: HashMap<String, Box<P>>,
}

impl<P: ?Sized> Default for PanelCache<P> {
    fn default() -> Self {
        Self {
            panels: HashMap::new(),
        }
    }
}

impl<P: ?Sized> PanelCache<P> {
    /// Return the panel for `key`, building it with `factory` only if absent.
    pub fn get_or_insert_with(&mut self, key: &str, factory: impl FnOnce() -> Box<P>) -> &mut P {
        match self.panels.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut().as_mut(),
            Entry::Vacant(entry) => {
                tracing::debug!("Building panel {:?}", key);
                entry.insert(factory()).as_mut()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&P> {
        self.panels.get(key).map(Box::as_ref)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut P> {
        self.panels.get_mut(key).map(Box::as_mut)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.panels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }
}

// ============================================================================
// Shell Window
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActivePanel {
    Welcome,
    Cached(String),
    /// Set by `switch_panel`; lives outside the cache.
    Transient,
}

/// Navigation state of the main window.
pub struct ShellWindow<P: Panel + ?Sized> {
    cache: PanelCache<P>,
    transient: Option<Box<P>>,
    active: ActivePanel,
    role: Role,
    selected_nav: NavTarget,
    chrome: ShellChrome,
    logout_pending: bool,
}

impl<P: Panel + ?Sized> Default for ShellWindow<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Panel + ?Sized> ShellWindow<P> {
    /// A guest shell showing the welcome view.
    pub fn new() -> Self {
        Self {
            cache: PanelCache::default(),
            transient: None,
            active: ActivePanel::Welcome,
            role: Role::Guest,
            selected_nav: NavTarget::default_for(Role::Guest),
            chrome: ShellChrome::for_role(Role::Guest),
            logout_pending: false,
        }
    }

    // ========================================================================
    // Panel Switching
    // ========================================================================

    /// Replace the active panel unconditionally. The panel is not cached.
    pub fn switch_panel(&mut self, panel: Box<P>) {
        self.transient = Some(panel);
        self.active = ActivePanel::Transient;
    }

    /// Show the cached panel for `key`, building it with `factory` on first use.
    pub fn switch_to_panel(&mut self, key: &str, factory: impl FnOnce() -> Box<P>) -> &mut P {
        if self.cache.contains(key) {
            tracing::debug!("Reusing cached panel {:?}", key);
        }
        self.transient = None;
        self.active = ActivePanel::Cached(key.to_string());
        self.cache.get_or_insert_with(key, factory)
    }

    /// Select a navigation target and show its panel.
    pub fn navigate(&mut self, target: NavTarget, factory: impl FnOnce() -> Box<P>) -> &mut P {
        self.selected_nav = target;
        self.switch_to_panel(target.key(), factory)
    }

    pub fn show_welcome(&mut self) {
        self.transient = None;
        self.active = ActivePanel::Welcome;
    }

    pub fn is_welcome(&self) -> bool {
        self.active == ActivePanel::Welcome
    }

    /// Cache key of the active panel, if it came from the cache.
    pub fn active_key(&self) -> Option<&str> {
        match &self.active {
            ActivePanel::Cached(key) => Some(key),
            _ => None,
        }
    }

    pub fn active_panel(&self) -> Option<&P> {
        match &self.active {
            ActivePanel::Welcome => None,
            ActivePanel::Cached(key) => self.cache.get(key),
            ActivePanel::Transient => self.transient.as_deref(),
        }
    }

    pub fn active_panel_mut(&mut self) -> Option<&mut P> {
        match &self.active {
            ActivePanel::Welcome => None,
            ActivePanel::Cached(key) => self.cache.get_mut(key),
            ActivePanel::Transient => self.transient.as_deref_mut(),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn contains_panel(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    // ========================================================================
    // Role Propagation
    // ========================================================================

    /// Apply a new role: rebuild the chrome, drop every cached panel, and
    /// select the role's default target. Returns that target.
    ///
    /// The caller decides whether to navigate to it; the shell keeps showing
    /// the welcome view until then.
    pub fn update_for_role(&mut self, role: Role) -> NavTarget {
        tracing::info!(
            "Role changed to {}, dropping {} cached panels",
            role.label(),
            self.cache.len()
        );
        self.role = role;
        self.chrome = ShellChrome::for_role(role);
        self.cache.clear();
        self.show_welcome();
        self.selected_nav = NavTarget::default_for(role);
        self.selected_nav
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn selected_nav(&self) -> NavTarget {
        self.selected_nav
    }

    pub fn chrome(&self) -> &ShellChrome {
        &self.chrome
    }

    pub fn set_user_label(&mut self, label: impl Into<String>) {
        self.chrome.user_label = label.into();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.chrome.status_message = message.into();
    }

    // ========================================================================
    // Logout Flow
    // ========================================================================

    /// Ask for logout confirmation.
    pub fn request_logout(&mut self) {
        self.logout_pending = true;
    }

    pub fn is_logout_pending(&self) -> bool {
        self.logout_pending
    }

    /// Resolve a pending logout prompt. Returns true if the user was logged out.
    ///
    /// On confirm: clears authentication, resets to guest, and shows the
    /// welcome view. On cancel, or with no prompt pending, nothing changes.
    pub fn resolve_logout(&mut self, confirmed: bool, auth: &mut dyn AuthService) -> bool {
        if !std::mem::take(&mut self.logout_pending) || !confirmed {
            return false;
        }
        auth.logout();
        self.update_for_role(Role::Guest);
        self.show_welcome();
        self.set_status("Logged out");
        true
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Refresh the active panel if it is refreshable. Returns whether it was.
    pub fn refresh_active(&mut self, store: &dyn SessionStore) -> bool {
        match self.active_panel_mut().and_then(|p| p.as_refreshable()) {
            Some(panel) => {
                panel.refresh(store);
                true
            }
            None => false,
        }
    }
}
