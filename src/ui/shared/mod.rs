//! Shared view models for UI modules.
//!
//! These types hold the state and logic behind the schedule browser and the
//! main window shell. They know nothing about egui or ratatui, so the GUI and
//! TUI render the same state and the behavior is tested once, here.

pub mod browser;
pub mod dashboard;
pub mod detail;
pub mod list;
pub mod shell;

pub use browser::{BrowseScope, ScheduleBrowser};
pub use dashboard::{DashboardSummary, DayLoad};
pub use detail::{AvailabilityStyle, DetailContent, SessionDetailView, SessionDetails};
pub use list::{CapacityStyle, SelectionChanged, SessionCard, SessionListView};
pub use shell::{NavTarget, Panel, PanelCache, Refreshable, ShellChrome, ShellWindow};
