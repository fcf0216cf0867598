//! Terminal user interface built on ratatui.

pub mod app;

pub use app::{run_tui, ScheduleTui};
