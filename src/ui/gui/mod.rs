//! Native GUI built on eframe/egui.
//!
//! - [`app`] - Window shell, header, sidebar, and status bar
//! - [`panels`] - Content panels behind each navigation target
//! - [`components`] - Session cards, detail view, and filter bar
//! - [`modal`] - Logout confirmation prompt
//! - [`theme`] and [`typography`] - Colors, spacing, and type scale

pub mod app;
pub mod components;
pub mod modal;
pub mod panels;
pub mod theme;
pub mod typography;
