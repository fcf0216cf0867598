//! User interfaces for seminar-desk.
//!
//! Both front ends render the view models in [`shared`].
//!
//! # Submodules
//!
//! - [`gui`] - Native GUI using eframe/egui
//! - [`tui`] - Terminal UI using ratatui
//! - [`shared`] - Framework-agnostic view state

pub mod gui;
pub mod shared;
pub mod tui;
