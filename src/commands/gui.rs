//! GUI command handler.

use super::load_data;
use crate::config::Config;
use crate::error::Result;
use crate::ui::gui::app::{run_gui, SeminarApp};

/// Launch the native window, optionally logged in as `user`.
///
/// Returns when the user closes the window.
pub fn gui_command(config: &Config, user: Option<&str>) -> Result<()> {
    let mut app = SeminarApp::new(load_data(config)?)?;
    if let Some(user) = user {
        app.login(user)?;
    }
    tracing::info!("Opening seminar window");
    run_gui(app, &config.window)
}
