//! TUI command handler.

use super::load_store;
use crate::config::Config;
use crate::error::Result;
use crate::ui::tui::run_tui;

/// Browse the schedule in the terminal until the user quits.
pub fn tui_command(config: &Config) -> Result<()> {
    let store = load_store(config)?;
    run_tui(&store)
}
