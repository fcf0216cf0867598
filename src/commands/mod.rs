//! CLI command handlers for seminar-desk.
//!
//! # Commands
//!
//! - [`gui`] - Native window (default)
//! - [`tui`] - Terminal schedule browser
//! - [`list`] - Print the filtered schedule
//! - [`config`] - Show the effective configuration

mod config;
mod gui;
mod list;
mod tui;

pub use config::config_command;
pub use gui::gui_command;
pub use list::list_command;
pub use tui::tui_command;

use crate::config::Config;
use crate::error::Result;
use crate::store::{InMemorySessionStore, SeminarData};

/// Load the configured data file, or the built-in sample when none is set.
pub fn load_data(config: &Config) -> Result<SeminarData> {
    SeminarData::load_or_sample(config.data_file.as_deref())
}

/// Load the configured schedule into a store.
pub fn load_store(config: &Config) -> Result<InMemorySessionStore> {
    InMemorySessionStore::new(load_data(config)?.sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeminarError;
    use crate::store::sample_sessions;
    use std::path::PathBuf;

    #[test]
    fn test_load_store_defaults_to_sample() {
        let store = load_store(&Config::default()).unwrap();
        assert_eq!(store.len(), sample_sessions().len());
    }

    #[test]
    fn test_load_store_missing_file() {
        let config = Config::default().with_data_file(Some(PathBuf::from("/no/such/seminar.json")));
        assert!(matches!(
            load_store(&config),
            Err(SeminarError::DataFileNotFound(_))
        ));
    }
}
