//! Config command handler.

use crate::config::{config_path, validate_config, Config};
use crate::error::Result;
use crate::output::print_config;

/// Show the effective configuration and where it lives.
pub fn config_command(config: &Config) -> Result<()> {
    validate_config(config)?;
    print_config(config, &config_path()?);
    Ok(())
}
