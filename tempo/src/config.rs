//! Config file location for the CLI.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Returns the config file path under the user config directory.
///
/// Returns `None` when the platform exposes no config directory.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tempo").join("config.yaml"))
}
