//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//!
//! Command flags override at the handler level. Once built, the context is
//! passed as read-only throughout the application.

use crate::config as cli_config;
use libtempo::Config;
use libtempo::config::WeekStart;
use std::env;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Application context with resolved configuration
#[derive(Debug)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars
    pub fn build() -> Self {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Load and merge config file if it exists
        if let Some(path) = cli_config::get_config_path() {
            if path.exists() {
                if let Ok(file_config) = Config::load(Some(&path)) {
                    config = file_config;
                }
            }
        }

        // 3. Apply environment variable overrides
        if let Ok(start) = env::var("TEMPO_WEEK_START") {
            config.week.start = WeekStart::from(start.as_str());
        }
        if let Ok(zone) = env::var("TEMPO_ZONE") {
            config.zone.default = zone;
        }

        Self { config }
    }
}
