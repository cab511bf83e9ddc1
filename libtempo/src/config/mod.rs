//! Application configuration.
//!
//! This module manages library configuration with sensible defaults,
//! loading from a YAML file. Two knobs exist: the day a week starts on
//! (used by week-boundary queries) and the default zone identifier (used
//! by zone conversion when no explicit zone is given).

use crate::error::{Result, TempoError};
use chrono::Weekday;
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub week: Week,
    #[serde(default)]
    pub zone: Zone,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            // Add default values
            .add_source(Self::default_source()?)
            // Merge with YAML string
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// If the path is `None`, a default configuration is returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder()
            // Add default values
            .add_source(Self::default_source()?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).required(true));
        }

        Self::from_builder(builder)
    }

    fn default_source() -> Result<ConfigRs> {
        ConfigRs::try_from(&Config::default()).map_err(|e| {
            TempoError::config_with_source(
                "Failed to encode default configuration",
                None::<String>,
                e,
            )
        })
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                TempoError::config_with_source(
                    "Failed to deserialize configuration",
                    None::<String>,
                    e,
                )
            })
    }
}

/// Week boundary settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Week {
    #[serde(default)]
    pub start: WeekStart,
}

/// Enum for the day a week starts on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,

    Tuesday,

    Wednesday,

    Thursday,

    Friday,

    Saturday,

    Sunday,
}

impl WeekStart {
    /// Returns the corresponding calendar weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl From<&str> for WeekStart {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tuesday" | "tue" => WeekStart::Tuesday,
            "wednesday" | "wed" => WeekStart::Wednesday,
            "thursday" | "thu" => WeekStart::Thursday,
            "friday" | "fri" => WeekStart::Friday,
            "saturday" | "sat" => WeekStart::Saturday,
            "sunday" | "sun" => WeekStart::Sunday,
            _ => WeekStart::Monday,
        }
    }
}

/// Zone conversion settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zone {
    #[serde(default = "default_zone")]
    pub default: String,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            default: default_zone(),
        }
    }
}

fn default_zone() -> String {
    "UTC".to_string()
}
