//! Error types for Tempo
//!
//! This module provides error handling for all fallible Tempo operations.
//! All errors implement the standard Error trait and provide context-rich
//! error messages.

use thiserror::Error;


/// Main error type for Tempo operations
#[derive(Error, Debug)]
pub enum TempoError {
    /// Input string could not be parsed as an epoch-seconds value
    #[error("Invalid format: {message}")]
    InvalidFormat {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Zone identifier is unknown to the time-zone database
    #[error("Time zone not found: {identifier}")]
    ZoneNotFound { identifier: String },

    /// Configuration errors (invalid config file, missing settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;

impl TempoError {
    /// Creates a new invalid format error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtempo::error::TempoError;
    ///
    /// let err = TempoError::invalid_format("empty time stamp");
    /// assert!(matches!(err, TempoError::InvalidFormat { .. }));
    /// ```
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new invalid format error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtempo::error::TempoError;
    ///
    /// let parse_err = "abc".parse::<f64>().unwrap_err();
    /// let err = TempoError::invalid_format_with_source("not a number", parse_err);
    /// assert!(matches!(err, TempoError::InvalidFormat { .. }));
    /// ```
    pub fn invalid_format_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidFormat {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new zone not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtempo::error::TempoError;
    ///
    /// let err = TempoError::zone_not_found("Mars/Olympus_Mons");
    /// assert!(matches!(err, TempoError::ZoneNotFound { .. }));
    /// ```
    pub fn zone_not_found<S: Into<String>>(identifier: S) -> Self {
        Self::ZoneNotFound {
            identifier: identifier.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtempo::error::TempoError;
    ///
    /// let err = TempoError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, TempoError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>, P: Into<String>>(message: S, path: Option<P>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtempo::error::TempoError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = TempoError::config_with_source("failed to read config", None::<String>, io_err);
    /// assert!(matches!(err, TempoError::Config { .. }));
    /// ```
    pub fn config_with_source<S, P, E>(message: S, path: Option<P>, source: E) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}
