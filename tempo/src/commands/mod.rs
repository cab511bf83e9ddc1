/// Month and week boundary command handlers
pub mod boundary;

/// Config command handlers
pub mod config;

/// Zone conversion command handlers
pub mod convert;

/// Day listing command handlers
pub mod days;

/// Relative time command handlers
pub mod relative;

/// Version command handlers
pub mod version;
