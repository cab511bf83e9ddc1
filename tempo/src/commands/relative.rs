use crate::format::{self, Formattable, OutputFormat};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;

/// Relative rendering of a single timestamp
#[derive(Debug, Serialize)]
pub struct RelativeResult {
    pub epoch: String,
    pub timestamp: String,
    pub relative: String,
}

impl Formattable for RelativeResult {
    fn format_pretty(&self) -> String {
        format!("{}\n{}\n", self.timestamp, self.relative)
    }
}

/// Handle the relative command
pub fn handle_relative(epoch: &str, format: OutputFormat) {
    match relative(epoch) {
        Ok(result) => match format::format_output(&result, format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error formatting output: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Render the timestamp relative to the wall clock
fn relative(epoch: &str) -> libtempo::Result<RelativeResult> {
    let instant = libtempo::epoch::from_epoch_str(epoch)?;
    Ok(relative_at(epoch, &instant, Utc::now()))
}

/// Render the timestamp relative to a fixed clock
fn relative_at(epoch: &str, instant: &DateTime<Utc>, now: DateTime<Utc>) -> RelativeResult {
    RelativeResult {
        epoch: epoch.trim().to_string(),
        timestamp: instant.to_rfc3339(),
        relative: libtempo::relative::format_relative_at(instant, now),
    }
}
