use crate::format::{self, Formattable, OutputFormat};
use serde::Serialize;

#[cfg(test)]
#[path = "days_tests.rs"]
mod tests;

/// The inclusive day-by-day walk between two timestamps
#[derive(Debug, Serialize)]
pub struct DayList {
    pub start: String,
    pub end: String,
    pub total_days: usize,
    pub days: Vec<String>,
}

impl Formattable for DayList {
    fn format_pretty(&self) -> String {
        if self.days.is_empty() {
            return "No days in range\n".to_string();
        }

        let mut output = format!("{} days:\n", self.total_days);
        for day in &self.days {
            output.push_str(&format!("  - {}\n", day));
        }
        output
    }
}

/// Handle the days command
pub fn handle_days(start: &str, end: &str, format: OutputFormat) {
    match days(start, end) {
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

fn days(start: &str, end: &str) -> libtempo::Result<DayList> {
    let first = libtempo::epoch::from_epoch_str(start)?;
    let last = libtempo::epoch::from_epoch_str(end)?;

    let days: Vec<String> = libtempo::boundary::each_day(&first, &last)
        .map(|day| day.date_naive().to_string())
        .collect();

    Ok(DayList {
        start: first.date_naive().to_string(),
        end: last.date_naive().to_string(),
        total_days: days.len(),
        days,
    })
}
