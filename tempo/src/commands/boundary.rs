use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libtempo::config::WeekStart;
use serde::Serialize;

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;

/// First and last day of a month
#[derive(Debug, Serialize)]
pub struct MonthBoundary {
    pub month: String,
    pub first_day: String,
    pub last_day: String,
}

impl Formattable for MonthBoundary {
    fn format_pretty(&self) -> String {
        format!(
            "{}\n  first day: {}\n  last day:  {}\n",
            self.month, self.first_day, self.last_day
        )
    }
}

/// First and last day of a week
#[derive(Debug, Serialize)]
pub struct WeekBoundary {
    pub week_start: String,
    pub first_day: String,
    pub last_day: String,
}

impl Formattable for WeekBoundary {
    fn format_pretty(&self) -> String {
        format!(
            "week starting {}\n  first day: {}\n  last day:  {}\n",
            self.week_start, self.first_day, self.last_day
        )
    }
}

/// Handle the month command
pub fn handle_month(epoch: &str, format: OutputFormat) {
    match month(epoch) {
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

/// Handle the week command
pub fn handle_week(ctx: &AppContext, epoch: &str, start: Option<&str>, format: OutputFormat) {
    match week(ctx, epoch, start) {
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

fn month(epoch: &str) -> libtempo::Result<MonthBoundary> {
    let instant = libtempo::epoch::from_epoch_str(epoch)?;

    Ok(MonthBoundary {
        month: instant.format("%B %Y").to_string(),
        first_day: libtempo::boundary::first_day_of_month(&instant)
            .date_naive()
            .to_string(),
        last_day: libtempo::boundary::last_day_of_month(&instant)
            .date_naive()
            .to_string(),
    })
}

fn week(ctx: &AppContext, epoch: &str, start: Option<&str>) -> libtempo::Result<WeekBoundary> {
    let instant = libtempo::epoch::from_epoch_str(epoch)?;
    let anchor = start
        .map(WeekStart::from)
        .unwrap_or(ctx.config.week.start)
        .weekday();

    Ok(WeekBoundary {
        week_start: format!("{:?}", anchor),
        first_day: libtempo::boundary::first_day_of_week(&instant, anchor)
            .date_naive()
            .to_string(),
        last_day: libtempo::boundary::last_day_of_week(&instant, anchor)
            .date_naive()
            .to_string(),
    })
}
