use crate::config as cli_config;
use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libtempo::Config;
use libtempo::config::WeekStart;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Implement Formattable for Config to enable output formatting
impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let start = match self.week.start {
            WeekStart::Monday => "monday",
            WeekStart::Tuesday => "tuesday",
            WeekStart::Wednesday => "wednesday",
            WeekStart::Thursday => "thursday",
            WeekStart::Friday => "friday",
            WeekStart::Saturday => "saturday",
            WeekStart::Sunday => "sunday",
        };

        format!(
            "week:\n  start: {}\nzone:\n  default: {}\n",
            start, self.zone.default
        )
    }
}

/// Handle the config show subcommand
pub fn handle_show(ctx: &AppContext, format: OutputFormat) {
    match format::format_output(&ctx.config, format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the config path subcommand
pub fn handle_path() {
    match cli_config::get_config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: no config directory on this platform");
            std::process::exit(1);
        }
    }
}
