use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;

/// Tempo - Date/Time Toolbox
///
/// A CLI tool for epoch conversion, calendar boundary queries, time-zone
/// conversion, and relative time strings.
#[derive(Parser, Debug)]
#[command(name = "tempo")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Render a timestamp as a relative time string
    Relative {
        /// Unix epoch seconds
        epoch: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Convert a timestamp into a zone's local time
    Convert {
        /// Unix epoch seconds
        epoch: String,
        /// IANA zone identifier (defaults to the configured zone)
        #[arg(short, long)]
        zone: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show the first and last day of the timestamp's month
    Month {
        /// Unix epoch seconds
        epoch: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show the first and last day of the timestamp's week
    Week {
        /// Unix epoch seconds
        epoch: String,
        /// Week start day (defaults to the configured anchor)
        #[arg(short, long)]
        start: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// List the days between two timestamps, inclusive
    Days {
        /// Unix epoch seconds of the first day
        start: String,
        /// Unix epoch seconds of the last day
        end: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the resolved configuration
    Show {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Print the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    // Build context with precedence: defaults > config file > env vars
    let ctx = context::AppContext::build();

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Relative { epoch, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::relative::handle_relative(&epoch, fmt);
        }
        Commands::Convert {
            epoch,
            zone,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::convert::handle_convert(&ctx, &epoch, zone.as_deref(), fmt);
        }
        Commands::Month { epoch, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::boundary::handle_month(&epoch, fmt);
        }
        Commands::Week {
            epoch,
            start,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::boundary::handle_week(&ctx, &epoch, start.as_deref(), fmt);
        }
        Commands::Days { start, end, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::days::handle_days(&start, &end, fmt);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show { format } => {
                let fmt = format::OutputFormat::from(format.as_str());
                commands::config::handle_show(&ctx, fmt);
            }
            ConfigCommands::Path => {
                commands::config::handle_path();
            }
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tempo", &mut std::io::stdout());
        }
    }
}
