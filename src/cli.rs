use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NPB results exporter
///
/// Scrapes the Japanese professional baseball schedule page and writes each
/// game (teams, score, pitching decisions, stadium) to a CSV file.
///
/// Without a command the exporter runs as a persistent weekly scheduler
/// (Sunday 18:00 local time by default). Stop it with Ctrl+C.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Write CSV files to this directory instead of the configured one.
    #[arg(long = "output-dir", short = 'o', global = true, help_heading = "Output")]
    pub output_dir: Option<String>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Log only to the log file, not to the terminal.
    #[arg(long = "quiet", short = 'q', global = true, help_heading = "Logging")]
    pub quiet: bool,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one extraction immediately and write the CSV, bypassing the scheduler.
    Test {
        /// Fetch this date (YYYY-MM-DD) instead of the configured test date.
        #[arg(long = "date", short = 'd')]
        date: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_starts_scheduler() {
        let args = Args::try_parse_from(["npb_results"]).unwrap();
        assert_eq!(args.command, None);
        assert!(!args.list_config);
        assert!(!args.quiet);
    }

    #[test]
    fn test_literal_test_argument() {
        let args = Args::try_parse_from(["npb_results", "test"]).unwrap();
        assert_eq!(args.command, Some(Command::Test { date: None }));
    }

    #[test]
    fn test_test_with_date_and_global_flags() {
        let args = Args::try_parse_from([
            "npb_results",
            "test",
            "--date",
            "2025-04-01",
            "--output-dir",
            "/tmp/out",
            "-q",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Test {
                date: Some("2025-04-01".to_string())
            })
        );
        assert_eq!(args.output_dir.as_deref(), Some("/tmp/out"));
        assert!(args.quiet);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Args::try_parse_from(["npb_results", "run-now"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
