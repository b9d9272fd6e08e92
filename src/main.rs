// src/main.rs
use clap::Parser;
use npb_results::cli::{Args, Command};
use npb_results::commands::{
    apply_cli_overrides, handle_list_config_command, handle_schedule_command, handle_test_command,
};
use npb_results::config::Config;
use npb_results::error::AppError;
use npb_results::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    apply_cli_overrides(&args, &mut config)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        handle_list_config_command(&config);
        return Ok(());
    }

    match &args.command {
        Some(Command::Test { date }) => handle_test_command(&config, date.as_deref()).await,
        None => handle_schedule_command(&config).await,
    }
}
