use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{create_http_client, format_fetch_date, parse_fetch_date};
use crate::error::AppError;
use crate::job::{run_results_job, run_test_job};
use crate::scheduler::{Clock, Scheduler, SystemClock, WeeklySchedule, run_scheduler_loop};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

/// Applies command line overrides on top of the loaded configuration.
pub fn apply_cli_overrides(args: &Args, config: &mut Config) -> Result<(), AppError> {
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config.validate()
}

fn build_client(config: &Config) -> Result<Client, AppError> {
    Ok(create_http_client(
        config.http_timeout_seconds,
        &config.user_agent,
    )?)
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles the `test` command.
///
/// Fetches a single fixed date (the `--date` argument, or the configured
/// test date) and writes the CSV immediately. A failed run is reported but
/// is not an error exit.
pub async fn handle_test_command(config: &Config, date: Option<&str>) -> Result<(), AppError> {
    let fetch_date = parse_fetch_date(date.unwrap_or(&config.test_date))?;
    let client = build_client(config)?;

    println!("Starting test run for {}...", format_fetch_date(fetch_date));
    match run_test_job(&client, config, fetch_date, &SystemClock).await {
        Some(path) => println!("Test finished, output file: {}", path.display()),
        None => println!("Test finished, no output file written (see log for details)"),
    }

    Ok(())
}

/// Handles the default mode: runs the weekly export until Ctrl+C.
pub async fn handle_schedule_command(config: &Config) -> Result<(), AppError> {
    let schedule = WeeklySchedule::from_config(&config.schedule)?;
    let client = build_client(config)?;
    let clock = SystemClock;
    let mut scheduler = Scheduler::new(schedule, clock.now());

    println!(
        "Scheduler started. The export runs every {} at {} (next run: {}).",
        config.schedule.weekday,
        config.schedule.fire_time,
        scheduler.next_run().format("%Y-%m-%d %H:%M")
    );
    println!("Press Ctrl+C to stop.");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let client = &client;
    let job_clock = &clock;
    let runs = run_scheduler_loop(
        &mut scheduler,
        &clock,
        Duration::from_secs(config.schedule.poll_interval_seconds),
        move || async move {
            if run_results_job(client, config, job_clock).await.is_none() {
                info!("Run produced no output file");
            }
        },
        shutdown,
    )
    .await;

    println!("Scheduler stopped after {runs} runs.");
    Ok(())
}
