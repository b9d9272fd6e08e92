//! The fetch → extract → export pipeline run by the scheduler and the `test` command.
//!
//! Every failure is contained here: a run that fails is logged and simply
//! produces no file.

use chrono::NaiveDate;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::{fetch_schedule_page, format_fetch_date};
use crate::data_fetcher::models::GameRecord;
use crate::data_fetcher::processors::parse_schedule_html;
use crate::error::AppError;
use crate::export::export_to_csv;
use crate::scheduler::Clock;

/// Fetches the schedule page for `date` and extracts its records.
#[instrument(skip(client, config))]
pub async fn collect_results(
    client: &Client,
    config: &Config,
    date: NaiveDate,
) -> Result<Vec<GameRecord>, AppError> {
    let date_str = format_fetch_date(date);
    let body = fetch_schedule_page(client, &config.schedule_base_url, &date_str).await?;
    let records = parse_schedule_html(&body);

    let games = records.iter().filter(|r| !r.is_no_game()).count();
    info!(
        "Extracted {} rows ({} games) for {}",
        records.len(),
        games,
        date_str
    );
    Ok(records)
}

/// The weekly job: fetches today's schedule page and exports it.
///
/// Returns the written file, or `None` when the run failed or found no rows.
pub async fn run_results_job<C: Clock + ?Sized>(
    client: &Client,
    config: &Config,
    clock: &C,
) -> Option<PathBuf> {
    let started = clock.now();
    info!("Job started: {started}");
    let today = started.date_naive();

    let records = match collect_results(client, config, today).await {
        Ok(records) => records,
        Err(e) => {
            log_collect_failure("Job", &e);
            return None;
        }
    };

    if records.is_empty() {
        info!("Job finished: {}, no results", clock.now());
        return None;
    }

    let written = export(&records, config, today);
    if let Some(path) = &written {
        info!("Job finished: {}, output file: {}", clock.now(), path.display());
    }
    written
}

/// One-off run for a fixed date. The file is always written, even when the
/// page had no rows, and is stamped with the clock's current date.
pub async fn run_test_job<C: Clock + ?Sized>(
    client: &Client,
    config: &Config,
    fetch_date: NaiveDate,
    clock: &C,
) -> Option<PathBuf> {
    info!("Test run started for {}", format_fetch_date(fetch_date));

    let records = match collect_results(client, config, fetch_date).await {
        Ok(records) => records,
        Err(e) => {
            log_collect_failure("Test run", &e);
            return None;
        }
    };

    if records.is_empty() {
        warn!("Test run found no rows, writing header-only file");
    }

    export(&records, config, clock.now().date_naive())
}

fn log_collect_failure(run: &str, e: &AppError) {
    if e.is_network_error() {
        error!("{run} failed, schedule page unavailable: {e}");
    } else {
        error!("{run} failed while collecting results: {e}");
    }
}

fn export(records: &[GameRecord], config: &Config, run_date: NaiveDate) -> Option<PathBuf> {
    match export_to_csv(records, Path::new(&config.output_dir), run_date) {
        Ok(path) => Some(path),
        Err(e) => {
            error!("Failed to write CSV file: {e}");
            None
        }
    }
}
