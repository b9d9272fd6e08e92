use crate::config::Config;
use crate::data_fetcher::api::parse_fetch_date;
use crate::error::AppError;
use crate::scheduler::weekly::{parse_fire_time, parse_weekday};
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Schedule base URL must be an http:// or https:// URL
/// - Output directory cannot be empty
/// - HTTP timeout and poll interval must be positive
/// - Weekday, fire time and test date must parse
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let base_url = config.schedule_base_url.trim();
    if base_url.is_empty() {
        return Err(AppError::config_error("Schedule base URL cannot be empty"));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "Schedule base URL must start with http:// or https://",
        ));
    }

    if config.output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.schedule.poll_interval_seconds == 0 {
        return Err(AppError::config_error("Poll interval must be at least 1 second"));
    }

    parse_weekday(&config.schedule.weekday)?;
    parse_fire_time(&config.schedule.fire_time)?;
    parse_fetch_date(&config.test_date)
        .map_err(|e| AppError::config_error(format!("Invalid test_date: {e}")))?;

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
