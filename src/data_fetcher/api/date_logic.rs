//! Date parsing and formatting for fetch dates and run stamps

use chrono::NaiveDate;

use crate::error::AppError;

/// Formats a date the way the schedule page expects it (`YYYY-MM-DD`).
pub fn format_fetch_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats the run date used in export file names (`YYYYMMDD`).
pub fn format_run_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parses a `YYYY-MM-DD` date given on the command line or in the config.
pub fn parse_fetch_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!(
            "Invalid date '{date}', expected YYYY-MM-DD: {e}"
        ))
    })
}
