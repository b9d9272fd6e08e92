//! URL building utilities for the schedule site

/// Builds the schedule page URL for a single date.
///
/// # Arguments
/// * `base_url` - The schedule page URL without query string
/// * `date` - The date in YYYY-MM-DD format
///
/// # Example
/// ```
/// use npb_results::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://baseball.yahoo.co.jp/npb/schedule/", "2025-03-10");
/// assert_eq!(url, "https://baseball.yahoo.co.jp/npb/schedule/?date=2025-03-10");
/// ```
pub fn build_schedule_url(base_url: &str, date: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}date={date}")
}

/// Builds the output file name for a run date stamp (YYYYMMDD).
///
/// # Example
/// ```
/// use npb_results::data_fetcher::api::build_export_file_name;
///
/// assert_eq!(build_export_file_name("20250310"), "npb_results_20250310.csv");
/// ```
pub fn build_export_file_name(run_stamp: &str) -> String {
    format!("{}{run_stamp}.csv", crate::constants::export::FILE_PREFIX)
}
