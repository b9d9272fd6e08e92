//! NPB (Japanese professional baseball) results exporter
//!
//! This library scrapes the NPB schedule page, turns every schedule row into
//! a [`GameRecord`] and exports the records to a CSV file, either once or on
//! a weekly schedule.
//!
//! # Examples
//!
//! ```rust,no_run
//! use npb_results::config::Config;
//! use npb_results::data_fetcher::api::{create_http_client, fetch_schedule_page};
//! use npb_results::data_fetcher::processors::parse_schedule_html;
//! use npb_results::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client(config.http_timeout_seconds, &config.user_agent)?;
//!
//!     let page = fetch_schedule_page(&client, &config.schedule_base_url, "2025-03-10").await?;
//!     for record in parse_schedule_html(&page) {
//!         println!("{} vs {:?}: {:?}", record.home_team, record.away_team, record.score);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod job;
pub mod logging;
pub mod scheduler;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{GameDetails, GameRecord};
pub use data_fetcher::processors::{extract_game_details, extract_game_records, parse_schedule_html};
pub use error::AppError;
pub use export::export_to_csv;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
