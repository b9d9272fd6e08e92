use crate::constants::{self, env_vars, schedule};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Schedule page URL; the fetch date is appended as `?date=YYYY-MM-DD`.
    #[serde(default = "default_schedule_base_url")]
    pub schedule_base_url: String,
    /// Directory that receives the exported CSV files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for page requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Date (YYYY-MM-DD) fetched by the `test` command.
    #[serde(default = "default_test_date")]
    pub test_date: String,
    /// When the weekly export fires.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Weekly trigger settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// English weekday name, e.g. `sunday`.
    pub weekday: String,
    /// Local fire time in HH:MM.
    pub fire_time: String,
    /// How often the scheduler checks whether the job is due.
    pub poll_interval_seconds: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            weekday: schedule::DEFAULT_WEEKDAY.to_string(),
            fire_time: schedule::DEFAULT_FIRE_TIME.to_string(),
            poll_interval_seconds: schedule::DEFAULT_POLL_INTERVAL_SECONDS,
        }
    }
}

fn default_schedule_base_url() -> String {
    constants::DEFAULT_SCHEDULE_BASE_URL.to_string()
}

fn default_output_dir() -> String {
    constants::DEFAULT_OUTPUT_DIR.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    constants::DEFAULT_USER_AGENT.to_string()
}

fn default_test_date() -> String {
    constants::DEFAULT_TEST_DATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schedule_base_url: default_schedule_base_url(),
            output_dir: default_output_dir(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
            test_date: default_test_date(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NPB_SCHEDULE_URL` - Override schedule page URL
    /// - `NPB_OUTPUT_DIR` - Override CSV output directory
    /// - `NPB_LOG_FILE` - Override log file path
    /// - `NPB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `NPB_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::SCHEDULE_URL) {
            self.schedule_base_url = url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Schedule Page:");
        println!("{}", self.schedule_base_url);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("────────────────────────────────────");
        println!("Weekly Run:");
        println!(
            "{} at {} (checked every {} seconds)",
            self.schedule.weekday, self.schedule.fire_time, self.schedule.poll_interval_seconds
        );
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
schedule_base_url = "https://npb.example.com/schedule/"
output_dir = "/srv/npb"
log_file_path = "/custom/log/path"

[schedule]
weekday = "monday"
fire_time = "06:30"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.schedule_base_url, "https://npb.example.com/schedule/");
        assert_eq!(config.output_dir, "/srv/npb");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.schedule.weekday, "monday");
        assert_eq!(config.schedule.fire_time, "06:30");
        // Missing keys fall back to defaults
        assert_eq!(
            config.schedule.poll_interval_seconds,
            schedule::DEFAULT_POLL_INTERVAL_SECONDS
        );
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
        assert_eq!(config.test_date, "2025-03-10");
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "output_dir = [unclosed").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/npb_results/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            output_dir: "exports".to_string(),
            log_file_path: Some("/var/log/npb.log".to_string()),
            schedule: ScheduleConfig {
                weekday: "saturday".to_string(),
                fire_time: "21:00".to_string(),
                poll_interval_seconds: 30,
            },
            ..Config::default()
        };

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("[schedule]"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var("NPB_SCHEDULE_URL", "http://localhost:9000/schedule/");
            std::env::set_var("NPB_OUTPUT_DIR", "/tmp/npb-env");
            std::env::set_var("NPB_LOG_FILE", "/env/log/path.log");
            std::env::set_var("NPB_HTTP_TIMEOUT", "5");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.schedule_base_url, "http://localhost:9000/schedule/");
        assert_eq!(config.output_dir, "/tmp/npb-env");
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);

        unsafe {
            std::env::remove_var("NPB_SCHEDULE_URL");
            std::env::remove_var("NPB_OUTPUT_DIR");
            std::env::remove_var("NPB_LOG_FILE");
            std::env::remove_var("NPB_HTTP_TIMEOUT");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_override_is_ignored() {
        unsafe {
            std::env::set_var("NPB_HTTP_TIMEOUT", "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, default_http_timeout());

        unsafe {
            std::env::remove_var("NPB_HTTP_TIMEOUT");
        }
    }
}
