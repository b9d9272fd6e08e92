use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("npb_results")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("npb_results")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_points_at_toml_file() {
        let path = get_config_path();
        assert!(path.contains("npb_results"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_log_dir_is_next_to_config() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config_dir = Path::new(&config_path).parent().unwrap();
        assert_eq!(Path::new(&log_dir).parent().unwrap(), config_dir);
    }
}
