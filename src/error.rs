use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    PageFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Server error ({status}): {message} (URL: {url})")]
    PageServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Client error ({status}): {message} (URL: {url})")]
    PageClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Rate limit exceeded (429): {message} (URL: {url})")]
    PageRateLimit { message: String, url: String },

    #[error("Service unavailable ({status}): {message} (URL: {url})")]
    PageServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching page: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Page returned an empty body: {url}")]
    PageEmpty { url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("CSV export failed for {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn page_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::PageServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404 and 429)
    pub fn page_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::PageClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a rate limit error
    pub fn page_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::PageRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a service unavailable error (502/503)
    pub fn page_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::PageServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an empty page error
    pub fn page_empty(url: impl Into<String>) -> Self {
        Self::PageEmpty { url: url.into() }
    }

    /// Wrap an I/O failure that happened while writing an export file
    pub fn export_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened while talking to the remote site
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::PageFetch(_)
                | AppError::PageNotFound { .. }
                | AppError::PageServerError { .. }
                | AppError::PageClientError { .. }
                | AppError::PageRateLimit { .. }
                | AppError::PageServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::PageEmpty { .. }
        )
    }
}
