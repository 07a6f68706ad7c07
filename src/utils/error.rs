use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    StatusError { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl SiteError {
    /// Connection, timeout, non-2xx and body decoding failures.
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            SiteError::ApiError(_) | SiteError::StatusError { .. } | SiteError::UrlError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
