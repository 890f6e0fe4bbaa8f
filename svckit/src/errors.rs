use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for DashError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DashError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            DashError::HttpStatus {
                endpoint: err.url().map(|u| u.path().to_string()).unwrap_or_default(),
                status: status.as_u16(),
            }
        } else {
            DashError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::DecodeError(err.to_string())
    }
}

impl From<config::ConfigError> for DashError {
    fn from(err: config::ConfigError) -> Self {
        DashError::ConfigError(err.to_string())
    }
}
