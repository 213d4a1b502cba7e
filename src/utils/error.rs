use thiserror::Error;

/// Text shown when a request could not complete at all.
pub const GENERIC_ALERT: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Not logged in (401 from {path})")]
    Unauthorized { path: String },

    #[error("Unexpected status {status} from {path}: {message}")]
    StatusError {
        path: String,
        status: u16,
        message: String,
    },
}

impl ClientError {
    /// The text an alert shows for this error.
    pub fn alert_message(&self) -> String {
        match self {
            ClientError::ValidationError { message } => message.clone(),
            ClientError::Unauthorized { .. } => "Please log in first.".to_string(),
            _ => GENERIC_ALERT.to_string(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ClientError::ConfigError { .. } | ClientError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
