use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotterError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Status Code {status} when fetching {context}. Response: {body}")]
    HttpStatusError {
        status: u16,
        context: String,
        body: String,
    },

    #[error("{message}")]
    ApiError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Provider,
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SpotterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpotterError::NetworkError(_) => ErrorCategory::Network,
            SpotterError::HttpStatusError { .. } | SpotterError::ApiError { .. } => {
                ErrorCategory::Provider
            }
            SpotterError::SerializationError(_) => ErrorCategory::Data,
            SpotterError::IoError(_) => ErrorCategory::Io,
            SpotterError::ConfigError { .. }
            | SpotterError::InvalidConfigValueError { .. }
            | SpotterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路與供應商狀態碼錯誤通常稍後重試即可
            SpotterError::NetworkError(_) | SpotterError::HttpStatusError { .. } => {
                ErrorSeverity::Medium
            }
            SpotterError::ApiError { .. } | SpotterError::SerializationError(_) => {
                ErrorSeverity::High
            }
            SpotterError::ConfigError { .. }
            | SpotterError::InvalidConfigValueError { .. }
            | SpotterError::MissingConfigError { .. } => ErrorSeverity::High,
            SpotterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpotterError::NetworkError(e) => {
                format!("Unable to reach the service: {}", e)
            }
            SpotterError::HttpStatusError {
                status, context, ..
            } => {
                format!(
                    "The {} service responded with status {} instead of 200",
                    context, status
                )
            }
            SpotterError::ApiError { message } => message.clone(),
            SpotterError::SerializationError(_) => {
                "Received a response that could not be parsed".to_string()
            }
            SpotterError::IoError(e) => format!("File operation failed: {}", e),
            SpotterError::ConfigError { message } => message.clone(),
            SpotterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SpotterError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and try again".to_string()
            }
            ErrorCategory::Provider => {
                "The provider may be unavailable or rejected the request, try again later"
                    .to_string()
            }
            ErrorCategory::Data => {
                "The provider response format may have changed, check the endpoint URL"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Review the endpoint flags or the TOML configuration file".to_string()
            }
            ErrorCategory::Io => "Check file paths and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpotterError>;
