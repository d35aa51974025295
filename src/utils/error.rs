use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failures and non-2xx statuses, exactly as reqwest reports them.
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::ApiError(e) if e.is_decode() => ErrorCategory::Data,
            ClientError::ApiError(_) => ErrorCategory::Network,
            ClientError::SerializationError(_) => ErrorCategory::Data,
            ClientError::IoError(_) => ErrorCategory::System,
            ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the backend answered; it just refused the request
            ClientError::ApiError(e) if e.status().is_some() => ErrorSeverity::High,
            ClientError::ApiError(_) => ErrorSeverity::Medium,
            ClientError::SerializationError(_) => ErrorSeverity::High,
            ClientError::IoError(_) => ErrorSeverity::Critical,
            ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// HTTP status returned by the backend, when the failure was a non-2xx reply.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::ApiError(e) => e.status(),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError(e) => match e.status() {
                Some(status) => format!("The game backend rejected the request ({})", status),
                None if e.is_timeout() => "The game backend did not answer in time".to_string(),
                None if e.is_connect() => "Could not connect to the game backend".to_string(),
                None => format!("Request to the game backend failed: {}", e),
            },
            ClientError::SerializationError(e) => format!("Invalid JSON payload: {}", e),
            ClientError::IoError(e) => format!("File access failed: {}", e),
            ClientError::ConfigError { message } => format!("Configuration problem: {}", message),
            ClientError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::ApiError(e) if e.is_connect() => {
                "Check that the backend is running and that FLOW_DEFENCE_API_URL points at it"
            }
            ClientError::ApiError(e) if e.is_timeout() => {
                "Retry later or raise the request timeout"
            }
            ClientError::ApiError(_) => "Inspect the backend logs for the failing request",
            ClientError::SerializationError(_) => {
                "Make sure the game file is the JSON printed by `new-game`"
            }
            ClientError::IoError(_) => "Check the file path and its permissions",
            ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_configuration_category() {
        let err = ClientError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("api.base_url"));
        assert!(err.status().is_none());
    }

    #[test]
    fn test_serialization_error_category() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
