use thiserror::Error;

#[derive(Error, Debug)]
pub enum RseError {
    #[error("Search provider is rate limiting requests")]
    RateLimited,

    #[error("Rate limit still exceeded after {attempts} attempts for query '{query}'")]
    RateLimitExhausted { query: String, attempts: u32 },

    #[error("Search request failed with status {status}: {message}")]
    SearchFailed { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse search results: {message}")]
    ParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Search,
    Network,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RseError::RateLimited
            | RseError::RateLimitExhausted { .. }
            | RseError::SearchFailed { .. }
            | RseError::ParseError { .. } => ErrorCategory::Search,
            RseError::Http(_) => ErrorCategory::Network,
            RseError::Io(_) | RseError::Serialization(_) => ErrorCategory::Storage,
            RseError::ConfigValidationError { .. }
            | RseError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RseError::RateLimited => ErrorSeverity::Low,
            RseError::RateLimitExhausted { .. } | RseError::Http(_) => ErrorSeverity::Medium,
            RseError::SearchFailed { .. } | RseError::ParseError { .. } => ErrorSeverity::High,
            RseError::ConfigValidationError { .. }
            | RseError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RseError::Io(_) | RseError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the search should be attempted again after a cooldown.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RseError::RateLimited)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RseError::RateLimited | RseError::RateLimitExhausted { .. } => {
                "The search engine is rate limiting us, no report was written".to_string()
            }
            RseError::SearchFailed { status, .. } => {
                format!("The search engine answered with HTTP {}", status)
            }
            RseError::Http(_) => "Could not reach the search engine".to_string(),
            RseError::Io(e) => format!("Could not read or write the report files: {}", e),
            RseError::Serialization(_) => "The university dataset is not valid JSON".to_string(),
            RseError::ConfigValidationError { field, .. }
            | RseError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem with '{}': {}", field, self)
            }
            RseError::ParseError { .. } => {
                "The search engine returned a page we could not understand".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Search => {
                "Wait a few minutes and run again, or use --skip-failed to continue past failures"
            }
            ErrorCategory::Network => "Check your network connection and the search endpoint",
            ErrorCategory::Storage => "Check that the output directory is writable",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, RseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rate_limit_is_retryable() {
        assert!(RseError::RateLimited.is_retryable());
        assert!(!RseError::SearchFailed {
            status: 500,
            message: "boom".to_string()
        }
        .is_retryable());
        assert!(!RseError::RateLimitExhausted {
            query: "q".to_string(),
            attempts: 3
        }
        .is_retryable());
    }

    #[test]
    fn test_categories() {
        let err = RseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected a table".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = RseError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
