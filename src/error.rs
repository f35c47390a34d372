//! Error types for the harness.
//!
//! All fallible operations return [`BenchError`]. Registry construction is the
//! one place where errors are absorbed: a provider that fails to load is
//! logged and skipped so the registry degrades gracefully. Everything
//! downstream of a concrete `predict` call is surfaced to the caller.

use crate::types::TaskType;

/// Unified error type for the harness
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Invalid configuration rejected at construction time
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The requested provider id is not in the supported set
    #[error("Provider '{name}' is not supported. Supported providers: {supported:?}")]
    UnsupportedProvider {
        name: String,
        supported: Vec<String>,
    },

    /// The provider exists but its implementation is not compiled in
    #[error("Provider '{provider}' is unavailable: {message}")]
    MissingDependency { provider: String, message: String },

    /// A predict call asked for a task outside the model's dispatch set
    #[error("Task {task} not supported for model {model}")]
    TaskNotSupported { task: TaskType, model: String },

    /// A prediction input is missing a field the task requires
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure (connection, timeout, request build)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-2xx response from a vendor API, carrying status and body
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Provider-specific failure outside the HTTP status taxonomy
    #[error("Provider error ({provider}): {message}")]
    ProviderError { provider: String, message: String },

    /// Vendor response did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invariant violation inside the harness itself
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl BenchError {
    /// Create an API error from a status code and message
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// Create a provider-specific error
    pub fn provider_error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether the error originated in the transport layer or the vendor API
    pub fn is_provider_call_failure(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ApiError { .. } | Self::ProviderError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_helper() {
        let error = BenchError::api_error(404, "Not found");
        assert!(matches!(error, BenchError::ApiError { code: 404, .. }));
        assert!(error.is_provider_call_failure());
    }

    #[test]
    fn test_task_not_supported_message_names_task_and_model() {
        let error = BenchError::TaskNotSupported {
            task: TaskType::ImageGeneration,
            model: "gpt-3.5-turbo".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("image_generation"));
        assert!(message.contains("gpt-3.5-turbo"));
    }

    #[test]
    fn test_unsupported_provider_lists_supported_set() {
        let error = BenchError::UnsupportedProvider {
            name: "not-a-real-provider".to_string(),
            supported: vec!["openai".to_string()],
        };
        assert!(error.to_string().contains("openai"));
    }
}
