//! OpenAI provider configuration.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::BenchError;
use crate::registry::ProviderConfig;
use crate::types::HttpConfig;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI client configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key; absent means requests go out unauthenticated
    pub api_key: Option<SecretString>,
    /// API endpoint base URL
    pub base_url: String,
    /// Optional organization id (OpenAI-Organization header)
    pub organization: Option<String>,
    /// Optional project id (OpenAI-Project header)
    pub project: Option<String>,
    /// HTTP client configuration
    pub http_config: HttpConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
            http_config: HttpConfig::default(),
        }
    }
}

impl OpenAiConfig {
    /// Create a configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration. An unparseable or non-http base URL is
    /// rejected immediately rather than surfacing later as a transport error.
    pub fn validate(&self) -> Result<(), BenchError> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            BenchError::ConfigurationError(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BenchError::ConfigurationError(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl From<ProviderConfig> for OpenAiConfig {
    fn from(config: ProviderConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_key: config.api_key,
            base_url: config.base_url.unwrap_or(defaults.base_url),
            organization: config.organization,
            project: config.project,
            http_config: HttpConfig {
                timeout: config.timeout_secs.map(Duration::from_secs),
                user_agent: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = OpenAiConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = OpenAiConfig::default().with_base_url("not a url");
        assert!(config.validate().is_err());
        let config = OpenAiConfig::default().with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_provider_config_carries_timeout() {
        let provider_config = ProviderConfig::new()
            .with_api_key("sk-test")
            .with_timeout_secs(30);
        let config = OpenAiConfig::from(provider_config);
        assert_eq!(config.http_config.timeout, Some(Duration::from_secs(30)));
        assert!(config.api_key.is_some());
    }
}
