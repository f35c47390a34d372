//! Anthropic provider.
//!
//! Translates the uniform predict contract into the Messages API:
//! https://docs.anthropic.com/en/api/messages
//! Authentication uses the vendor's custom headers (`x-api-key` plus
//! `anthropic-version`) rather than a bearer token.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use crate::error::BenchError;
use crate::registry::ProviderConfig;
use crate::traits::{CatalogEntry, Provider};
use crate::types::{HttpConfig, PredictionInput, TaskType};

const PROVIDER_ID: &str = "anthropic";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The Messages API requires max_tokens on every request
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic provider
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    api_key: Option<SecretString>,
    base_url: String,
    http_client: Client,
}

impl AnthropicProvider {
    /// Create a provider from a generic factory configuration
    pub fn new(config: ProviderConfig) -> Result<Self, BenchError> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let http_config = HttpConfig {
            timeout: config.timeout_secs.map(Duration::from_secs),
            user_agent: None,
        };
        Self::with_parts(config.api_key, base_url, http_config)
    }

    fn with_parts(
        api_key: Option<SecretString>,
        base_url: String,
        http_config: HttpConfig,
    ) -> Result<Self, BenchError> {
        let url = reqwest::Url::parse(&base_url).map_err(|e| {
            BenchError::ConfigurationError(format!("invalid base URL '{base_url}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BenchError::ConfigurationError(format!(
                "base URL '{base_url}' must use http or https"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = http_config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            BenchError::ConfigurationError(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key,
            base_url,
            http_client,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, BenchError> {
        use reqwest::header;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "anthropic-version",
            header::HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        if let Some(ref api_key) = self.api_key {
            headers.insert(
                "x-api-key",
                header::HeaderValue::from_str(api_key.expose_secret()).map_err(|e| {
                    BenchError::provider_error(PROVIDER_ID, format!("invalid API key: {e}"))
                })?,
            );
        }
        Ok(headers)
    }

    /// Issue one Messages API call and extract the first text block
    async fn create_message(&self, model_name: &str, messages: Value) -> Result<String, BenchError> {
        let payload = json!({
            "model": model_name,
            "max_tokens": DEFAULT_MAX_TOKENS,
            "messages": messages,
        });

        let response = self
            .http_client
            .post(self.messages_url())
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BenchError::HttpError(format!("messages request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BenchError::HttpError(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(BenchError::api_error(
                status.as_u16(),
                format!("messages request failed: {body}"),
            ));
        }

        let parsed: Value = serde_json::from_str(&body)
            .map_err(|e| BenchError::ParseError(format!("invalid JSON response: {e}")))?;
        parsed
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| BenchError::ParseError("response missing content[0].text".to_string()))
    }

    async fn predict_text(
        &self,
        model_name: &str,
        inputs: &[PredictionInput],
    ) -> Result<Vec<String>, BenchError> {
        let mut responses = Vec::with_capacity(inputs.len());
        for input in inputs {
            let messages = input.get("messages").cloned().unwrap_or_else(|| json!([]));
            responses.push(self.create_message(model_name, messages).await?);
        }
        Ok(responses)
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn provider_id(&self) -> Cow<'static, str> {
        Cow::Borrowed(PROVIDER_ID)
    }

    fn model_catalog(&self) -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(
                "claude-3-opus",
                vec![TaskType::TextGeneration, TaskType::Chat],
            ),
            CatalogEntry::new(
                "claude-3-sonnet",
                vec![TaskType::TextGeneration, TaskType::Chat],
            ),
        ]
    }

    fn supported_formats(&self, task: TaskType) -> Vec<String> {
        let formats: &[&str] = match task {
            TaskType::TextGeneration | TaskType::Chat => &["txt", "md", "json"],
            _ => &[],
        };
        formats.iter().map(ToString::to_string).collect()
    }

    async fn predict(
        &self,
        model_name: &str,
        inputs: &[PredictionInput],
        task: TaskType,
    ) -> Result<Vec<String>, BenchError> {
        match task {
            TaskType::TextGeneration | TaskType::Chat => {
                self.predict_text(model_name, inputs).await
            }
            other => Err(BenchError::TaskNotSupported {
                task: other,
                model: model_name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new(ProviderConfig::new().with_api_key("test-key")).unwrap()
    }

    #[test]
    fn test_catalog_models_are_chat_capable() {
        let catalog = provider().model_catalog();
        assert_eq!(catalog.len(), 2);
        assert!(
            catalog
                .iter()
                .all(|entry| entry.task_support.contains(&TaskType::Chat))
        );
    }

    #[test]
    fn test_messages_url() {
        let provider = provider();
        assert_eq!(provider.messages_url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_headers_use_vendor_auth() {
        let headers = provider().build_headers().unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "test-key");
        assert_eq!(headers.get("anthropic-version").unwrap(), ANTHROPIC_VERSION);
        assert!(!headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_predict_unsupported_task() {
        let error = provider()
            .predict("claude-3-opus", &[], TaskType::ImageGeneration)
            .await
            .unwrap_err();
        assert!(matches!(error, BenchError::TaskNotSupported { .. }));
    }
}
