//! OpenAI provider implementation.
//!
//! Request/response shapes follow the chat completions API:
//! https://platform.openai.com/docs/api-reference/chat/create

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::{Value, json};

use super::config::OpenAiConfig;
use crate::error::BenchError;
use crate::registry::ProviderConfig;
use crate::traits::{CatalogEntry, Provider};
use crate::types::{PredictionInput, TaskType};

const PROVIDER_ID: &str = "openai";

/// OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    config: OpenAiConfig,
    http_client: Client,
}

impl OpenAiProvider {
    /// Create a provider from a generic factory configuration
    pub fn new(config: ProviderConfig) -> Result<Self, BenchError> {
        Self::with_config(OpenAiConfig::from(config))
    }

    /// Create a provider from an OpenAI-specific configuration
    pub fn with_config(config: OpenAiConfig) -> Result<Self, BenchError> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.http_config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref user_agent) = config.http_config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http_client = builder.build().map_err(|e| {
            BenchError::ConfigurationError(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a provider with a caller-supplied HTTP client
    pub fn with_http_client(config: OpenAiConfig, http_client: Client) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, BenchError> {
        use reqwest::header;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref api_key) = self.config.api_key {
            let auth_value = format!("Bearer {}", api_key.expose_secret());
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&auth_value).map_err(|e| {
                    BenchError::provider_error(PROVIDER_ID, format!("invalid API key: {e}"))
                })?,
            );
        }
        if let Some(ref organization) = self.config.organization {
            headers.insert(
                "OpenAI-Organization",
                reqwest::header::HeaderValue::from_str(organization).map_err(|e| {
                    BenchError::provider_error(PROVIDER_ID, format!("invalid organization: {e}"))
                })?,
            );
        }
        if let Some(ref project) = self.config.project {
            headers.insert(
                "OpenAI-Project",
                reqwest::header::HeaderValue::from_str(project).map_err(|e| {
                    BenchError::provider_error(PROVIDER_ID, format!("invalid project: {e}"))
                })?,
            );
        }

        Ok(headers)
    }

    /// Issue one chat completion call and extract the assistant text
    async fn complete_chat(&self, model_name: &str, messages: Value) -> Result<String, BenchError> {
        let payload = json!({
            "model": model_name,
            "messages": messages,
        });

        let response = self
            .http_client
            .post(self.chat_url())
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BenchError::HttpError(format!("chat completion request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BenchError::HttpError(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(BenchError::api_error(
                status.as_u16(),
                format!("chat completion failed: {body}"),
            ));
        }

        let parsed: Value = serde_json::from_str(&body)
            .map_err(|e| BenchError::ParseError(format!("invalid JSON response: {e}")))?;
        parsed
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                BenchError::ParseError("response missing choices[0].message.content".to_string())
            })
    }

    /// Text generation: forward each input's `messages` field verbatim
    async fn predict_text(
        &self,
        model_name: &str,
        inputs: &[PredictionInput],
    ) -> Result<Vec<String>, BenchError> {
        let mut responses = Vec::with_capacity(inputs.len());
        for input in inputs {
            let messages = input.get("messages").cloned().unwrap_or_else(|| json!([]));
            responses.push(self.complete_chat(model_name, messages).await?);
        }
        Ok(responses)
    }

    /// Visual QA: build a single user message with text and image parts
    async fn predict_visual(
        &self,
        model_name: &str,
        inputs: &[PredictionInput],
    ) -> Result<Vec<String>, BenchError> {
        let mut responses = Vec::with_capacity(inputs.len());
        for input in inputs {
            let (text, image) = extract_visual_input(input)?;
            let messages = json!([{
                "role": "user",
                "content": [
                    {"type": "text", "text": text},
                    {"type": "image_url", "image_url": image},
                ],
            }]);
            responses.push(self.complete_chat(model_name, messages).await?);
        }
        Ok(responses)
    }
}

/// Pull the text prompt and image reference out of a visual QA input.
///
/// Accepts either a pre-shaped `messages` array whose first message carries
/// text/image_url content parts, or top-level `text` and `image` fields.
/// Validated before any network call is attempted for the item.
fn extract_visual_input(input: &PredictionInput) -> Result<(String, Value), BenchError> {
    let (text, image) = if let Some(content) = input.pointer("/messages/0/content") {
        let parts = content.as_array().cloned().unwrap_or_default();
        let text = parts
            .iter()
            .find(|part| part["type"] == "text")
            .and_then(|part| part["text"].as_str())
            .unwrap_or_default()
            .to_string();
        let image = parts
            .iter()
            .find(|part| part["type"] == "image_url")
            .map(|part| part["image_url"].clone());
        (text, image)
    } else {
        let text = input
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let image = input.get("image").cloned();
        (text, image)
    };

    match image {
        Some(image) if !image.is_null() => Ok((text, image)),
        _ => Err(BenchError::InvalidInput(
            "image input required for visual question answering".to_string(),
        )),
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn provider_id(&self) -> Cow<'static, str> {
        Cow::Borrowed(PROVIDER_ID)
    }

    fn model_catalog(&self) -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("gpt-4", vec![TaskType::TextGeneration, TaskType::VisualQa]),
            CatalogEntry::new("gpt-4-vision-preview", vec![TaskType::VisualQa]),
            CatalogEntry::new("gpt-3.5-turbo", vec![TaskType::TextGeneration]),
        ]
    }

    fn supported_formats(&self, task: TaskType) -> Vec<String> {
        let formats: &[&str] = match task {
            TaskType::TextGeneration => &["txt", "md", "json"],
            TaskType::VisualQa => &["png", "jpg", "jpeg"],
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
            TaskType::TextGeneration => self.predict_text(model_name, inputs).await,
            TaskType::VisualQa => self.predict_visual(model_name, inputs).await,
            other => Err(BenchError::TaskNotSupported {
                task: other,
                model: model_name.to_string(),
            }),
        }
    }
}
