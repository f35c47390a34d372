//! Mock API tests for the Anthropic provider.
//!
//! Response shapes follow the Messages API:
//! https://docs.anthropic.com/en/api/messages

#![cfg(feature = "anthropic")]

use std::sync::Arc;

use bakeoff::prelude::*;
use bakeoff::providers::anthropic::AnthropicProvider;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn messages_response(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_013Zva2CMHLNnXjNJJKqJ2EF",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-opus",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 25}
    })
}

async fn model_for(server: &MockServer, task: TaskType) -> Model {
    let config = ProviderConfig::new()
        .with_api_key("test-api-key")
        .with_base_url(server.uri());
    let provider = AnthropicProvider::new(config).unwrap();
    Model::new(
        "claude-3-opus",
        Arc::new(provider),
        ModelCapability::new(task, ["txt", "md", "json"]),
    )
}

#[tokio::test]
async fn test_text_generation_uses_vendor_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-api-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-opus",
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_response("Hi there!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = model_for(&mock_server, TaskType::TextGeneration).await;
    let outcome = model
        .predict(json!({"messages": [{"role": "user", "content": "Hello"}]}))
        .await
        .unwrap();

    assert_eq!(outcome, PredictionOutcome::Single("Hi there!".to_string()));
}

#[tokio::test]
async fn test_chat_task_routes_to_messages_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_response("chatting")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = model_for(&mock_server, TaskType::Chat).await;
    let outcome = model
        .predict(json!({"messages": [{"role": "user", "content": "hi"}]}))
        .await
        .unwrap();
    assert_eq!(outcome.as_single(), Some("chatting"));
}

#[tokio::test]
async fn test_rate_limit_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "type": "error",
            "error": {"type": "rate_limit_error", "message": "Rate limited"}
        })))
        .mount(&mock_server)
        .await;

    let model = model_for(&mock_server, TaskType::TextGeneration).await;
    let error = model.predict(json!({"messages": []})).await.unwrap_err();
    assert!(matches!(error, BenchError::ApiError { code: 429, .. }));
}
