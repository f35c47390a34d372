//! End-to-end: dataset -> registry model -> predictions -> saved results.

#![cfg(feature = "openai")]

use bakeoff::prelude::*;
use bakeoff::providers::openai::{OpenAiConfig, OpenAiProvider};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_response(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_run_predictions_and_persist_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": "What is the capital of France?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_response("Paris")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": "What is 2 + 2?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_response("4")))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::with_config(
        OpenAiConfig::new("test-api-key").with_base_url(mock_server.uri()),
    )
    .unwrap();
    let mut registry = ModelRegistry::default();
    registry.register_provider(Arc::new(provider));

    let dataset = InMemoryDataset::new(
        "capitals-and-sums",
        vec![
            json!({"messages": [{"role": "user", "content": "What is the capital of France?"}]}),
            json!({"messages": [{"role": "user", "content": "What is 2 + 2?"}]}),
        ],
    )
    .unwrap();

    let models = registry.find_models(TaskType::TextGeneration);
    let results = run_predictions(&dataset, &models).await.unwrap();

    let gpt35 = &results["gpt-3.5-turbo"];
    assert_eq!(gpt35.len(), 2);
    assert_eq!(gpt35.predictions()[0]["prediction"], "Paris");
    assert_eq!(gpt35.predictions()[1]["prediction"], "4");

    // Persist and reload: round-trip is exact
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gpt-3.5-turbo.json");
    gpt35.save_to_file(&path).unwrap();
    let reloaded = PredictionResults::load_from_file(&path).unwrap();
    assert_eq!(&reloaded, gpt35);
}
