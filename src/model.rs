//! The model value object.
//!
//! A [`Model`] binds a model name, a shared reference to its owning provider,
//! and exactly one capability. It is immutable after construction and exposes
//! the uniform `predict` entry point that accepts either a single input or an
//! ordered batch.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::BenchError;
use crate::traits::Provider;
use crate::types::{ModelCapability, PredictionOutcome, PredictionRequest, TaskType};

/// A single vendor model with one bound capability
#[derive(Clone)]
pub struct Model {
    model_name: String,
    provider: Arc<dyn Provider>,
    capability: ModelCapability,
}

impl Model {
    /// Bind a model name to its owning provider and capability.
    ///
    /// The capability's task must be one the provider actually dispatches;
    /// the registry guarantees this by building models from the provider's
    /// own catalog.
    pub fn new(
        model_name: impl Into<String>,
        provider: Arc<dyn Provider>,
        capability: ModelCapability,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            provider,
            capability,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Id of the owning provider
    pub fn provider_id(&self) -> Cow<'static, str> {
        self.provider.provider_id()
    }

    pub fn capability(&self) -> &ModelCapability {
        &self.capability
    }

    /// Exact equality against the single bound capability task
    pub fn supports_task(&self, task: TaskType) -> bool {
        self.capability.supported_task == task
    }

    /// Run predictions on one input or an ordered batch.
    ///
    /// A single input yields a single output; a batch yields a list whose
    /// positions correspond to the inputs. The provider is responsible for
    /// preserving that ordering.
    pub async fn predict(
        &self,
        request: impl Into<PredictionRequest>,
    ) -> Result<PredictionOutcome, BenchError> {
        let task = self.capability.supported_task;
        match request.into() {
            PredictionRequest::Single(input) => {
                let outputs = self
                    .provider
                    .predict(&self.model_name, std::slice::from_ref(&input), task)
                    .await?;
                let mut outputs = outputs.into_iter();
                let output = outputs.next().ok_or_else(|| {
                    BenchError::InternalError(format!(
                        "provider '{}' returned no output for a single input",
                        self.provider.provider_id()
                    ))
                })?;
                if outputs.next().is_some() {
                    return Err(BenchError::InternalError(format!(
                        "provider '{}' returned multiple outputs for a single input",
                        self.provider.provider_id()
                    )));
                }
                Ok(PredictionOutcome::Single(output))
            }
            PredictionRequest::Batch(inputs) => {
                let expected = inputs.len();
                let outputs = self.provider.predict(&self.model_name, &inputs, task).await?;
                if outputs.len() != expected {
                    return Err(BenchError::InternalError(format!(
                        "provider '{}' returned {} outputs for {} inputs",
                        self.provider.provider_id(),
                        outputs.len(),
                        expected
                    )));
                }
                Ok(PredictionOutcome::Batch(outputs))
            }
        }
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("model_name", &self.model_name)
            .field("provider", &self.provider.provider_id())
            .field("capability", &self.capability)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CatalogEntry;
    use async_trait::async_trait;
    use serde_json::json;

    /// Echoes each input's "prompt" field back, uppercased
    #[derive(Debug)]
    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn provider_id(&self) -> Cow<'static, str> {
            Cow::Borrowed("echo")
        }

        fn model_catalog(&self) -> Vec<CatalogEntry> {
            vec![CatalogEntry::new(
                "echo-model",
                vec![TaskType::TextGeneration],
            )]
        }

        async fn predict(
            &self,
            _model_name: &str,
            inputs: &[serde_json::Value],
            _task: TaskType,
        ) -> Result<Vec<String>, BenchError> {
            Ok(inputs
                .iter()
                .map(|input| {
                    input["prompt"]
                        .as_str()
                        .unwrap_or_default()
                        .to_uppercase()
                })
                .collect())
        }
    }

    fn echo_model() -> Model {
        Model::new(
            "echo-model",
            Arc::new(EchoProvider),
            ModelCapability::new(TaskType::TextGeneration, ["txt"]),
        )
    }

    #[tokio::test]
    async fn test_single_input_returns_single_output() {
        let model = echo_model();
        let outcome = model.predict(json!({"prompt": "hello"})).await.unwrap();
        assert_eq!(outcome, PredictionOutcome::Single("HELLO".to_string()));
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let model = echo_model();
        let outcome = model
            .predict(vec![json!({"prompt": "one"}), json!({"prompt": "two"})])
            .await
            .unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Batch(vec!["ONE".to_string(), "TWO".to_string()])
        );
    }

    #[test]
    fn test_supports_task_is_exact_equality() {
        let model = echo_model();
        assert!(model.supports_task(TaskType::TextGeneration));
        assert!(!model.supports_task(TaskType::Chat));
        assert!(!model.supports_task(TaskType::ImageGeneration));
    }

    #[test]
    fn test_debug_shows_provider_id() {
        let rendered = format!("{:?}", echo_model());
        assert!(rendered.contains("echo"));
        assert!(rendered.contains("echo-model"));
    }
}
