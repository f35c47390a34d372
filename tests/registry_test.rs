//! Registry construction and lookup behavior.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use bakeoff::prelude::*;

#[derive(Debug)]
struct MockProvider;

#[async_trait]
impl Provider for MockProvider {
    fn provider_id(&self) -> Cow<'static, str> {
        Cow::Borrowed("mock")
    }

    fn model_catalog(&self) -> Vec<CatalogEntry> {
        vec![CatalogEntry::new(
            "mock-model",
            vec![TaskType::TextGeneration],
        )]
    }

    fn supported_formats(&self, task: TaskType) -> Vec<String> {
        match task {
            TaskType::TextGeneration => vec!["txt".to_string()],
            _ => Vec::new(),
        }
    }

    async fn predict(
        &self,
        _model_name: &str,
        inputs: &[serde_json::Value],
        _task: TaskType,
    ) -> Result<Vec<String>, BenchError> {
        Ok(vec!["mock response".to_string(); inputs.len()])
    }
}

/// The scenario from the design doc: one provider, one text-generation model
#[test]
fn test_single_mock_provider_scenario() {
    let mut registry = ModelRegistry::default();
    registry.register_provider(Arc::new(MockProvider));

    let models = registry.find_models(TaskType::TextGeneration);
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model_name(), "mock-model");
    assert_eq!(models[0].provider_id(), "mock");

    assert!(registry.find_models(TaskType::ImageGeneration).is_empty());
    assert_eq!(
        registry.supported_tasks(),
        BTreeSet::from([TaskType::TextGeneration])
    );
    assert_eq!(registry.available_providers(), BTreeSet::from(["mock"]));
}

#[test]
fn test_find_models_soundness_and_completeness() {
    let mut registry = ModelRegistry::default();
    registry.register_provider(Arc::new(MockProvider));

    for task in [
        TaskType::TextGeneration,
        TaskType::Chat,
        TaskType::VisualQa,
        TaskType::AudioClassification,
    ] {
        let found = registry.find_models(task);
        // Soundness: everything returned supports the task
        assert!(found.iter().all(|model| model.supports_task(task)));
        // Completeness: nothing supporting the task is left out
        let supporting = registry
            .supported_tasks()
            .contains(&task)
            .then_some(1)
            .unwrap_or(0);
        assert_eq!(found.len(), supporting);
    }
}

/// Every provider failing to load still yields a valid, empty registry
#[cfg(all(feature = "openai", feature = "anthropic"))]
#[test]
fn test_all_providers_failing_yields_empty_registry() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bakeoff=debug")
        .try_init();

    let mut config = RegistryConfig::new();
    for name in ["openai", "anthropic"] {
        config.insert(
            name.to_string(),
            ProviderConfig::new().with_base_url("not a url"),
        );
    }

    let registry = ModelRegistry::new(config);
    assert!(registry.available_providers().is_empty());
    assert!(registry.find_models(TaskType::TextGeneration).is_empty());
    assert!(registry.supported_tasks().is_empty());
}

#[cfg(feature = "openai")]
#[test]
fn test_default_registry_loads_builtin_providers() {
    let registry = ModelRegistry::with_defaults();
    assert!(registry.available_providers().contains("openai"));

    // The static OpenAI catalog: gpt-4 appears for both of its tasks
    let text_models: Vec<_> = registry
        .find_models(TaskType::TextGeneration)
        .into_iter()
        .map(|model| model.model_name().to_string())
        .collect();
    assert!(text_models.contains(&"gpt-4".to_string()));
    assert!(text_models.contains(&"gpt-3.5-turbo".to_string()));

    let visual_models: Vec<_> = registry
        .find_models(TaskType::VisualQa)
        .into_iter()
        .map(|model| model.model_name().to_string())
        .collect();
    assert!(visual_models.contains(&"gpt-4".to_string()));
    assert!(visual_models.contains(&"gpt-4-vision-preview".to_string()));
}
