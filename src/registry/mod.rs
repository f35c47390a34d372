//! Provider and model registry.
//!
//! [`ModelRegistry`] aggregates every successfully constructed provider and
//! the models their catalogs expose, and supports capability-filtered lookup.
//! Construction never fails: a provider that cannot be built is logged and
//! skipped, contributing zero models, and an empty registry is still valid.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::model::Model;
use crate::traits::Provider;
use crate::types::{ModelCapability, TaskType};

mod factory;
pub use factory::{KNOWN_PROVIDER_IDS, ProviderConfig, ProviderFactory};

/// Mapping from provider id to its configuration
pub type RegistryConfig = HashMap<String, ProviderConfig>;

/// Aggregate, queryable index of loaded providers and their models.
///
/// Effectively read-only after construction; models are registered in
/// provider order (deterministic: factory ids are sorted) then catalog order.
#[derive(Default)]
pub struct ModelRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
    /// All models, in registration order (the `find_models` scan order)
    models: Vec<Model>,
    /// By-name lookup; last write wins on name collision
    models_by_name: HashMap<String, Model>,
}

impl ModelRegistry {
    /// Build a registry, attempting every supported provider.
    ///
    /// Providers absent from `config` are attempted with a default (empty)
    /// configuration. Failures degrade capability instead of propagating.
    pub fn new(config: RegistryConfig) -> Self {
        let mut registry = Self::default();
        for name in ProviderFactory::supported_providers() {
            let provider_config = config.get(name).cloned().unwrap_or_default();
            match ProviderFactory::create_provider(name, provider_config) {
                Ok(provider) => registry.register_provider(provider),
                Err(error) => {
                    tracing::warn!(provider = name, error = %error, "skipping provider");
                }
            }
        }
        registry
    }

    /// Registry over the built-in providers with no credentials configured
    pub fn with_defaults() -> Self {
        Self::new(RegistryConfig::new())
    }

    /// Register a provider and every model its catalog exposes.
    ///
    /// Each catalog entry contributes one model per supported task, so a
    /// model's capability task is always one its provider dispatches.
    pub fn register_provider(&mut self, provider: Arc<dyn Provider>) {
        let provider_id = provider.provider_id().into_owned();
        for entry in provider.model_catalog() {
            for task in entry.task_support {
                let capability = ModelCapability::new(task, provider.supported_formats(task));
                let model = Model::new(entry.model_name.clone(), provider.clone(), capability);
                self.models_by_name
                    .insert(entry.model_name.clone(), model.clone());
                self.models.push(model);
            }
        }
        tracing::debug!(provider = %provider_id, "registered provider");
        self.providers.insert(provider_id, provider);
    }

    /// Ids of the providers currently loaded
    pub fn available_providers(&self) -> BTreeSet<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    /// Look up a loaded provider by id
    pub fn get_provider(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(name)
    }

    /// Look up a model by name (last registered wins on collision)
    pub fn get_model(&self, model_name: &str) -> Option<&Model> {
        self.models_by_name.get(model_name)
    }

    /// Every loaded model whose capability matches `task`.
    ///
    /// Returns an empty list (never an error) when no model matches.
    pub fn find_models(&self, task: TaskType) -> Vec<Model> {
        self.models
            .iter()
            .filter(|model| model.supports_task(task))
            .cloned()
            .collect()
    }

    /// Union of every loaded model's supported task
    pub fn supported_tasks(&self) -> BTreeSet<TaskType> {
        self.models
            .iter()
            .map(|model| model.capability().supported_task)
            .collect()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("providers", &self.available_providers())
            .field("model_count", &self.models.len())
            .finish()
    }
}
