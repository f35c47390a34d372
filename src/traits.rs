//! The provider contract.
//!
//! Every vendor integration implements [`Provider`]: enumerate a static model
//! catalog and execute batched predictions for a task. Providers are held as
//! `Arc<dyn Provider>` so the registry and all of a provider's models share
//! one instance; the provider outlives its models.

use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::BenchError;
use crate::types::{PredictionInput, TaskType};

/// One entry of a provider's static model catalog.
///
/// `task_support` lists every task the vendor exposes for the model; the
/// registry expands each (model, task) pair into its own [`crate::model::Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub model_name: String,
    pub task_support: Vec<TaskType>,
}

impl CatalogEntry {
    pub fn new(model_name: impl Into<String>, task_support: Vec<TaskType>) -> Self {
        Self {
            model_name: model_name.into(),
            task_support,
        }
    }
}

/// Contract every model vendor integration must satisfy
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Canonical provider id (e.g. "openai")
    fn provider_id(&self) -> Cow<'static, str>;

    /// Static vendor catalog of (model, supported tasks) pairs.
    ///
    /// This is hard-coded metadata, not queried from the vendor's live API.
    fn model_catalog(&self) -> Vec<CatalogEntry>;

    /// Format identifiers this provider accepts for a task
    fn supported_formats(&self, _task: TaskType) -> Vec<String> {
        Vec::new()
    }

    /// Execute predictions for a batch of inputs.
    ///
    /// Returns one output per input, in input order. Inputs are processed
    /// strictly sequentially, one vendor call each; there is no transport
    /// batching behind the batch-shaped interface. A task outside the
    /// provider's dispatch set fails with [`BenchError::TaskNotSupported`];
    /// a malformed input fails with [`BenchError::InvalidInput`] before any
    /// network call for that item.
    async fn predict(
        &self,
        model_name: &str,
        inputs: &[PredictionInput],
        task: TaskType,
    ) -> Result<Vec<String>, BenchError>;
}
