//! # bakeoff
//!
//! A harness for comparing AI model providers against benchmark datasets.
//!
//! The core is a provider registry: each vendor integration implements the
//! [`traits::Provider`] contract (enumerate a static model catalog, execute
//! batched predictions for a task), the [`registry::ProviderFactory`] builds
//! providers from statically registered constructors, and the
//! [`registry::ModelRegistry`] aggregates every loaded provider's models for
//! capability-filtered lookup. A [`model::Model`] binds a model name to its
//! owning provider and exactly one task capability and exposes the uniform
//! `predict` entry point.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use bakeoff::prelude::*;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BenchError> {
//!     let mut config = RegistryConfig::new();
//!     config.insert(
//!         "openai".to_string(),
//!         ProviderConfig::new().with_api_key(std::env::var("OPENAI_API_KEY").unwrap()),
//!     );
//!
//!     let registry = ModelRegistry::new(config);
//!     let models = registry.find_models(TaskType::TextGeneration);
//!
//!     let outcome = models[0]
//!         .predict(serde_json::json!({
//!             "messages": [{"role": "user", "content": "What is the capital of France?"}]
//!         }))
//!         .await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Design notes
//!
//! - Providers that fail to load are logged and skipped; the registry
//!   degrades gracefully instead of failing fast.
//! - Batch-shaped `predict` executes one sequential vendor call per input;
//!   output order always matches input order.
//! - Per-provider cargo features (`openai`, `anthropic`) control which
//!   integrations are compiled in.

#![deny(unsafe_code)]

pub mod actions;
pub mod dataset;
pub mod error;
pub mod model;
pub mod providers;
pub mod registry;
pub mod report;
pub mod results;
pub mod traits;
pub mod types;

pub use error::BenchError;

/// Common imports for harness users
pub mod prelude {
    pub use crate::actions::run_predictions;
    pub use crate::dataset::{Dataset, InMemoryDataset, JsonFileDataset};
    pub use crate::error::BenchError;
    pub use crate::model::Model;
    pub use crate::registry::{
        KNOWN_PROVIDER_IDS, ModelRegistry, ProviderConfig, ProviderFactory, RegistryConfig,
    };
    pub use crate::report::{MetricKind, MetricRecord, MetricValue, validate_report_data};
    pub use crate::results::PredictionResults;
    pub use crate::traits::{CatalogEntry, Provider};
    pub use crate::types::{
        HttpConfig, ModelCapability, PredictionInput, PredictionOutcome, PredictionRequest,
        TaskType,
    };
}
