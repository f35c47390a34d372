//! Provider construction (static registration).
//!
//! Providers are registered at compile time: a write-once map from provider
//! id to a constructor function, with per-provider cargo features controlling
//! which constructors are compiled in. An unknown id fails with the full
//! supported set; a known id whose feature is disabled fails with a
//! missing-dependency error naming the feature to enable.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::BenchError;
use crate::traits::Provider;

/// Every provider id the harness knows about, independent of enabled features
pub const KNOWN_PROVIDER_IDS: &[&str] = &["anthropic", "openai"];

/// Per-provider configuration mapping.
///
/// All fields are optional: construction with an empty config must succeed so
/// availability can be probed without credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// API credential; absent means unauthenticated calls
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Override for the vendor endpoint base URL
    #[serde(default)]
    pub base_url: Option<String>,
    /// Vendor organization id (e.g. OpenAI-Organization)
    #[serde(default)]
    pub organization: Option<String>,
    /// Vendor project id (e.g. OpenAI-Project)
    #[serde(default)]
    pub project: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
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

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

type ProviderCtor = fn(ProviderConfig) -> Result<Arc<dyn Provider>, BenchError>;

#[cfg(feature = "openai")]
fn build_openai(config: ProviderConfig) -> Result<Arc<dyn Provider>, BenchError> {
    Ok(Arc::new(crate::providers::openai::OpenAiProvider::new(
        config,
    )?))
}

#[cfg(feature = "anthropic")]
fn build_anthropic(config: ProviderConfig) -> Result<Arc<dyn Provider>, BenchError> {
    Ok(Arc::new(crate::providers::anthropic::AnthropicProvider::new(
        config,
    )?))
}

/// Compiled-in constructors, initialized once for the process lifetime.
/// The set of available implementations cannot change at runtime.
fn builtin_constructors() -> &'static BTreeMap<&'static str, ProviderCtor> {
    static CONSTRUCTORS: OnceLock<BTreeMap<&'static str, ProviderCtor>> = OnceLock::new();
    CONSTRUCTORS.get_or_init(|| {
        let mut constructors: BTreeMap<&'static str, ProviderCtor> = BTreeMap::new();
        #[cfg(feature = "openai")]
        constructors.insert("openai", build_openai);
        #[cfg(feature = "anthropic")]
        constructors.insert("anthropic", build_anthropic);
        constructors
    })
}

/// Factory for creating provider instances by id
pub struct ProviderFactory;

impl ProviderFactory {
    /// Ids of providers with a compiled-in implementation
    pub fn supported_providers() -> BTreeSet<&'static str> {
        builtin_constructors().keys().copied().collect()
    }

    /// Create a provider instance from its id and configuration.
    ///
    /// Fails with [`BenchError::UnsupportedProvider`] for an unknown id and
    /// with [`BenchError::MissingDependency`] for a known id whose cargo
    /// feature is disabled.
    pub fn create_provider(
        name: &str,
        config: ProviderConfig,
    ) -> Result<Arc<dyn Provider>, BenchError> {
        if let Some(ctor) = builtin_constructors().get(name) {
            return ctor(config);
        }
        if KNOWN_PROVIDER_IDS.contains(&name) {
            return Err(BenchError::MissingDependency {
                provider: name.to_string(),
                message: format!("enable the `{name}` cargo feature"),
            });
        }
        Err(BenchError::UnsupportedProvider {
            name: name.to_string(),
            supported: Self::supported_providers()
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }

    /// Probe whether a provider can be created with an empty configuration.
    /// The trial instance is discarded; the registry is not touched.
    pub fn is_provider_available(name: &str) -> bool {
        Self::create_provider(name, ProviderConfig::default()).is_ok()
    }
}
