//! Report collaborator boundary.
//!
//! Rendering (charts, PDF) is an external concern behind [`ReportRenderer`];
//! this module owns the validated record shape handed across that boundary.
//! A record pairs a metric name with per-model values that are either a
//! single number (numerical) or a label→count map (categorical), and the
//! validation is strict: a kind/value mismatch is an error, never coerced.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Metric record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Categorical,
    Numerical,
}

/// Per-model metric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Numerical(f64),
    Categorical(BTreeMap<String, f64>),
}

/// One validated report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Metric name (e.g. "accuracy")
    pub name: String,
    /// Whether values are numbers or label→count maps
    #[serde(rename = "type")]
    pub kind: MetricKind,
    /// Mapping of model name to metric value
    pub models: BTreeMap<String, MetricValue>,
}

impl MetricRecord {
    pub fn numerical(name: impl Into<String>, models: BTreeMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            kind: MetricKind::Numerical,
            models: models
                .into_iter()
                .map(|(model, value)| (model, MetricValue::Numerical(value)))
                .collect(),
        }
    }

    pub fn categorical(
        name: impl Into<String>,
        models: BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: MetricKind::Categorical,
            models: models
                .into_iter()
                .map(|(model, labels)| (model, MetricValue::Categorical(labels)))
                .collect(),
        }
    }
}

/// Validate report records before handing them to a renderer.
///
/// Every record must have a non-empty name and values matching its declared
/// kind; violations fail with [`BenchError::InvalidInput`] naming the record.
pub fn validate_report_data(records: &[MetricRecord]) -> Result<(), BenchError> {
    for record in records {
        if record.name.is_empty() {
            return Err(BenchError::InvalidInput(
                "metric record name cannot be empty".to_string(),
            ));
        }
        for (model, value) in &record.models {
            match (record.kind, value) {
                (MetricKind::Numerical, MetricValue::Numerical(_)) => {}
                (MetricKind::Categorical, MetricValue::Categorical(_)) => {}
                (MetricKind::Numerical, MetricValue::Categorical(_)) => {
                    return Err(BenchError::InvalidInput(format!(
                        "metric '{}': numerical values required, got a label map for model '{model}'",
                        record.name
                    )));
                }
                (MetricKind::Categorical, MetricValue::Numerical(_)) => {
                    return Err(BenchError::InvalidInput(format!(
                        "metric '{}': categorical values required, got a number for model '{model}'",
                        record.name
                    )));
                }
            }
        }
    }
    Ok(())
}

/// External report-generation collaborator
pub trait ReportRenderer: Send + Sync {
    /// Render validated records into a document at `output`
    fn render(&self, records: &[MetricRecord], output: &Path) -> Result<(), BenchError>;
}
