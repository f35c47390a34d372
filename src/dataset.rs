//! Dataset collaborator interface.
//!
//! The prediction core consumes datasets through the narrow [`Dataset`]
//! trait and forwards entries verbatim as prediction inputs; it has no
//! knowledge of dataset internals. Benchmark-specific loaders (MMLU etc.)
//! live behind this seam and are out of scope here.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::BenchError;
use crate::types::PredictionInput;

/// Source of evaluation inputs
pub trait Dataset: Send + Sync {
    /// Human-readable dataset name
    fn name(&self) -> &str;

    /// The dataset payload, one opaque entry per prediction input
    fn get_data(&self) -> Result<Vec<PredictionInput>, BenchError>;
}

/// Dataset held directly in memory, mainly for tests and small benchmarks
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    name: String,
    entries: Vec<Value>,
}

impl InMemoryDataset {
    /// Create a dataset from pre-shaped entries. An empty name is rejected.
    pub fn new(name: impl Into<String>, entries: Vec<Value>) -> Result<Self, BenchError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BenchError::ConfigurationError(
                "dataset name cannot be empty".to_string(),
            ));
        }
        Ok(Self { name, entries })
    }
}

impl Dataset for InMemoryDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_data(&self) -> Result<Vec<PredictionInput>, BenchError> {
        Ok(self.entries.clone())
    }
}

/// Dataset backed by a JSON file containing a list of entries
#[derive(Debug, Clone)]
pub struct JsonFileDataset {
    name: String,
    path: PathBuf,
}

impl JsonFileDataset {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, BenchError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BenchError::ConfigurationError(
                "dataset name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            path: path.into(),
        })
    }
}

impl Dataset for JsonFileDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_data(&self) -> Result<Vec<PredictionInput>, BenchError> {
        let file = File::open(&self.path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        match value {
            Value::Array(entries) => Ok(entries),
            _ => Err(BenchError::InvalidInput(format!(
                "dataset file {} must contain a JSON list",
                self.path.display()
            ))),
        }
    }
}
