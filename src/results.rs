//! Prediction result persistence.
//!
//! [`PredictionResults`] wraps the raw list of prediction records and
//! round-trips it through a JSON file. The only validation applied on load is
//! that the top-level value is a list; record internals are opaque.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BenchError;

/// Raw prediction outputs for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResults {
    predictions: Vec<Value>,
}

impl PredictionResults {
    pub fn new(predictions: Vec<Value>) -> Self {
        Self { predictions }
    }

    pub fn predictions(&self) -> &[Value] {
        &self.predictions
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Serialize the raw prediction list to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), BenchError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.predictions)?;
        // Flush explicitly: a Drop-time flush would discard write errors
        writer.flush()?;
        Ok(())
    }

    /// Load a prediction list from a JSON file.
    ///
    /// Fails with [`BenchError::InvalidInput`] if the file holds anything
    /// other than a JSON list.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let file = File::open(path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        match value {
            Value::Array(predictions) => Ok(Self { predictions }),
            _ => Err(BenchError::InvalidInput(
                "result file must contain a JSON list".to_string(),
            )),
        }
    }
}

impl fmt::Display for PredictionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predictions: {}",
            serde_json::to_string(&self.predictions).map_err(|_| fmt::Error)?
        )
    }
}

impl From<Vec<Value>> for PredictionResults {
    fn from(predictions: Vec<Value>) -> Self {
        Self::new(predictions)
    }
}
