//! Run a dataset through a set of models and collect per-model results.

use std::collections::HashMap;

use serde_json::json;

use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::model::Model;
use crate::results::PredictionResults;

/// Predict every dataset entry with every model, keyed by model name.
///
/// Items are processed sequentially, one vendor call each. Per-item failures
/// are best-effort: the error is logged and the item skipped, so one bad item
/// (or one flaky call) does not abort the rest of a model's run. Each success
/// contributes an `{"input": ..., "prediction": ...}` record.
pub async fn run_predictions(
    dataset: &dyn Dataset,
    models: &[Model],
) -> Result<HashMap<String, PredictionResults>, BenchError> {
    let entries = dataset.get_data()?;
    let mut results = HashMap::new();

    for model in models {
        let mut predictions = Vec::with_capacity(entries.len());
        for entry in &entries {
            match model.predict(entry.clone()).await {
                Ok(outcome) => {
                    let output = outcome.into_vec().into_iter().next().unwrap_or_default();
                    predictions.push(json!({
                        "input": entry,
                        "prediction": output,
                    }));
                }
                Err(error) => {
                    tracing::warn!(
                        model = model.model_name(),
                        dataset = dataset.name(),
                        error = %error,
                        "prediction failed, skipping item"
                    );
                }
            }
        }
        results.insert(
            model.model_name().to_string(),
            PredictionResults::new(predictions),
        );
    }

    Ok(results)
}
