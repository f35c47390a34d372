//! Comparison actions built on top of the prediction core.

mod run_predictions;

pub use run_predictions::run_predictions;
