//! Batch prediction over submitted lines

use crate::classifier::{Prediction, Predictor};
use sentiscope_core::{Error, LabelCode, Result};
use tracing::debug;

/// Classify every line in one call to the predictor.
///
/// Fails if the predictor does not return exactly one code per line.
pub fn predict(lines: &[String], model: &dyn Predictor) -> Result<Vec<LabelCode>> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let codes = model.predict(lines)?;
    if codes.len() != lines.len() {
        return Err(Error::PredictionMismatch {
            expected: lines.len(),
            actual: codes.len(),
        });
    }

    debug!("Predicted {} lines with '{}'", lines.len(), model.name());
    Ok(codes)
}

/// Classify lines and pair each with its code and sentiment, numbered from 1
pub fn classify_lines(lines: &[String], model: &dyn Predictor) -> Result<Vec<Prediction>> {
    let codes = predict(lines, model)?;
    Ok(lines
        .iter()
        .zip(codes)
        .enumerate()
        .map(|(i, (text, code))| Prediction::new(i + 1, text.as_str(), code))
        .collect())
}
