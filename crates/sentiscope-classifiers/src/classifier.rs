//! Predictor trait and the per-line prediction record

use crate::sentiment::Sentiment;
use sentiscope_core::{LabelCode, Result};
use serde::Serialize;

/// A loaded sentiment model
///
/// Implementations are immutable once constructed and shared across requests
/// behind an `Arc`.
pub trait Predictor: Send + Sync {
    /// Classify each text, returning one label code per input in the same order
    fn predict(&self, texts: &[String]) -> Result<Vec<LabelCode>>;

    /// Get the model name
    fn name(&self) -> &str;
}

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// 1-based position of the line in the submitted input
    pub index: usize,

    /// The trimmed input text
    pub text: String,

    /// Raw label code returned by the predictor
    pub code: LabelCode,

    /// Display sentiment derived from the code
    pub sentiment: Sentiment,
}

impl Prediction {
    /// Create a new prediction, deriving the sentiment from the code
    pub fn new(index: usize, text: impl Into<String>, code: LabelCode) -> Self {
        Self {
            index,
            text: text.into(),
            code,
            sentiment: Sentiment::from_code(code),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        self.sentiment.label()
    }

    /// Hex color for the display label
    pub fn color(&self) -> &'static str {
        self.sentiment.color()
    }
}
