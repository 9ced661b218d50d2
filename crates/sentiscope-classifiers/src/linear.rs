//! Bag-of-words linear sentiment model
//!
//! The artifact carries the fitted vocabulary, optional IDF weights, and one
//! weight row per class, as exported from a TF-IDF + linear classifier
//! training step. Prediction is a sparse dot product followed by arg-max.

use crate::classifier::Predictor;
use regex::Regex;
use sentiscope_core::{Error, LabelCode, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token pattern: runs of two or more word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Serialized form of a linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSpec {
    /// Model name
    #[serde(default)]
    pub name: Option<String>,

    /// Model version
    #[serde(default)]
    pub version: Option<String>,

    /// Label code of each class row
    pub classes: Vec<LabelCode>,

    /// Token (or n-gram) to feature column
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// One weight row per class
    pub coef: Vec<Vec<f64>>,

    /// One bias per class
    pub intercept: Vec<f64>,

    /// Lowercase text before tokenizing
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Largest n-gram size in the vocabulary
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,

    /// L2-normalize the feature vector
    #[serde(default = "default_true")]
    pub normalize: bool,
}

fn default_true() -> bool {
    true
}

fn default_ngram_max() -> usize {
    1
}

/// Validated, ready-to-run linear model
#[derive(Debug)]
pub struct LinearModel {
    name: String,
    classes: Vec<LabelCode>,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    lowercase: bool,
    ngram_max: usize,
    normalize: bool,
    token_regex: Regex,
}

impl LinearModel {
    /// Validate a spec and build the model
    pub fn from_spec(spec: LinearSpec) -> Result<Self> {
        let n_classes = spec.classes.len();
        let n_features = spec.vocabulary.len();

        if n_classes == 0 {
            return Err(Error::model("linear model has no classes"));
        }
        if spec.coef.len() != n_classes {
            return Err(Error::model(format!(
                "linear model has {} classes but {} coefficient rows",
                n_classes,
                spec.coef.len()
            )));
        }
        if spec.intercept.len() != n_classes {
            return Err(Error::model(format!(
                "linear model has {} classes but {} intercepts",
                n_classes,
                spec.intercept.len()
            )));
        }
        if let Some(row) = spec.coef.iter().position(|row| row.len() != n_features) {
            return Err(Error::model(format!(
                "coefficient row {} has {} weights, expected {}",
                row,
                spec.coef[row].len(),
                n_features
            )));
        }
        if let Some(idf) = &spec.idf {
            if idf.len() != n_features {
                return Err(Error::model(format!(
                    "idf has {} weights, expected {}",
                    idf.len(),
                    n_features
                )));
            }
        }
        if let Some((token, column)) = spec
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= n_features)
        {
            return Err(Error::model(format!(
                "vocabulary entry '{}' maps to column {} of {}",
                token, column, n_features
            )));
        }
        if spec.ngram_max == 0 {
            return Err(Error::model("ngram_max must be at least 1"));
        }
        let weights = spec
            .coef
            .iter()
            .flatten()
            .chain(&spec.intercept)
            .chain(spec.idf.iter().flatten());
        if let Some(value) = weights.copied().find(|value| !value.is_finite()) {
            return Err(Error::model(format!(
                "linear model contains a non-finite weight: {}",
                value
            )));
        }

        let token_regex = Regex::new(TOKEN_PATTERN)
            .map_err(|e| Error::model(format!("Failed to compile token regex: {}", e)))?;

        Ok(Self {
            name: spec.name.unwrap_or_else(|| "linear".to_string()),
            classes: spec.classes,
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            coef: spec.coef,
            intercept: spec.intercept,
            lowercase: spec.lowercase,
            ngram_max: spec.ngram_max,
            normalize: spec.normalize,
            token_regex,
        })
    }

    /// Number of feature columns
    pub fn num_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Label codes this model can emit, in class order
    pub fn classes(&self) -> &[LabelCode] {
        &self.classes
    }

    /// Sparse feature vector for one text
    fn features(&self, text: &str) -> HashMap<usize, f64> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = self
            .token_regex
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in 1..=self.ngram_max {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&column) = self.vocabulary.get(&gram) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }

        if let Some(idf) = &self.idf {
            for (column, value) in counts.iter_mut() {
                *value *= idf[*column];
            }
        }

        if self.normalize {
            let norm = counts.values().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in counts.values_mut() {
                    *value /= norm;
                }
            }
        }

        counts
    }

    /// Decision score for each class
    pub fn scores(&self, text: &str) -> Vec<f64> {
        let features = self.features(text);
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| {
                bias + features
                    .iter()
                    .map(|(&column, value)| row[column] * value)
                    .sum::<f64>()
            })
            .collect()
    }

    /// Label code for one text; ties go to the earlier class
    pub fn predict_one(&self, text: &str) -> LabelCode {
        let scores = self.scores(text);
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = idx;
            }
        }
        self.classes[best]
    }
}

impl Predictor for LinearModel {
    fn predict(&self, texts: &[String]) -> Result<Vec<LabelCode>> {
        Ok(texts.iter().map(|text| self.predict_one(text)).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
