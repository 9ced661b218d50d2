//! Serialized model artifacts

use crate::classifier::Predictor;
use crate::lexicon::{LexiconModel, LexiconSpec};
use crate::linear::{LinearModel, LinearSpec};
use sentiscope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A model artifact as stored on disk, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    /// Bag-of-words linear classifier
    Linear(LinearSpec),
    /// Word-list classifier
    Lexicon(LexiconSpec),
}

impl ModelArtifact {
    /// Parse an artifact from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::model(format!("invalid model artifact: {}", e)))
    }

    /// Read and parse an artifact file
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Artifact kind as written in the `kind` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Lexicon(_) => "lexicon",
        }
    }

    /// Validate the artifact and build its predictor
    pub fn into_predictor(self) -> Result<Arc<dyn Predictor>> {
        Ok(match self {
            Self::Linear(spec) => Arc::new(LinearModel::from_spec(spec)?),
            Self::Lexicon(spec) => Arc::new(LexiconModel::from_spec(spec)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linear() {
        let json = br#"{
            "kind": "linear",
            "name": "tiny",
            "classes": [0, 4],
            "vocabulary": {"bad": 0, "good": 1},
            "coef": [[1.0, -1.0], [-1.0, 1.0]],
            "intercept": [0.0, 0.0]
        }"#;
        let artifact = ModelArtifact::from_slice(json).unwrap();
        assert_eq!(artifact.kind(), "linear");

        let predictor = artifact.into_predictor().unwrap();
        assert_eq!(predictor.name(), "tiny");
        let codes = predictor
            .predict(&["good".to_string(), "bad".to_string()])
            .unwrap();
        assert_eq!(codes, vec![4, 0]);
    }

    #[test]
    fn test_parse_lexicon() {
        let json = br#"{"kind": "lexicon", "positive": ["nice"], "negative": ["meh"]}"#;
        let predictor = ModelArtifact::from_slice(json)
            .unwrap()
            .into_predictor()
            .unwrap();
        assert_eq!(predictor.name(), "lexicon");
        assert_eq!(predictor.predict(&["nice".to_string()]).unwrap(), vec![4]);
    }

    #[test]
    fn test_unknown_kind_is_model_error() {
        let result = ModelArtifact::from_slice(br#"{"kind": "pickle"}"#);
        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn test_garbage_is_model_error() {
        let result = ModelArtifact::from_slice(b"\x80\x04\x95 not json");
        assert!(matches!(result, Err(Error::Model(_))));
    }
}
