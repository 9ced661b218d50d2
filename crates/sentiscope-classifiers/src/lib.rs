//! Sentiscope Classifiers
//!
//! Sentiment predictors and the machinery around them:
//! - [`Predictor`]: a loaded model mapping text lines to label codes
//! - [`Sentiment`]: the closed set of display labels and colors
//! - [`ModelLoader`]: unpacks the packaged artifact once and caches the predictor
//! - [`predict`] / [`classify_lines`]: batch prediction with length validation
//!
//! Two artifact kinds are understood: a bag-of-words linear model exported from
//! a TF-IDF training step, and a word-list lexicon.

pub mod artifact;
pub mod classifier;
pub mod lexicon;
pub mod linear;
pub mod model_loader;
pub mod prediction;
pub mod sentiment;

pub use artifact::ModelArtifact;
pub use classifier::{Prediction, Predictor};
pub use lexicon::{LexiconCodes, LexiconModel, LexiconSpec};
pub use linear::{LinearModel, LinearSpec};
pub use model_loader::{ModelConfig, ModelLoader};
pub use prediction::{classify_lines, predict};
pub use sentiment::Sentiment;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Prediction, Predictor};
    pub use crate::model_loader::{ModelConfig, ModelLoader};
    pub use crate::prediction::{classify_lines, predict};
    pub use crate::sentiment::Sentiment;
}
