use crate::templates::Templates;
use sentiscope_classifiers::Predictor;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded model, read-only after startup
    pub model: Arc<dyn Predictor>,

    /// Header markup and stylesheet
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(model: Arc<dyn Predictor>, templates: Templates) -> Self {
        Self {
            model,
            templates: Arc::new(templates),
        }
    }
}
