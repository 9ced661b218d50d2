use crate::render::{render_page, Outcome};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use sentiscope_classifiers::{classify_lines, Prediction};
use sentiscope_core::{extract_lines, Error, LabelCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "model": state.model.name() }))
}

// ============================================================================
// Page endpoints
// ============================================================================

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.templates, "", &Outcome::Idle))
}

#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub text: String,
}

pub async fn predict_form(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> (StatusCode, Html<String>) {
    let lines = extract_lines(&form.text);

    let (status, outcome) = if lines.is_empty() {
        (StatusCode::OK, Outcome::Warning)
    } else {
        match classify_lines(&lines, state.model.as_ref()) {
            Ok(predictions) => {
                info!("Classified {} lines", predictions.len());
                (StatusCode::OK, Outcome::Results(predictions))
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Outcome::Failed(e.to_string()))
            }
        }
    };

    (status, Html(render_page(&state.templates, &form.text, &outcome)))
}

// ============================================================================
// JSON API
// ============================================================================

/// Either free text split on line breaks, or pre-split lines
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub lines: Option<Vec<String>>,
}

impl PredictRequest {
    /// Trimmed, non-empty lines in submission order
    pub fn into_lines(self) -> Vec<String> {
        let mut lines = self.text.as_deref().map(extract_lines).unwrap_or_default();
        if let Some(extra) = self.lines {
            lines.extend(
                extra
                    .iter()
                    .map(|line| line.trim())
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }
        lines
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionItem {
    pub index: usize,
    pub text: String,
    pub code: LabelCode,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Prediction> for PredictionItem {
    fn from(prediction: Prediction) -> Self {
        Self {
            index: prediction.index,
            label: prediction.label(),
            color: prediction.color(),
            code: prediction.code,
            text: prediction.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub model: String,
    pub results: Vec<PredictionItem>,
}

pub async fn api_predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Response {
    let lines = req.into_lines();
    if lines.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": Error::EmptyInput.to_string() })),
        )
            .into_response();
    }

    match classify_lines(&lines, state.model.as_ref()) {
        Ok(predictions) => {
            info!("Classified {} lines via API", predictions.len());
            Json(PredictResponse {
                model: state.model.name().to_string(),
                results: predictions.into_iter().map(PredictionItem::from).collect(),
            })
            .into_response()
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_text_and_lines() {
        let req = PredictRequest {
            text: Some(" a \n\n b ".to_string()),
            lines: Some(vec!["  c".to_string(), "   ".to_string()]),
        };
        assert_eq!(req.into_lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_request() {
        assert!(PredictRequest::default().into_lines().is_empty());
    }
}
