//! HTTP tests for the web UI and JSON API

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sentiscope_classifiers::Predictor;
use sentiscope_core::{LabelCode, Result};
use sentiscope_web::render::{BUTTON_LABEL, RESULTS_HEADING, WARNING_MESSAGE};
use sentiscope_web::server::build_app;
use sentiscope_web::state::AppState;
use sentiscope_web::templates::Templates;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Keyword predictor that records how often it is called
struct CountingPredictor {
    calls: AtomicUsize,
    drop_last: bool,
}

impl CountingPredictor {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            drop_last: false,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Predictor for CountingPredictor {
    fn predict(&self, texts: &[String]) -> Result<Vec<LabelCode>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let mut codes: Vec<LabelCode> = texts
            .iter()
            .map(|t| {
                if t.contains("love") {
                    4
                } else if t.contains("hate") {
                    0
                } else if t.contains("meh") {
                    2
                } else {
                    9
                }
            })
            .collect();
        if self.drop_last {
            codes.pop();
        }
        Ok(codes)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn app(model: Arc<CountingPredictor>) -> Router {
    build_app(AppState::new(model, Templates::default()))
}

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_renders_form() {
    let response = app(CountingPredictor::new())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(BUTTON_LABEL));
    assert!(!page.contains(RESULTS_HEADING));
}

#[tokio::test]
async fn test_blank_input_warns_without_predicting() {
    let model = CountingPredictor::new();
    let response = app(model.clone())
        .oneshot(form_request("text=+++%0A+++"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(WARNING_MESSAGE));
    assert!(!page.contains(RESULTS_HEADING));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_missing_text_field_warns() {
    let model = CountingPredictor::new();
    let response = app(model.clone()).oneshot(form_request("")).await.unwrap();

    let page = body_text(response).await;
    assert!(page.contains(WARNING_MESSAGE));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_form_renders_results_in_order() {
    let model = CountingPredictor::new();
    let response = app(model.clone())
        .oneshot(form_request(
            "text=++I+love+it+%0A%0Ameh%0D%0AI+hate+it%0Awhat",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert_eq!(model.calls(), 1);
    assert!(page.contains(RESULTS_HEADING));

    let expected = [
        ("1. I love it", "#4CAF50", "Positive</span> (4)"),
        ("2. meh", "#FF9800", "Neutral</span> (2)"),
        ("3. I hate it", "#F44336", "Negative</span> (0)"),
        ("4. what", "#000000", "Unknown</span> (9)"),
    ];
    let mut last = 0;
    for (heading, color, label) in expected {
        let at = page.find(heading).unwrap_or_else(|| panic!("missing {heading}"));
        assert!(at > last, "{heading} out of order");
        last = at;
        assert!(page[at..].contains(color));
        assert!(page[at..].contains(label));
    }
}

#[tokio::test]
async fn test_form_escapes_user_text() {
    let response = app(CountingPredictor::new())
        .oneshot(form_request("text=%3Cb%3Elove%3C%2Fb%3E"))
        .await
        .unwrap();

    let page = body_text(response).await;
    assert!(page.contains("1. &lt;b&gt;love&lt;/b&gt;"));
    assert!(!page.contains("<b>love</b>"));
}

#[tokio::test]
async fn test_form_reports_length_mismatch() {
    let model = Arc::new(CountingPredictor {
        calls: AtomicUsize::new(0),
        drop_last: true,
    });
    let response = app(model)
        .oneshot(form_request("text=love%0Ahate"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body_text(response).await;
    assert!(page.contains("Prediction failed: predictor returned 1 labels for 2 lines"));
    assert!(!page.contains(RESULTS_HEADING));
}

#[tokio::test]
async fn test_api_predict() {
    let response = app(CountingPredictor::new())
        .oneshot(json_request(serde_json::json!({
            "text": "love this\n\n  meh ",
            "lines": ["hate that"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["model"], "counting");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["index"], 1);
    assert_eq!(results[0]["text"], "love this");
    assert_eq!(results[0]["label"], "Positive");
    assert_eq!(results[0]["color"], "#4CAF50");
    assert_eq!(results[1]["text"], "meh");
    assert_eq!(results[1]["code"], 2);
    assert_eq!(results[2]["label"], "Negative");
}

#[tokio::test]
async fn test_api_blank_input_is_unprocessable() {
    let model = CountingPredictor::new();
    let response = app(model.clone())
        .oneshot(json_request(serde_json::json!({ "text": "   \n   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "input contains no non-empty lines");
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_health() {
    let response = app(CountingPredictor::new())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "counting");
}
