use std::path::PathBuf;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use medi_diabetes::FormSubmission;
use medi_diabetes_server::routes::{health, index, predict_api, predict_form};
use medi_diabetes_server::{load_model, AppState, ServerConfig};
use medi_risk_model::{ModelError, RiskModel};

struct StubModel(f64);

impl RiskModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    fn n_features(&self) -> usize {
        8
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64, ModelError> {
        Ok(self.0)
    }
}

struct Broken;

impl RiskModel for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn n_features(&self) -> usize {
        8
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        Err(ModelError::Shape {
            artifact: "classifier",
            expected: 7,
            found: features.len(),
        })
    }
}

fn state(model: impl RiskModel + 'static) -> AppState {
    AppState {
        model: Arc::new(model),
    }
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn repo_config() -> ServerConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    ServerConfig {
        classifier_path: root.join("models/classifier.json"),
        scaler_path: root.join("models/scaler.json"),
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn health_is_ok() {
    assert_eq!(health().await, "ok");
}

#[tokio::test]
async fn index_shows_form_without_result() {
    let html = index().await.0;
    assert!(html.contains("Predict Diabetes Risk"));
    assert!(!html.contains("id=\"results\""));
}

#[tokio::test]
async fn form_post_renders_result() {
    let resp = predict_form(State(state(StubModel(0.8))), Form(FormSubmission::default())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("id=\"results\""));
    assert!(html.contains(">High</h2>"));
}

#[tokio::test]
async fn out_of_range_form_is_rejected_before_inference() {
    let sub = FormSubmission {
        height: Some("0".into()),
        ..Default::default()
    };
    let resp = predict_form(State(state(Broken)), Form(sub)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("Height must be between 100 and 250, got 0"));
}

#[tokio::test]
async fn shape_mismatch_is_a_server_error() {
    let resp = predict_form(State(state(Broken)), Form(FormSubmission::default())).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn api_returns_json_result() {
    let sub: FormSubmission = serde_json::from_str(r#"{"age": 40, "insulin": "Unknown"}"#).unwrap();
    let resp = predict_api(State(state(StubModel(0.1))), Ok(Json(sub)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(v["risk_tier"], "Low");
    assert_eq!(v["bmi_status"], "Normal");
}

#[tokio::test]
async fn api_rejects_unknown_category() {
    let sub: FormSubmission = serde_json::from_str(r#"{"insulin": "sky-high"}"#).unwrap();
    let resp = predict_api(State(state(StubModel(0.1))), Ok(Json(sub)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let v: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(v["error"], "Insulin has no option 'sky-high'");
}

#[test]
fn shipped_artifacts_load() {
    let model = load_model(&repo_config()).expect("shipped artifacts are valid");
    assert_eq!(model.n_features(), 8);
    let x = [0.0, 100.0, 120.0, 30.0, 150.0, 24.2, 0.1, 40.0];
    let p = model.predict_proba(&x).unwrap();
    assert!((0.0..=1.0).contains(&p));
    assert_eq!(p.to_bits(), model.predict_proba(&x).unwrap().to_bits());
}

#[test]
fn missing_artifacts_fail_fast() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let config = ServerConfig {
        classifier_path: tmp.path().join("classifier.json"),
        scaler_path: tmp.path().join("scaler.json"),
        ..ServerConfig::default()
    };
    assert!(matches!(load_model(&config), Err(ModelError::Io { .. })));
}

#[test]
fn reordered_scaler_is_refused() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let config = repo_config();
    let scaler = std::fs::read_to_string(&config.scaler_path).unwrap();
    let swapped = scaler
        .replacen("\"Pregnancies\"", "\"TMP\"", 1)
        .replacen("\"Age\"", "\"Pregnancies\"", 1)
        .replacen("\"TMP\"", "\"Age\"", 1);
    let scaler_path = tmp.path().join("scaler.json");
    std::fs::write(&scaler_path, swapped).unwrap();
    let config = ServerConfig {
        scaler_path,
        ..config
    };
    assert!(matches!(load_model(&config), Err(ModelError::Mismatch { .. })));
}
