//! End-to-end route tests over the assembled application
//!
//! Artifacts are written to a temp directory, loaded the way the binary
//! loads them, and the router is driven directly with oneshot requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use mbtype_classifiers::{LinearModelArtifact, ModelSet, TextNormalizer, TypeAggregator};
use mbtype_core::Axis;
use mbtype_web::{build_app, AppState};
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn write_artifact(
    dir: &Path,
    axis: Axis,
    labels: [&str; 2],
    vocabulary: &[(&str, f32)],
    intercept: f32,
) {
    let artifact = LinearModelArtifact {
        axis,
        labels: [labels[0].to_string(), labels[1].to_string()],
        vocabulary: vocabulary
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (term.to_string(), i))
            .collect::<HashMap<_, _>>(),
        weights: vocabulary.iter().map(|(_, w)| *w).collect(),
        intercept,
    };
    std::fs::write(
        dir.join(axis.artifact_file_name()),
        serde_json::to_string_pretty(&artifact).unwrap(),
    )
    .unwrap();
}

/// Models that send "introvert" posts to INTP and empty posts to ENTP.
fn test_app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), Axis::Ei, ["E", "I"], &[("introvert", 5.0)], -1.0);
    write_artifact(dir.path(), Axis::Ns, ["S", "N"], &[], 0.5);
    write_artifact(dir.path(), Axis::Tf, ["F", "T"], &[], 0.5);
    write_artifact(dir.path(), Axis::Pj, ["J", "P"], &[], 0.5);

    let normalizer = TextNormalizer::new().unwrap();
    let aggregator = TypeAggregator::new(ModelSet::load(dir.path()).unwrap());
    let app = build_app(AppState::new(normalizer, aggregator));
    (app, dir)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_serves_the_form() {
    let (app, _dir) = test_app();

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<form"));
    assert!(!body.contains("MBTI type:"));
}

#[tokio::test]
async fn form_submission_renders_the_label() {
    let (app, _dir) = test_app();

    let request = Request::post("/predict")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from("post=I+am+an+introvert"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("MBTI type: INTP"));
}

#[tokio::test]
async fn api_predict_returns_type_and_cleaned_text() {
    let (app, _dir) = test_app();

    let request = Request::post("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"post": "I am an introvert"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["type"], "INTP");
    assert_eq!(body["cleaned"], "introvert");
}

#[tokio::test]
async fn empty_post_is_classified_not_rejected() {
    let (app, _dir) = test_app();

    let request = Request::post("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"post": ""}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["type"], "ENTP");
    assert_eq!(body["cleaned"], "");
}

#[tokio::test]
async fn missing_post_field_is_a_bad_request() {
    let (app, _dir) = test_app();

    let request = Request::post("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("post"));
}

#[tokio::test]
async fn missing_form_field_is_a_bad_request() {
    let (app, _dir) = test_app();

    let request = Request::post("/predict")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from("other=value"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_loaded_models() {
    let (app, _dir) = test_app();

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["models"][0], "EI-linear");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (app, _dir) = test_app();

    let response = app
        .oneshot(Request::get("/nope.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
