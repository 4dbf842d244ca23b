//! Request handlers

use crate::assets;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form, Json,
};
use mbtype_core::{CleanedPost, Error, TypeLabel};
use serde::{Deserialize, Serialize};

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "models": state.aggregator.model_names(),
    }))
}

// ============================================================================
// Page endpoints
// ============================================================================

pub async fn index() -> Html<String> {
    assets::render_page(None)
}

#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub post: Option<String>,
}

/// Form submission: normalize, predict, and render the label into the page.
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, ApiError> {
    let raw = form
        .post
        .ok_or_else(|| Error::input("missing form field: post"))?;

    let label = predict_type(&state, &raw).await?.0;
    Ok(assets::render_page(Some(&label)))
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub post: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// The composite four-letter label
    #[serde(rename = "type")]
    pub type_label: TypeLabel,

    /// The normalized text the classifiers saw
    pub cleaned: CleanedPost,
}

/// JSON variant of the prediction endpoint. Runs the same
/// normalize-then-predict path as the form handler.
pub async fn api_predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let raw = req
        .post
        .ok_or_else(|| Error::input("missing field: post"))?;

    let (type_label, cleaned) = predict_type(&state, &raw).await?;
    Ok(Json(PredictResponse {
        type_label,
        cleaned,
    }))
}

/// The one prediction path both surfaces share.
async fn predict_type(state: &AppState, raw: &str) -> Result<(TypeLabel, CleanedPost), ApiError> {
    let cleaned = state.normalizer.normalize(raw);
    let label = state.aggregator.predict(&cleaned).await?;

    tracing::debug!(cleaned = %cleaned, label = %label, "predicted type");
    Ok((label, cleaned))
}
