//! Embedded page assets

use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use mbtype_core::TypeLabel;
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web"]
struct PageAssets;

/// Marker in index.html replaced by the rendered prediction
const PREDICTION_SLOT: &str = "<!-- prediction -->";

/// Render the form page, with the prediction filled in after a submit.
pub fn render_page(prediction: Option<&TypeLabel>) -> Html<String> {
    let template = page_template();
    let rendered = match prediction {
        Some(label) => template.replace(
            PREDICTION_SLOT,
            &format!(r#"<p class="result">MBTI type: {label}</p>"#),
        ),
        None => template.replace(PREDICTION_SLOT, ""),
    };
    Html(rendered)
}

fn page_template() -> String {
    <PageAssets as Embed>::get("index.html")
        .map(|content| String::from_utf8_lossy(&content.data).into_owned())
        .unwrap_or_else(|| FALLBACK_HTML.to_string())
}

/// Serve any other embedded asset (stylesheets etc.) by exact path.
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = <PageAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "not found").into_response()
}

/// Bare-bones page used only if the embedded assets are unavailable
/// (debug builds running outside the crate directory).
const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>MBType</title>
</head>
<body>
    <h1>MBType</h1>
    <form method="post" action="/predict">
        <textarea name="post" rows="8" cols="60" placeholder="Paste some posts..."></textarea>
        <br>
        <button type="submit">Predict</button>
    </form>
    <!-- prediction -->
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_prediction_into_slot() {
        let page = render_page(Some(&TypeLabel::new("INTP"))).0;
        assert!(page.contains("MBTI type: INTP"));
        assert!(!page.contains(PREDICTION_SLOT));
    }

    #[test]
    fn empty_slot_without_prediction() {
        let page = render_page(None).0;
        assert!(!page.contains("MBTI type:"));
        assert!(page.contains("<form"));
    }
}
