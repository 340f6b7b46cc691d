//! Static files with external override support
//!
//! Priority: ./static/{file} > embedded default

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::font_loader::{FontLoader, StaticDocument};
use crate::core::fonts::{font_family_css, FontConfig};
use crate::core::loader;
use crate::core::umami::UmamiConfig;
use crate::state::AppState;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

const STATIC_DIR: &str = "static";

fn mime_type(path: &str) -> String {
    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");

    // Add charset=utf-8 for text types
    if mime.starts_with("text/")
        || mime.contains("json")
        || mime.contains("xml")
        || mime.contains("javascript")
    {
        format!("{}; charset=utf-8", mime)
    } else {
        mime.to_string()
    }
}

/// Try to read from external static dir first, fallback to embedded
fn read_file(path: &str) -> Option<Vec<u8>> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }

    let external_path = PathBuf::from(STATIC_DIR).join(path);
    if external_path.is_file() {
        if let Ok(content) = std::fs::read(&external_path) {
            tracing::debug!("Serving external: {}", external_path.display());
            return Some(content);
        }
    }

    Assets::get(path).map(|f| f.data.to_vec())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn serve(path: &str) -> Response {
    match read_file(path) {
        Some(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime_type(path)),
                (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
            ],
            content,
        )
            .into_response(),
        None => not_found(),
    }
}

/// Everything the demo page needs in `<head>`: family rules, the loader's
/// style elements and the analytics tag.
fn render_head(config: &FontConfig, doc: &StaticDocument, umami: &UmamiConfig) -> String {
    let mut parts = Vec::new();
    let family = font_family_css(config);
    if !family.is_empty() {
        parts.push(format!("<style id=\"font-config\">\n{}\n</style>", family));
    }
    let styles = doc.head_html();
    if !styles.is_empty() {
        parts.push(styles);
    }
    if let Some(script) = umami.tracking_script() {
        parts.push(script);
    }
    parts.join("\n")
}

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub preset: Option<String>,
}

/// Serve index.html pre-rendered with the current font config, or with a
/// preset when `?preset=` names one.
pub async fn serve_index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Response {
    let Some(content) = read_file("index.html") else {
        return not_found();
    };

    let site = loader::load_site_config_async(&state.site_config).await;
    let umami = UmamiConfig::from_site(&site);

    let mut doc = StaticDocument::new();
    let mut font_loader = FontLoader::with_config(FontConfig::from_site(&site));
    let switched = params
        .preset
        .as_deref()
        .is_some_and(|name| font_loader.switch_preset(name, &mut doc));
    if !switched {
        font_loader.apply(&mut doc);
    }

    let config = font_loader.config().cloned().unwrap_or_default();
    let text = String::from_utf8_lossy(&content);
    let replaced = text
        .replace("{{FONT_HEAD}}", &render_head(&config, &doc, &umami))
        .replace("{{BODY_CLASS}}", &doc.body_class());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime_type("index.html")),
            (header::CACHE_CONTROL, state.cache_control()),
        ],
        replaced,
    )
        .into_response()
}

pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve(&path)
}
