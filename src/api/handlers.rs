//! API handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::core::fonts::{self, FontConfig};
use crate::core::umami::UmamiConfig;
use crate::core::{loader, presets, tailwind};
use crate::state::AppState;

async fn font_config(state: &AppState) -> FontConfig {
    let site = loader::load_site_config_async(&state.site_config).await;
    FontConfig::from_site(&site)
}

pub async fn ping_handler() -> impl IntoResponse {
    "pong"
}

/// GET /api/font-config
pub async fn font_config_handler(State(state): State<AppState>) -> Response {
    let config = font_config(&state).await;

    match serde_json::to_string(&config) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (header::CACHE_CONTROL, state.cache_control()),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to get font config: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load font config" })),
            )
                .into_response()
        }
    }
}

/// GET /api/font.css - the stylesheet a static build would inline
pub async fn font_css_handler(State(state): State<AppState>) -> Response {
    let css = fonts::font_css(&font_config(&state).await);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, state.cache_control()),
        ],
        css,
    )
        .into_response()
}

/// GET /api/font-config/presets/:name
pub async fn preset_handler(Path(name): Path<String>) -> Response {
    match presets::preset(&name) {
        Some(config) => Json(config).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("Font preset \"{}\" not found", name),
                "presets": presets::NAMES,
            })),
        )
            .into_response(),
    }
}

/// GET /api/tailwind-fonts - `{}` while the font system is disabled
pub async fn tailwind_fonts_handler(State(state): State<AppState>) -> impl IntoResponse {
    match tailwind::font_family(&font_config(&state).await) {
        Some(fragment) => Json(json!(fragment)),
        None => Json(json!({})),
    }
}

/// GET /api/tailwind-theme
pub async fn tailwind_theme_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(tailwind::theme(&font_config(&state).await))
}

/// GET /api/umami
pub async fn umami_handler(State(state): State<AppState>) -> impl IntoResponse {
    let site = loader::load_site_config_async(&state.site_config).await;
    Json(UmamiConfig::from_site(&site))
}
