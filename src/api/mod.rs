//! HTTP routes

pub mod handlers;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::static_files;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Font config
        .route("/api/font-config", get(handlers::font_config_handler))
        .route("/api/font-config.json", get(handlers::font_config_handler))
        .route(
            "/api/font-config/presets/:name",
            get(handlers::preset_handler),
        )
        .route("/api/font.css", get(handlers::font_css_handler))
        // Tailwind
        .route("/api/tailwind-fonts", get(handlers::tailwind_fonts_handler))
        .route("/api/tailwind-theme", get(handlers::tailwind_theme_handler))
        // Analytics
        .route("/api/umami", get(handlers::umami_handler))
        // Health check
        .route("/ping", get(handlers::ping_handler))
        // Static files
        .route("/", get(static_files::serve_index))
        .route("/static/*path", get(static_files::serve_static))
        .with_state(state)
}
