use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sitecfg::api;
use sitecfg::config::CONFIG;
use sitecfg::core::{fonts::FontConfig, loader, umami::UmamiConfig};
use sitecfg::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Report what the site config currently resolves to
    let site = loader::load_site_config(&CONFIG.site_config);
    let fonts = FontConfig::from_site(&site);
    let umami = UmamiConfig::from_site(&site);
    tracing::info!(
        "Site config: {} (fonts enabled: {}, custom fonts: {}, umami enabled: {})",
        CONFIG.site_config.display(),
        fonts.is_enabled(),
        fonts.custom_fonts.len(),
        umami.enable
    );

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutting down...");
    };

    // CORS
    let cors_layer = if CONFIG.cors == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = CONFIG
            .cors
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = api::router(AppState::from(&*CONFIG))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = match CONFIG.web_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid address {}: {}", CONFIG.web_addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}", addr);
    tracing::info!("Font config: http://{}/api/font-config", addr);
    tracing::info!("Preview: http://{}/", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!("Server error: {}", e);
    }
}
