use crate::config::ServerConfig;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub fn router(config: &ServerConfig) -> Router {
    let api = Router::new().route("/api/health", get(handle_health));

    let app = match &config.static_dir {
        Some(dir) => {
            // Unknown paths get index.html so the front-end can mount into #root.
            let assets = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            api.fallback_service(assets)
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
}

async fn handle_health() -> Json<Health> {
    tracing::debug!("health check");
    Json(Health {
        status: "ok",
        service: "nixspaces",
        version: env!("CARGO_PKG_VERSION"),
    })
}
