use crate::route::route::route_handler;
use crate::state::AppState;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ruta", post(route_handler))
        .route("/health", get(health_handler))
        .route_service(
            "/favicon.ico",
            ServeFile::new(static_dir.join("favicon.ico")),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
