use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::app::{dto, errors, services::AppState};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/init", post(init))
        .route("/invoke", post(invoke))
        .route("/query", post(query))
}

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

pub async fn init(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::InitRequest>,
) -> axum::response::Response {
    match state.bind_store(&body.store_handle) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"status": "bound"}))).into_response(),
        Err(e) => errors::init_error_to_response(e),
    }
}

pub async fn invoke(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::CallRequest>,
) -> axum::response::Response {
    let Some(registry) = state.registry() else {
        return errors::not_bound();
    };

    match registry.invoke(&body.function, &body.args).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn query(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::CallRequest>,
) -> axum::response::Response {
    let Some(registry) = state.registry() else {
        return errors::not_bound();
    };

    match registry.query(&body.function, &body.args).await {
        // The registry already produced the canonical serialization; hand
        // it back verbatim.
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}
