use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ledgerlink_registry::RegistryError;
use ledgerlink_store::StoreError;

use crate::app::services::InitError;

pub fn registry_error_to_response(err: RegistryError) -> axum::response::Response {
    match &err {
        RegistryError::Arity { .. } => json_error(StatusCode::BAD_REQUEST, "arity", err.to_string()),
        RegistryError::UnsupportedOperation(_) => {
            json_error(StatusCode::BAD_REQUEST, "unsupported_operation", err.to_string())
        }
        RegistryError::TokenDecode(_) => {
            json_error(StatusCode::BAD_REQUEST, "token_decode", err.to_string())
        }
        RegistryError::Id(_) => json_error(StatusCode::BAD_REQUEST, "account_id", err.to_string()),
        RegistryError::Schema(_) => json_error(StatusCode::BAD_GATEWAY, "schema", err.to_string()),
        RegistryError::Store(_) => json_error(StatusCode::BAD_GATEWAY, "store", err.to_string()),
        RegistryError::Encode(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "encode", err.to_string())
        }
    }
}

pub fn init_error_to_response(err: InitError) -> axum::response::Response {
    match &err {
        InitError::AlreadyBound => json_error(StatusCode::CONFLICT, "already_bound", err.to_string()),
        InitError::Connect(StoreError::InvalidHandle(_)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_handle", err.to_string())
        }
        InitError::Connect(_) => json_error(StatusCode::BAD_GATEWAY, "store", err.to_string()),
    }
}

pub fn not_bound() -> axum::response::Response {
    json_error(
        StatusCode::CONFLICT,
        "not_initialized",
        "delegate store has not been bound; call /init first",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
