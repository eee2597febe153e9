use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{Resource, ServiceError};
use thiserror::Error;
use tracing::error;

/// JSON error response for the API. Bodies keep the original service's
/// Korean texts: validation failures use `errorMessage`, everything else
/// `message`, and internal failures never leak detail.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, body: serde_json::json!({ "message": message.into() }) }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: serde_json::json!({ "errorMessage": message.into() }),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Localized templates for the lookup misses the services report as kinds.
fn not_found_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Category => "존재하지 않는 카테고리입니다.",
        Resource::Menu => "존재하지 않는 메뉴입니다.",
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg),
            ServiceError::NotFound(resource) => {
                Self::new(StatusCode::NOT_FOUND, not_found_message(resource))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "서버 오류")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
