use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::db::DbError;

/// Every way a catalog request can end without a result.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store could not answer. The message is echoed to the client.
    #[error(transparent)]
    Store(#[from] DbError),
    /// Nothing matched; the body is the bare message.
    #[error("{0}")]
    NotFound(&'static str),
    /// A paginated listing came back empty; the body is `{"message": ...}`.
    #[error("{0}")]
    NoResults(&'static str),
    #[error("{0}")]
    BadRequest(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(e) => {
                error!("Store query failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::NoResults(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
