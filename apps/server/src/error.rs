use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Failure returned to clients. Carries only the fixed, route-specific
/// message; the underlying cause is logged and never sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Upstream(&'static str),
}

impl ApiError {
    /// Logs `cause` and collapses it into a 500 with `message`.
    pub fn upstream(message: &'static str, cause: impl Display) -> Self {
        tracing::error!(error = %cause, "{}", message);
        ApiError::Upstream(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
