use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use thiserror::Error;
use tracing::error;

/// Every error shape the HTTP surface can return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("404 - Company not found")]
    CompanyNotFound,
    #[error("404 - Not Found")]
    RouteNotFound,
    #[error("422 - Unprocessable Entity")]
    Unprocessable,
    #[error("500 - Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CompanyNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Read-path mapping: absent rows are 404, anything else is 500.
impl From<service::errors::ServiceError> for ApiError {
    fn from(e: service::errors::ServiceError) -> Self {
        match e {
            service::errors::ServiceError::NotFound(_) => ApiError::CompanyNotFound,
            other => {
                error!(kind = other.kind(), error = %other, "company lookup failed");
                ApiError::Internal
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}
