use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the in-memory item store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Not Found")]
    RouteNotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(name) => AppError::NotFound(name),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    /// Classifies a failure the framework produced outside our handlers.
    /// Server-side statuses collapse into `Internal`; client-side ones keep
    /// their status.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            s if s.is_server_error() => AppError::Internal(message),
            StatusCode::BAD_REQUEST => AppError::BadRequest(message),
            s => AppError::Rejected(s, message),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Internal(msg) if msg.is_empty() => "Internal Server Error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.message();
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &message })
    }
}
