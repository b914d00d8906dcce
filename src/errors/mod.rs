use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// A failure surfaced by the persistence collaborator.
///
/// The service layer treats this as opaque: it is logged once and handed back
/// to the caller unchanged, never translated or swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    message: String,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RepositoryError {}

/// Errors mapped to HTTP responses at the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    InternalServerError { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InternalServerError { message } => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalServerError { message } => HttpResponse::InternalServerError()
                .json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                }),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::InternalServerError {
            message: err.to_string(),
        }
    }
}
