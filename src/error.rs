//! API error taxonomy and its mapping onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    Connection(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Constraint(_) | ApiError::Query(_) => "query_error",
            ApiError::Connection(_) => "connection_error",
        }
    }

    // Server-side detail stays in the log
    fn public_message(&self) -> String {
        match self {
            ApiError::Query(_) => "Failed to execute query".into(),
            ApiError::Connection(_) => "Database is unavailable".into(),
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Constraint(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection(msg) | StoreError::Configuration(msg) => {
                ApiError::Connection(msg)
            }
            StoreError::Constraint(msg) => ApiError::Constraint(msg),
            StoreError::Query(msg) => ApiError::Query(msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Constraint(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", self.kind(), self);
        } else {
            info!("Request rejected ({}): {}", self.kind(), self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().into(),
            message: self.public_message(),
        })
    }
}
