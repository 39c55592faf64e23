use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Message returned for every failure that is not the caller's fault.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Database Error: {0}")]
    DatabaseError(String),
    #[error("Configuration Error: {0}")]
    ConfigError(String),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidArgument(msg) => HttpResponse::BadRequest().json(ErrorResponse {
                detail: msg.clone(),
            }),
            other => {
                error!("{}", other);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    detail: INTERNAL_ERROR_DETAIL.to_string(),
                })
            }
        }
    }
}
