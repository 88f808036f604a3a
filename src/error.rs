use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::extract::ExtractError;
use crate::fetch::FetchError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// What kind of file a request is working on. Only affects error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Image,
    Pdf,
}

impl Resource {
    fn failure_context(self) -> &'static str {
        match self {
            Resource::Image => "An error occurred",
            Resource::Pdf => "An error occurred processing the PDF",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Image => f.write_str("image"),
            Resource::Pdf => f.write_str("PDF"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to download {resource}: {detail}")]
    Download { resource: Resource, detail: String },

    #[error("Tesseract Error: The Tesseract executable was not found.")]
    EngineUnavailable,

    // Decode and processing faults share one message.
    #[error("{}: {}", .resource.failure_context(), .detail)]
    Processing { resource: Resource, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn download(resource: Resource, err: FetchError) -> Self {
        AppError::Download {
            resource,
            detail: err.to_string(),
        }
    }

    pub fn extraction(resource: Resource, err: ExtractError) -> Self {
        match err {
            ExtractError::EngineUnavailable(_) if resource == Resource::Image => {
                AppError::EngineUnavailable
            }
            other => AppError::Processing {
                resource,
                detail: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Download { .. } => StatusCode::BAD_REQUEST,
            AppError::EngineUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Processing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

// Every body rejection is a validation failure, whatever status axum picked.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
