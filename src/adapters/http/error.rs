//! API error type shared by all HTTP adapters.
//!
//! Every failure leaves the server as a JSON `ErrorResponse` with a status
//! matching its `ErrorCode`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::{ProcessInteractionError, SendMessageError};
use crate::domain::foundation::{DomainError, ErrorCode};

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// ApiError
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn invalid_conversation_id(raw: &str) -> Self {
        Self(
            DomainError::new(ErrorCode::ValidationFailed, "Invalid conversation id")
                .with_detail("conversation_id", raw),
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.0.code()
    }

    pub fn status(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField => StatusCode::BAD_REQUEST,
            ErrorCode::ConversationNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ConversationBusy => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ProcessInteractionError> for ApiError {
    fn from(err: ProcessInteractionError) -> Self {
        Self(err.into())
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        let message = err.to_string();
        let domain = match err {
            SendMessageError::EmptyContent => DomainError::new(ErrorCode::EmptyField, message),
            SendMessageError::TooLong { .. } => {
                DomainError::new(ErrorCode::ValidationFailed, message)
            }
            SendMessageError::ConversationNotFound(id) => {
                DomainError::new(ErrorCode::ConversationNotFound, message)
                    .with_detail("conversation_id", id)
            }
            SendMessageError::ConversationBusy(id) => {
                DomainError::new(ErrorCode::ConversationBusy, message)
                    .with_detail("conversation_id", id)
            }
            SendMessageError::Internal(_) => DomainError::new(ErrorCode::InternalError, message),
        };
        Self(domain)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Request failed");
        }

        let DomainError {
            code,
            message,
            details,
        } = self.0;
        let body = ErrorResponse {
            code: code.to_string(),
            message,
            details: if details.is_empty() {
                None
            } else {
                serde_json::to_value(details).ok()
            },
        };

        (status, Json(body)).into_response()
    }
}
