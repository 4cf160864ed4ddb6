//! Handler error type.
//!
//! Every variant serialises to the API's [`ErrorResponse`] body with the
//! code a client matches on, and maps to the status the live service uses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use neynar_api::{codes, ErrorResponse};

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    Unauthorized(String),
    NotFound(String),
    /// A request field failed validation; `property` names it.
    InvalidField {
        property: &'static str,
        message: String,
    },
    InvalidSignature(String),
    DeadlineExpired(String),
    /// The signer exists but may not write.
    SignerNotApproved(String),
    /// The signer is not in the state the operation requires.
    SignerStateConflict(String),
    Forbidden(String),
}

impl AppError {
    pub fn invalid(property: &'static str, message: impl Into<String>) -> Self {
        AppError::InvalidField {
            property,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(codes::UNAUTHORIZED, msg),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(codes::NOT_FOUND, msg),
            ),
            AppError::InvalidField { property, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(codes::INVALID_PARAMETER, message).with_property(property),
            ),
            AppError::InvalidSignature(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(codes::INVALID_SIGNATURE, msg).with_property("signature"),
            ),
            AppError::DeadlineExpired(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(codes::DEADLINE_EXPIRED, msg).with_property("deadline"),
            ),
            AppError::SignerNotApproved(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(codes::SIGNER_NOT_APPROVED, msg),
            ),
            AppError::SignerStateConflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(codes::SIGNER_STATE_CONFLICT, msg),
            ),
            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(codes::FORBIDDEN, msg),
            ),
        };
        (status, Json(body)).into_response()
    }
}
