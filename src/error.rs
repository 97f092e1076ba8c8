//! Error type shared by all handlers and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One entry of an `{"errors": [...]}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(param: &str, msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            param: Some(param.to_string()),
        }
    }

    /// An error not tied to any input field.
    pub fn general(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            param: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("user already exists")]
    UserExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no token supplied")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("user not found")]
    UserNotFound,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn errors_body(errors: Vec<FieldError>) -> Json<serde_json::Value> {
    Json(json!({ "errors": errors }))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, errors_body(errors)).into_response()
            }
            AppError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                errors_body(vec![FieldError::general("Malformed request body")]),
            )
                .into_response(),
            AppError::UserExists => (
                StatusCode::BAD_REQUEST,
                errors_body(vec![FieldError::general("User already exists")]),
            )
                .into_response(),
            AppError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                errors_body(vec![FieldError::general("Invalid Credentials")]),
            )
                .into_response(),
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": "No token, authorization denied" })),
            )
                .into_response(),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": "Token is not valid" })),
            )
                .into_response(),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "msg": "User not found" })),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
