use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster::RosterError;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub const FAILURE_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Intern not found")]
    InternNotFound,

    #[error("Referral code not found")]
    ReferralNotFound,

    #[error("Internal error: {source}")]
    Internal { source: RosterError, expose: bool },
}

impl AppError {
    pub fn internal(source: RosterError, expose: bool) -> Self {
        AppError::Internal { source, expose }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            AppError::InternNotFound | AppError::ReferralNotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            AppError::Internal { source, expose } => {
                error!("Request failed: {source}");

                failure_response(source.to_string(), expose)
            }
        }
    }
}

/// Detail is only attached outside production.
pub fn failure_response(detail: String, expose: bool) -> Response {
    let error = if expose { Value::String(detail) } else { json!({}) };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": FAILURE_MESSAGE, "error": error })),
    )
        .into_response()
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>, expose: bool) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Handler panicked: {detail}");

    failure_response(detail, expose)
}
