// Centralized error handling for the greeting service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by the greeting endpoint
#[derive(Error, Debug)]
pub enum GreetingError {
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for GreetingError {
    fn into_response(self) -> Response {
        let status = match &self {
            GreetingError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, self.to_string()).into_response()
    }
}
