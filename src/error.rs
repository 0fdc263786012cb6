use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-time failure taxonomy shared by every service.
///
/// Rendered as a JSON `{"error": "..."}` body with a status code matching
/// the failure class, and logged at the point the response is built.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("received request with no symbol parameter, ignoring request")]
    MissingSymbol,
    #[error("unable to decode incoming body from POST request: {0}")]
    InvalidBody(String),
    #[error("no data found for {0}")]
    NotFound(String),
    #[error("error occurred requesting data from {service} service: {message}")]
    Dependency {
        service: &'static str,
        message: String,
    },
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn dependency(service: &'static str, message: impl ToString) -> Self {
        Self::Dependency {
            service,
            message: message.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::MissingSymbol | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Dependency { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!("{message}");
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
