use std::fmt;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::ai::GeneratorError;
use crate::services::provider::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Flight,
    Hotel,
    Vehicle,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchKind::Flight => "Flight",
            SearchKind::Hotel => "Hotel",
            SearchKind::Vehicle => "Vehicle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{kind} API error: {error}")]
    Provider {
        kind: SearchKind,
        #[source]
        error: ProviderError,
    },

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("invalid request: {0}")]
    Validation(String),
}

impl AppError {
    pub fn provider(kind: SearchKind) -> impl FnOnce(ProviderError) -> AppError {
        move |error| AppError::Provider { kind, error }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Provider { error, .. } => StatusCode::from_u16(error.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Generator(GeneratorError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Generator(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<axum_extra::extract::QueryRejection> for AppError {
    fn from(rejection: axum_extra::extract::QueryRejection) -> Self {
        AppError::Validation(rejection.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = serde_json::json!({
            "status": status.as_u16(),
            "detail": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
