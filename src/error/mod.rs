use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is required")]
    ConfigurationMissing(String),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch profile: {0}")]
    ProfileQuery(String),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gave up after {attempts} attempts with {generated} unique codes")]
    CodeSpaceExhausted { generated: usize, attempts: usize },

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Collapses any store-side failure into the message the lookup reports.
    pub fn into_profile_query(self) -> Self {
        match self {
            Self::ProfileQuery(_) => self,
            other => Self::ProfileQuery(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
