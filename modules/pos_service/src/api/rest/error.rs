//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::PosError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 400 carrying `detail`
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(detail)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: PosError) -> Problem {
    match error {
        PosError::Validation { message } => Problem::bad_request(message),

        PosError::NotFound { resource, message } => Problem::new(
            StatusCode::NOT_FOUND,
            format!("{} Not Found", capitalize(resource)),
        )
        .with_detail(message),

        err @ PosError::ReferentialIntegrity { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Unknown Product").with_detail(err.to_string())
        }

        PosError::InvalidCredentials => Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized")
            .with_detail(PosError::InvalidCredentials.to_string()),

        err @ (PosError::CacheUnavailable { .. }
        | PosError::ImageUnavailable { .. }
        | PosError::Store { .. }) => {
            tracing::error!(error = %err, "Request failed");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail(err.to_string())
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
