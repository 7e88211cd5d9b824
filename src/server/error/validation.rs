use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, server::error::Error};

/// Client input that cannot be accepted.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unknown starship class: {0:?}")]
    UnknownStarshipClass(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("{field} must not be negative")]
    NegativeValue { field: &'static str },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the offending request field, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::UnknownStarshipClass(_) => Some("starship_class"),
            Self::NegativeValue { field }
            | Self::EmptyField { field }
            | Self::TooLong { field, .. } => Some(*field),
            Self::InvalidBody(_) | Self::InvalidQuery(_) | Self::InvalidPath(_) => None,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let body = match self.field() {
            Some(field) => ErrorDto::for_field(self.to_string(), field),
            None => ErrorDto::new(self.to_string()),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::InvalidQuery(rejection.body_text()).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidPath(rejection.body_text()).into()
    }
}
