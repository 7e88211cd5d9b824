use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures of the starship import job.
///
/// Any of these aborts the run. Pages committed before the failing one stay committed.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid starship feed endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Starship feed {endpoint} returned an unexpected body: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
    #[error("Starship feed {endpoint} responded with status {status}")]
    UpstreamStatus { endpoint: String, status: u16 },
    #[error("Starship feed record has an invalid {field}: {value:?}")]
    InvalidRecord { field: &'static str, value: String },
    #[error("Starship feed page {0} was already visited, refusing to loop")]
    PageCycle(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
