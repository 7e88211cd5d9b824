use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problems with the process environment, reported at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    /// `import-starships` was run without `--endpoint` and without `STARSHIP_FEED_URL`.
    #[error("No starship feed endpoint given, pass --endpoint or set STARSHIP_FEED_URL")]
    MissingFeedEndpoint,
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
