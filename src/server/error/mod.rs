//! Error types for the shiptrader server.
//!
//! Every fallible server operation returns [`Error`]. Domain errors live in their own
//! submodules and convert into [`Error`] through `#[from]`, so services and handlers can use
//! `?` freely. The `IntoResponse` implementations decide which errors are the client's fault
//! (4xx with a descriptive [`ErrorDto`]) and which are ours (logged, generic 500).

pub mod config;
pub mod import;
pub mod listing;
pub mod starship;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, import::ImportError, listing::ListingError,
        starship::StarshipError, validation::ValidationError,
    },
};

/// Main error type for the shiptrader server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Not found errors for listings and starships
/// - Validation errors for request bodies, query strings, and path parameters
/// - Import errors raised while paging through the remote starship feed
/// - External library errors (database, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Listing lookup error.
    #[error(transparent)]
    ListingError(#[from] ListingError),
    /// Starship catalog lookup error.
    #[error(transparent)]
    StarshipError(#[from] StarshipError),
    /// Starship import job error.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Invalid client input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 404 Not Found - For missing listings or starships
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ListingError(err) => err.into_response(),
            Self::StarshipError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
