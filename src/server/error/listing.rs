use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Listing {0} not found")]
    NotFound(i32),
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(self.to_string()))).into_response()
            }
        }
    }
}
