//! Extractors that reject malformed input with the API's own error body.
//!
//! axum's stock `Json`, `Query`, and `Path` reject with plain-text responses and assorted
//! status codes. These wrappers route the rejection through [`Error`] so every malformed
//! request gets a 400 with an `ErrorDto`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
