//! HTTP controller endpoints for the shiptrader API.
//!
//! Handlers stay thin: extract input, call a service, shape the response. Every handler is
//! annotated for utoipa so the router can assemble the OpenAPI document.

pub mod listing;
pub mod starship;
pub mod util;
