//! Server application core modules.
//!
//! This module contains everything that runs behind the HTTP listener: configuration, the
//! axum router and controllers, the listing and catalog services, the starship import job,
//! and the sea-orm repositories they share.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
