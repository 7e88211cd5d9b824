//! Starship catalog and sale listing service.
//!
//! `model` holds the wire types exchanged over HTTP; `server` holds everything that runs on
//! the server: configuration, the HTTP surface, business services, and data access.

pub mod model;
pub mod server;
