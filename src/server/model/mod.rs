//! Server-side models shared between services and repositories.

pub mod app;
pub mod db;
pub mod listing;
pub mod starship;
