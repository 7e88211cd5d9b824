//! Business logic services.
//!
//! Services sit between the controllers and the repositories: they validate input, resolve
//! references, map rows to API DTOs, and turn missing rows into not found errors.

pub mod import;
pub mod listing;
pub mod starship;
