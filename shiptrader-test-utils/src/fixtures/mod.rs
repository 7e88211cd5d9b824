//! Test fixture modules for database and HTTP mock creation.
//!
//! - `starship` - catalog rows, feed records, and mock feed endpoints
//! - `listing` - sale listing rows

pub mod listing;
pub mod starship;
