//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one table each. They accept any `ConnectionTrait`
//! so callers can pass either the pooled connection or an open transaction.

pub mod listing;
pub mod starship;
