//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main shiptrader crate.

/// Type alias for a starship catalog row.
pub type StarshipModel = entity::starship::Model;

/// Type alias for a sale listing row.
pub type ListingModel = entity::listing::Model;
