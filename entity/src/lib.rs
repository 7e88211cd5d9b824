//! SeaORM entities for the shiptrader database.

pub mod prelude;

pub mod listing;
pub mod starship;
