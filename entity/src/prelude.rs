pub use super::listing::Entity as Listing;
pub use super::starship::Entity as Starship;
