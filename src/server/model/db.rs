//! Database model type aliases.
//!
//! Short names for the sea-orm models generated in the `entity` crate, so signatures across
//! the server read in domain terms.

/// A starship catalog row.
///
/// # Fields (from `entity::starship::Model`)
/// - `id` - Primary key
/// - `starship_class` - Class name, not unique
/// - `manufacturer` - Manufacturer as reported by the feed
/// - `length`, `hyperdrive_rating` - Non-negative reals, zero when unknown
/// - `cargo_capacity`, `crew`, `passengers` - Non-negative integers, zero when unknown
/// - `created_at`, `updated_at` - Bookkeeping timestamps, never exposed by the API
pub type StarshipModel = entity::starship::Model;

/// A sale listing row.
///
/// # Fields (from `entity::listing::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `ship_type` - Foreign key to the listed starship
/// - `price` - Asking price in whole currency units
/// - `listing_time` - Activation counter, active while above zero
/// - `created_at`, `updated_at` - Bookkeeping timestamps, never exposed by the API
pub type ListingModel = entity::listing::Model;
