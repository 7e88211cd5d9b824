//! Factories for starship rows and remote feed payloads.
//!
//! Numeric attributes of generated rows are randomized within realistic bounds so tests
//! never depend on specific catalog values unless they set them explicitly.

use chrono::Utc;
use rand::Rng;
use sea_orm::ActiveValue;
use serde_json::{json, Value};

/// Create a starship active model with randomized attributes.
///
/// # Arguments
/// - `starship_class` - Class name to give the starship
///
/// # Returns
/// - `entity::starship::ActiveModel` - Unsaved starship row
pub fn mock_starship(starship_class: &str) -> entity::starship::ActiveModel {
    let mut rng = rand::rng();
    let now = Utc::now().naive_utc();

    entity::starship::ActiveModel {
        starship_class: ActiveValue::Set(starship_class.to_string()),
        manufacturer: ActiveValue::Set(format!("{starship_class} Shipyards")),
        length: ActiveValue::Set(rng.random_range(0.1..100.7)),
        hyperdrive_rating: ActiveValue::Set(rng.random_range(0.1..50.7)),
        cargo_capacity: ActiveValue::Set(rng.random_range(1..500_000)),
        crew: ActiveValue::Set(rng.random_range(1..10)),
        passengers: ActiveValue::Set(rng.random_range(1..50)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create a starship record as the remote feed reports it.
///
/// Numbers are encoded as strings, the way the upstream feed serves them.
pub fn remote_starship(starship_class: &str) -> Value {
    json!({
        "name": format!("{starship_class} prototype"),
        "model": starship_class,
        "starship_class": starship_class,
        "manufacturer": "Kuat Drive Yards",
        "length": "1,600",
        "hyperdrive_rating": "2.0",
        "cargo_capacity": "36000000",
        "crew": "47,060",
        "passengers": "n/a",
        "url": "https://swapi.example/api/starships/3/"
    })
}

/// Create a starship feed record with every numeric attribute reported as unknown.
pub fn unknown_remote_starship(starship_class: &str) -> Value {
    json!({
        "starship_class": starship_class,
        "manufacturer": "unknown",
        "length": "unknown",
        "hyperdrive_rating": "unknown",
        "cargo_capacity": "unknown",
        "crew": "unknown",
        "passengers": "unknown"
    })
}

/// Wrap feed records in a paginated feed envelope.
///
/// # Arguments
/// - `results` - Records on this page
/// - `next` - Absolute URL of the next page, `None` on the last page
/// - `count` - Total number of records across all pages
pub fn starship_page(results: Vec<Value>, next: Option<String>, count: u64) -> Value {
    json!({
        "count": count,
        "next": next,
        "previous": null,
        "results": results
    })
}
