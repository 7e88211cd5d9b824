
use super::*;

use shiptrader_test_utils::prelude::*;

fn new_starship(starship_class: &str) -> NewStarship {
    NewStarship {
        starship_class: starship_class.to_string(),
        manufacturer: "Kuat Drive Yards".to_string(),
        length: 1600.0,
        hyperdrive_rating: 2.0,
        cargo_capacity: 36_000_000,
        crew: 47_060,
        passengers: 0,
    }
}
