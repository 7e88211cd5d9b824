use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A starship class from the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub starship_class: String,
    pub manufacturer: String,
    pub length: f64,
    pub hyperdrive_rating: f64,
    pub cargo_capacity: i64,
    pub crew: i32,
    pub passengers: i32,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            starship_class: starship.starship_class,
            manufacturer: starship.manufacturer,
            length: starship.length,
            hyperdrive_rating: starship.hyperdrive_rating,
            cargo_capacity: starship.cargo_capacity,
            crew: starship.crew,
            passengers: starship.passengers,
        }
    }
}

/// Query parameters accepted when listing the catalog
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StarshipQueryParams {
    /// Only return starships with exactly this class name
    pub starship_class: Option<String>,
}
