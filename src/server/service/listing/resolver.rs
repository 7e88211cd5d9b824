use sea_orm::ConnectionTrait;

use crate::server::{
    data::starship::StarshipRepository,
    error::{validation::ValidationError, Error},
};

/// Resolves the starship class name a client sends to the catalog ID a listing stores.
///
/// An unknown class is the client's mistake, so it surfaces as a validation error before
/// anything is written rather than as a foreign key failure from the database.
pub struct StarshipResolver<'a, C: ConnectionTrait> {
    starship_repo: StarshipRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> StarshipResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            starship_repo: StarshipRepository::new(db),
        }
    }

    /// Returns the ID of the first starship with this exact class name
    pub async fn resolve(&self, starship_class: &str) -> Result<i32, Error> {
        match self.starship_repo.get_by_class_name(starship_class).await? {
            Some(starship) => Ok(starship.id),
            None => Err(ValidationError::UnknownStarshipClass(starship_class.to_string()).into()),
        }
    }
}
