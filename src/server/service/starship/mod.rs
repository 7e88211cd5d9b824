//! Starship catalog service.
//!
//! The catalog is read-only through the API, rows only arrive through the import job.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::starship::{StarshipDto, StarshipQueryParams},
    server::{
        data::starship::StarshipRepository,
        error::{starship::StarshipError, Error},
    },
};

pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a starship by ID
    ///
    /// # Returns
    /// - `Ok(StarshipDto)` - Starship found
    /// - `Err(Error::StarshipError(StarshipError::NotFound))` - No starship has this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_starship(&self, id: i32) -> Result<StarshipDto, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        let starship = starship_repo
            .get_by_id(id)
            .await?
            .ok_or(StarshipError::NotFound(id))?;

        Ok(starship.into())
    }

    /// Lists the catalog in insertion order, optionally filtered by exact class name
    pub async fn list_starships(
        &self,
        params: StarshipQueryParams,
    ) -> Result<Vec<StarshipDto>, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        let starships = starship_repo
            .get_all(params.starship_class.as_deref())
            .await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }
}
