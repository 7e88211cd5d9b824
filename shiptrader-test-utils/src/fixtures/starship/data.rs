//! Starship database fixtures.

use sea_orm::ActiveModelTrait;

use crate::{
    error::TestError,
    fixtures::starship::{factory, StarshipFixtures},
    model::StarshipModel,
};

impl<'a> StarshipFixtures<'a> {
    /// Insert a starship with randomized attributes.
    ///
    /// # Arguments
    /// - `starship_class` - Class name of the starship
    ///
    /// # Returns
    /// - `Ok(StarshipModel)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed, usually because the table is missing
    pub async fn insert_mock_starship(
        &mut self,
        starship_class: &str,
    ) -> Result<StarshipModel, TestError> {
        self.insert_starship(factory::mock_starship(starship_class))
            .await
    }

    /// Insert a fully specified starship active model.
    pub async fn insert_starship(
        &mut self,
        starship: entity::starship::ActiveModel,
    ) -> Result<StarshipModel, TestError> {
        Ok(starship.insert(&self.setup.db).await?)
    }
}
