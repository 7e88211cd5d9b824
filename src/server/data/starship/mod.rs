//! Starship catalog repository.

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{db::StarshipModel, starship::NewStarship};

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find_by_id(id).one(self.db).await
    }

    /// Finds the starship with the given class name
    ///
    /// Class names are not unique, the row with the lowest ID wins.
    pub async fn get_by_class_name(
        &self,
        starship_class: &str,
    ) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .filter(entity::starship::Column::StarshipClass.eq(starship_class))
            .order_by_asc(entity::starship::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists the catalog in insertion order, optionally restricted to one class name
    pub async fn get_all(&self, starship_class: Option<&str>) -> Result<Vec<StarshipModel>, DbErr> {
        let mut query = entity::prelude::Starship::find();

        if let Some(starship_class) = starship_class {
            query = query.filter(entity::starship::Column::StarshipClass.eq(starship_class));
        }

        query
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a row whose attributes all equal `starship`
    pub async fn find_by_attributes(
        &self,
        starship: &NewStarship,
    ) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .filter(entity::starship::Column::StarshipClass.eq(starship.starship_class.as_str()))
            .filter(entity::starship::Column::Manufacturer.eq(starship.manufacturer.as_str()))
            .filter(entity::starship::Column::Length.eq(starship.length))
            .filter(entity::starship::Column::HyperdriveRating.eq(starship.hyperdrive_rating))
            .filter(entity::starship::Column::CargoCapacity.eq(starship.cargo_capacity))
            .filter(entity::starship::Column::Crew.eq(starship.crew))
            .filter(entity::starship::Column::Passengers.eq(starship.passengers))
            .order_by_asc(entity::starship::Column::Id)
            .one(self.db)
            .await
    }

    /// Inserts `starship` unless an identical row exists
    ///
    /// An identical row only has its `updated_at` touched.
    ///
    /// # Returns
    /// - `Ok((model, true))` - A new row was inserted
    /// - `Ok((model, false))` - An identical row already existed
    pub async fn upsert(&self, starship: NewStarship) -> Result<(StarshipModel, bool), DbErr> {
        let now = Utc::now().naive_utc();

        if let Some(existing) = self.find_by_attributes(&starship).await? {
            let mut existing: entity::starship::ActiveModel = existing.into();
            existing.updated_at = ActiveValue::Set(now);

            return Ok((existing.update(self.db).await?, false));
        }

        let created = entity::starship::ActiveModel {
            starship_class: ActiveValue::Set(starship.starship_class),
            manufacturer: ActiveValue::Set(starship.manufacturer),
            length: ActiveValue::Set(starship.length),
            hyperdrive_rating: ActiveValue::Set(starship.hyperdrive_rating),
            cargo_capacity: ActiveValue::Set(starship.cargo_capacity),
            crew: ActiveValue::Set(starship.crew),
            passengers: ActiveValue::Set(starship.passengers),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((created, true))
    }
}
