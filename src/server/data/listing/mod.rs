//! Listing repository.
//!
//! Visibility is split into two entry points: [`ListingRepository::list_active`] only ever
//! sees active listings, while [`ListingRepository::get_by_id`] addresses a listing in any
//! state and backs reads, updates, and deletes by ID.


use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    model::listing::ListingOrdering,
    server::model::{
        db::ListingModel,
        listing::{ListingChanges, NewListing},
    },
};

pub struct ListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, listing: NewListing) -> Result<ListingModel, DbErr> {
        let now = Utc::now().naive_utc();

        let listing = entity::listing::ActiveModel {
            name: ActiveValue::Set(listing.name),
            ship_type: ActiveValue::Set(listing.ship_type),
            price: ActiveValue::Set(listing.price),
            listing_time: ActiveValue::Set(listing.state.listing_time()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    /// Gets a listing by ID regardless of whether it is active
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ListingModel>, DbErr> {
        entity::prelude::Listing::find_by_id(id).one(self.db).await
    }

    /// Lists active listings
    ///
    /// # Arguments
    /// - `starship_class` - Only include listings whose starship has exactly this class
    /// - `ordering` - Sort key; ties and the unsorted case fall back to ascending ID
    pub async fn list_active(
        &self,
        starship_class: Option<&str>,
        ordering: Option<ListingOrdering>,
    ) -> Result<Vec<ListingModel>, DbErr> {
        let mut query =
            entity::prelude::Listing::find().filter(entity::listing::Column::ListingTime.gt(0));

        if let Some(starship_class) = starship_class {
            query = query
                .join(JoinType::InnerJoin, entity::listing::Relation::Starship.def())
                .filter(entity::starship::Column::StarshipClass.eq(starship_class));
        }

        query = match ordering {
            Some(ListingOrdering::PriceAsc) => query.order_by_asc(entity::listing::Column::Price),
            Some(ListingOrdering::PriceDesc) => {
                query.order_by_desc(entity::listing::Column::Price)
            }
            Some(ListingOrdering::ListingTimeAsc) => {
                query.order_by_asc(entity::listing::Column::ListingTime)
            }
            Some(ListingOrdering::ListingTimeDesc) => {
                query.order_by_desc(entity::listing::Column::ListingTime)
            }
            None => query,
        };

        query
            .order_by_asc(entity::listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies `changes` to `listing`, leaving `ship_type` untouched
    pub async fn update(
        &self,
        listing: ListingModel,
        changes: ListingChanges,
    ) -> Result<ListingModel, DbErr> {
        let mut listing: entity::listing::ActiveModel = listing.into();

        if let Some(name) = changes.name {
            listing.name = ActiveValue::Set(name);
        }
        if let Some(price) = changes.price {
            listing.price = ActiveValue::Set(price);
        }
        if let Some(state) = changes.state {
            listing.listing_time = ActiveValue::Set(state.listing_time());
        }
        listing.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        listing.update(self.db).await
    }

    /// Deletes a listing
    ///
    /// Returns OK regardless of the listing existing, check
    /// [`DeleteResult::rows_affected`] to know whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Listing::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
