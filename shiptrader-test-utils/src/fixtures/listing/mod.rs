//! Listing database fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::ListingModel, TestContext};

impl TestContext {
    pub fn listing<'a>(&'a mut self) -> ListingFixtures<'a> {
        ListingFixtures { setup: self }
    }
}

pub struct ListingFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> ListingFixtures<'a> {
    /// Insert a listing referencing an existing starship row.
    ///
    /// # Arguments
    /// - `ship_type` - Database ID of the referenced starship
    /// - `price` - Asking price
    /// - `listing_time` - Activation counter, `0` inserts an inactive listing
    ///
    /// # Returns
    /// - `Ok(ListingModel)` - The inserted row, named `Listing <n>` after its price
    /// - `Err(TestError::DbErr)` - Insert failed (missing table or unknown starship)
    pub async fn insert_mock_listing(
        &mut self,
        ship_type: i32,
        price: i64,
        listing_time: i32,
    ) -> Result<ListingModel, TestError> {
        self.insert_listing(&format!("Listing {price}"), ship_type, price, listing_time)
            .await
    }

    /// Insert a listing with an explicit name.
    pub async fn insert_listing(
        &mut self,
        name: &str,
        ship_type: i32,
        price: i64,
        listing_time: i32,
    ) -> Result<ListingModel, TestError> {
        let now = Utc::now().naive_utc();

        let listing = entity::listing::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ship_type: ActiveValue::Set(ship_type),
            price: ActiveValue::Set(price),
            listing_time: ActiveValue::Set(listing_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(listing.insert(&self.setup.db).await?)
    }
}
