//! Listing service.
//!
//! Owns the listing lifecycle: creation through starship class resolution, field updates,
//! activation changes via `listing_time`, and deletion. Listing queries only ever see active
//! listings; everything addressed by ID works regardless of state.

pub mod resolver;
pub mod validate;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::listing::{CreateListingDto, ListingDto, ListingQueryParams, UpdateListingDto},
    server::{
        data::listing::ListingRepository,
        error::{listing::ListingError, Error},
        model::listing::{ListingChanges, ListingState, NewListing},
        service::listing::resolver::StarshipResolver,
    },
};

/// Service for managing sale listings.
pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of ListingService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active listings.
    ///
    /// # Arguments
    /// - `params` - Optional starship class filter and sort order
    ///
    /// # Returns
    /// - `Ok(Vec<ListingDto>)` - Active listings, insertion order unless `ordering` is set
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_listings(&self, params: ListingQueryParams) -> Result<Vec<ListingDto>, Error> {
        let listing_repo = ListingRepository::new(self.db);

        let listings = listing_repo
            .list_active(params.starship_class.as_deref(), params.ordering)
            .await?;

        Ok(listings.into_iter().map(ListingDto::from).collect())
    }

    /// Retrieves a listing by ID, active or not.
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - Listing found
    /// - `Err(Error::ListingError(ListingError::NotFound))` - No listing has this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_listing(&self, id: i32) -> Result<ListingDto, Error> {
        let listing_repo = ListingRepository::new(self.db);

        let listing = listing_repo
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        Ok(listing.into())
    }

    /// Creates a listing for the starship class named in the request.
    ///
    /// Field validation and class resolution both happen before the insert, so a rejected
    /// request never writes a row.
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - The created listing, `ship_type` set to the resolved starship ID
    /// - `Err(Error::ValidationError)` - Invalid field or unknown starship class
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_listing(&self, listing: CreateListingDto) -> Result<ListingDto, Error> {
        let name = validate::name(listing.name)?;
        let price = validate::price(listing.price)?;
        let state = match listing.listing_time {
            Some(listing_time) => validate::listing_time(listing_time)?,
            None => ListingState::Active { listing_time: 1 },
        };

        let ship_type = StarshipResolver::new(self.db)
            .resolve(&listing.starship_class)
            .await?;

        let listing_repo = ListingRepository::new(self.db);
        let created = listing_repo
            .create(NewListing {
                name,
                ship_type,
                price,
                state,
            })
            .await?;

        tracing::debug!(
            "Created listing {} for starship {} ({})",
            created.id,
            ship_type,
            listing.starship_class
        );

        Ok(created.into())
    }

    /// Updates a listing, active or not.
    ///
    /// Absent fields keep their value. `starship_class` is ignored: the starship a listing
    /// refers to never changes after creation. Setting `listing_time` to `0` deactivates the
    /// listing, repeating it is harmless.
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - The updated listing
    /// - `Err(Error::ListingError(ListingError::NotFound))` - No listing has this ID
    /// - `Err(Error::ValidationError)` - A supplied field is invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_listing(
        &self,
        id: i32,
        changes: UpdateListingDto,
    ) -> Result<ListingDto, Error> {
        let changes = ListingChanges {
            name: changes.name.map(validate::name).transpose()?,
            price: changes.price.map(validate::price).transpose()?,
            state: changes
                .listing_time
                .map(validate::listing_time)
                .transpose()?,
        };

        let listing_repo = ListingRepository::new(self.db);

        let listing = listing_repo
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        if changes.is_empty() {
            return Ok(listing.into());
        }

        let updated = listing_repo.update(listing, changes).await?;

        Ok(updated.into())
    }

    /// Permanently deletes a listing, active or not.
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted
    /// - `Err(Error::ListingError(ListingError::NotFound))` - No listing has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_listing(&self, id: i32) -> Result<(), Error> {
        let listing_repo = ListingRepository::new(self.db);

        let result = listing_repo.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ListingError::NotFound(id).into());
        }

        Ok(())
    }
}
