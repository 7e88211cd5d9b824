use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use shiptrader::{
    model::{
        api::ErrorDto,
        listing::{
            CreateListingDto, ListingDto, ListingOrdering, ListingQueryParams, UpdateListingDto,
        },
    },
    server::controller::{
        listing::{
            create_listing, delete_listing, get_listing, list_listings, partial_update_listing,
            update_listing,
        },
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};
use shiptrader_test_utils::prelude::*;

use crate::util::read_json;

fn create_dto(name: &str, price: i64, starship_class: &str) -> CreateListingDto {
    CreateListingDto {
        name: name.to_string(),
        price,
        starship_class: starship_class.to_string(),
        listing_time: None,
    }
}

mod create_listing_tests {
    use super::*;

    #[tokio::test]
    /// Expect 201 with a Location header and the resolved ship_type
    async fn creates_listing() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_starship_tables().build().await?;
        let starship = test.starship().insert_mock_starship("Starfighter").await?;

        let result = create_listing(
            State(test.to_app_state()),
            ApiJson(create_dto("Speedy", 1000, "Starfighter")),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let listing: ListingDto = read_json(resp).await;
        assert_eq!(listing.ship_type, starship.id);
        assert_eq!(listing.listing_time, 1);
        assert_eq!(location, Some(format!("/listings/{}", listing.id)));

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 naming the starship_class field, and no row written
    async fn rejects_unknown_class() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_starship_tables()
            .with_mock_starship("Starfighter")
            .build()
            .await?;

        let result = create_listing(
            State(test.to_app_state()),
            ApiJson(create_dto("Ghost", 1000, "Dreadnought")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorDto = read_json(resp).await;
        assert_eq!(error.field.as_deref(), Some("starship_class"));

        let count = entity::prelude::Listing::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }
}

mod list_listings_tests {
    use super::*;

    #[tokio::test]
    /// Expect 200 with active listings only
    async fn lists_active_listings() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_starship_tables()
            .with_mock_starship("Starfighter")
            .with_mock_listing("Starfighter", 100, 1)
            .with_mock_listing("Starfighter", 200, 0)
            .build()
            .await?;

        let result = list_listings(
            State(test.to_app_state()),
            ApiQuery(ListingQueryParams::default()),
        )
        .await;

        assert!(result.is_ok());
        let listings: Vec<ListingDto> = read_json(result.unwrap().into_response()).await;
        assert_eq!(listings.len(), 1);
        assert!(listings.iter().all(|l| l.listing_time > 0));

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 sorted descending by price
    async fn sorts_descending() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_starship_tables()
            .with_mock_starship("Starfighter")
            .with_mock_listing("Starfighter", 100, 1)
            .with_mock_listing("Starfighter", 300, 1)
            .with_mock_listing("Starfighter", 200, 1)
            .build()
            .await?;

        let result = list_listings(
            State(test.to_app_state()),
            ApiQuery(ListingQueryParams {
                ordering: Some(ListingOrdering::PriceDesc),
                starship_class: None,
            }),
        )
        .await;

        assert!(result.is_ok());
        let listings: Vec<ListingDto> = read_json(result.unwrap().into_response()).await;
        let prices: Vec<i64> = listings.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![300, 200, 100]);

        Ok(())
    }
}

mod get_listing_tests {
    use super::*;

    #[tokio::test]
    /// Expect 200 for an inactive listing
    async fn gets_inactive_listing() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_starship_tables().build().await?;
        let starship = test.starship().insert_mock_starship("Starfighter").await?;
        let listing = test.listing().insert_mock_listing(starship.id, 100, 0).await?;

        let result = get_listing(State(test.to_app_state()), ApiPath(listing.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a missing listing
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_starship_tables().build().await?;

        let result = get_listing(State(test.to_app_state()), ApiPath(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let error: ErrorDto = read_json(resp).await;
        assert!(error.field.is_none());

        Ok(())
    }
}

mod update_listing_tests {
    use super::*;

    #[tokio::test]
    /// Expect 200 with ship_type unchanged despite another class being supplied
    async fn keeps_ship_type() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_starship_tables().build().await?;
        let starship = test.starship().insert_mock_starship("Starfighter").await?;
        test.starship().insert_mock_starship("Corvette").await?;
        let listing = test.listing().insert_mock_listing(starship.id, 100, 1).await?;

        let result = update_listing(
            State(test.to_app_state()),
            ApiPath(listing.id),
            ApiJson(UpdateListingDto {
                price: Some(90),
                starship_class: Some("Corvette".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_ok());
        let updated: ListingDto = read_json(result.unwrap().into_response()).await;
        assert_eq!(updated.price, 90);
        assert_eq!(updated.ship_type, starship.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 when PATCH deactivates an inactive listing again
    async fn patch_deactivates_idempotently() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_starship_tables().build().await?;
        let starship = test.starship().insert_mock_starship("Starfighter").await?;
        let listing = test.listing().insert_mock_listing(starship.id, 100, 0).await?;

        let result = partial_update_listing(
            State(test.to_app_state()),
            ApiPath(listing.id),
            ApiJson(UpdateListingDto {
                listing_time: Some(0),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: ListingDto = read_json(resp).await;
        assert_eq!(updated.listing_time, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a missing listing
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_starship_tables().build().await?;

        let result = update_listing(
            State(test.to_app_state()),
            ApiPath(77),
            ApiJson(UpdateListingDto::default()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_listing_tests {
    use super::*;

    #[tokio::test]
    /// Expect 204 and the row gone
    async fn deletes_listing() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_starship_tables().build().await?;
        let starship = test.starship().insert_mock_starship("Starfighter").await?;
        let listing = test.listing().insert_mock_listing(starship.id, 100, 1).await?;

        let result = delete_listing(State(test.to_app_state()), ApiPath(listing.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let count = entity::prelude::Listing::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a missing listing
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_starship_tables().build().await?;

        let result = delete_listing(State(test.to_app_state()), ApiPath(3)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
