//! End-to-end tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{http::StatusCode, Router};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use shiptrader::{
    model::{api::ErrorDto, listing::ListingDto, starship::StarshipDto},
    server::router::router,
};
use shiptrader_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{empty_request, get, json_request, read_json};

fn app(test: &TestContext) -> Router {
    router(test.to_app_state())
}

#[tokio::test]
/// Create, sort, deactivate, and fetch a listing through the HTTP API
async fn listing_lifecycle_scenario() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_starship_tables().build().await?;
    let x_wing = test.starship().insert_mock_starship("X-wing").await?;

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/listings",
            json!({"name": "L1", "price": 100, "starship_class": "X-wing"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let l1: ListingDto = read_json(resp).await;
    assert_eq!(l1.ship_type, x_wing.id);
    assert_eq!(l1.listing_time, 1);

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/listings",
            json!({"name": "L2", "price": 50, "starship_class": "X-wing"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(&test)
        .oneshot(get("/listings?ordering=-price"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listings: Vec<ListingDto> = read_json(resp).await;
    assert_eq!(listings[0].id, l1.id);

    let resp = app(&test)
        .oneshot(json_request(
            "PUT",
            &format!("/listings/{}", l1.id),
            json!({"listing_time": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test).oneshot(get("/listings")).await.unwrap();
    let listings: Vec<ListingDto> = read_json(resp).await;
    assert!(listings.iter().all(|l| l.id != l1.id));

    let resp = app(&test)
        .oneshot(get(&format!("/listings/{}", l1.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ListingDto = read_json(resp).await;
    assert_eq!(fetched.id, l1.id);
    assert_eq!(fetched.listing_time, 0);

    Ok(())
}

#[tokio::test]
/// Filter by class through the double underscore query key, combined with ordering
async fn filters_by_starship_class() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_starship_tables()
        .with_mock_starship("X-wing")
        .with_mock_starship("Y-wing")
        .with_mock_listing("X-wing", 300, 1)
        .with_mock_listing("Y-wing", 200, 1)
        .with_mock_listing("X-wing", 100, 1)
        .with_mock_listing("X-wing", 50, 0)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(get(
            "/listings?ship_type__starship_class=X-wing&ordering=price",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let listings: Vec<ListingDto> = read_json(resp).await;
    let prices: Vec<i64> = listings.iter().map(|l| l.price).collect();
    assert_eq!(prices, vec![100, 300]);

    Ok(())
}

#[tokio::test]
/// Empty query values are treated as if the parameter was left out
async fn ignores_empty_query_values() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_starship_tables()
        .with_mock_starship("X-wing")
        .with_mock_starship("Y-wing")
        .with_mock_listing("X-wing", 300, 1)
        .with_mock_listing("Y-wing", 200, 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(get("/listings?ordering="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let listings: Vec<ListingDto> = read_json(resp).await;
    assert_eq!(listings.len(), 2);

    let resp = app(&test)
        .oneshot(get("/listings?ship_type__starship_class=&ordering=price"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let listings: Vec<ListingDto> = read_json(resp).await;
    let prices: Vec<i64> = listings.iter().map(|l| l.price).collect();
    assert_eq!(prices, vec![200, 300]);

    Ok(())
}

#[tokio::test]
/// Unknown ordering keys are a 400, not a silently unsorted list
async fn rejects_unknown_ordering() -> Result<(), TestError> {
    let test = TestBuilder::new().with_starship_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/listings?ordering=name"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let _: ErrorDto = read_json(resp).await;

    Ok(())
}

#[tokio::test]
/// Malformed JSON bodies get the API's error shape
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_starship_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/listings",
            json!({"name": "L1", "price": "a lot", "starship_class": "X-wing"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

#[tokio::test]
/// Non-numeric IDs in the path are a 400
async fn rejects_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_starship_tables().build().await?;

    let resp = app(&test).oneshot(get("/listings/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// A ship_type key in an update body is ignored
async fn ignores_ship_type_in_update() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_starship_tables().build().await?;
    let x_wing = test.starship().insert_mock_starship("X-wing").await?;
    let y_wing = test.starship().insert_mock_starship("Y-wing").await?;
    let listing = test.listing().insert_mock_listing(x_wing.id, 100, 1).await?;

    let resp = app(&test)
        .oneshot(json_request(
            "PATCH",
            &format!("/listings/{}", listing.id),
            json!({"ship_type": y_wing.id, "price": 120}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ListingDto = read_json(resp).await;
    assert_eq!(updated.ship_type, x_wing.id);
    assert_eq!(updated.price, 120);

    Ok(())
}

#[tokio::test]
/// The catalog only accepts reads
async fn catalog_writes_are_not_allowed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_starship_tables().build().await?;
    let starship = test.starship().insert_mock_starship("X-wing").await?;

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/starships",
            json!({"starship_class": "Y-wing"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    for method in ["PUT", "PATCH", "DELETE"] {
        let resp = app(&test)
            .oneshot(empty_request(method, &format!("/starships/{}", starship.id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }

    let count = entity::prelude::Starship::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
/// Trailing slashes reach the same handlers
async fn ignores_trailing_slash() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_starship_tables().build().await?;
    let starship = test.starship().insert_mock_starship("X-wing").await?;

    let resp = app(&test).oneshot(get("/starships/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let starships: Vec<StarshipDto> = read_json(resp).await;
    assert_eq!(starships.len(), 1);

    let resp = app(&test)
        .oneshot(get(&format!("/starships/{}/", starship.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/listings/",
            json!({"name": "L1", "price": 1, "starship_class": "X-wing"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// DELETE answers 204 and a second DELETE 404
async fn deletes_listing_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_starship_tables()
        .with_mock_starship("X-wing")
        .with_mock_listing("X-wing", 100, 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(empty_request("DELETE", "/listings/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app(&test)
        .oneshot(empty_request("DELETE", "/listings/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// The OpenAPI document lists both resources
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_starship_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = read_json(resp).await;
    assert!(doc["paths"]["/listings"].is_object());
    assert!(doc["paths"]["/listings/{id}"]["patch"].is_object());
    assert!(doc["paths"]["/starships/{id}"]["get"].is_object());

    Ok(())
}
