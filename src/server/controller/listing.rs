use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        listing::{CreateListingDto, ListingDto, ListingQueryParams, UpdateListingDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath, ApiQuery},
        error::Error,
        model::app::AppState,
        service::listing::ListingService,
    },
};

pub static LISTING_TAG: &str = "listing";

/// List active listings
///
/// Inactive listings (`listing_time` of 0) are never included.
#[utoipa::path(
    get,
    path = "/listings",
    tag = LISTING_TAG,
    params(ListingQueryParams),
    responses(
        (status = 200, description = "Active listings", body = Vec<ListingDto>),
        (status = 400, description = "Unknown ordering or invalid query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_listings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListingQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listings = listing_service.list_listings(params).await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Get a listing by ID, active or not
#[utoipa::path(
    get,
    path = "/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing found", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listing = listing_service.get_listing(id).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Create a listing for a starship class
#[utoipa::path(
    post,
    path = "/listings",
    tag = LISTING_TAG,
    request_body = CreateListingDto,
    responses(
        (status = 201, description = "Listing created", body = ListingDto,
            headers(("location" = String, description = "URL of the created listing"))),
        (status = 400, description = "Unknown starship class or invalid body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    ApiJson(listing): ApiJson<CreateListingDto>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listing = listing_service.create_listing(listing).await?;
    let location = format!("/listings/{}", listing.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(listing),
    ))
}

/// Replace the editable fields of a listing
///
/// Absent fields keep their value and `starship_class` is ignored. A `listing_time` of 0
/// deactivates the listing, a positive value reactivates it.
#[utoipa::path(
    put,
    path = "/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = UpdateListingDto,
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<UpdateListingDto>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listing = listing_service.update_listing(id, changes).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Partially update a listing
///
/// Same semantics as `PUT`.
#[utoipa::path(
    patch,
    path = "/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = UpdateListingDto,
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_listing(
    state: State<AppState>,
    id: ApiPath<i32>,
    changes: ApiJson<UpdateListingDto>,
) -> Result<impl IntoResponse, Error> {
    update_listing(state, id, changes).await
}

/// Delete a listing, active or not
#[utoipa::path(
    delete,
    path = "/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    listing_service.delete_listing(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
