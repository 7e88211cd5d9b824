use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        starship::{StarshipDto, StarshipQueryParams},
    },
    server::{
        controller::util::extract::{ApiPath, ApiQuery},
        error::Error,
        model::app::AppState,
        service::starship::StarshipService,
    },
};

pub static STARSHIP_TAG: &str = "starship";

/// List the starship catalog
///
/// Writes to the catalog are not routed, so any other method answers 405.
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    params(StarshipQueryParams),
    responses(
        (status = 200, description = "Catalog in insertion order", body = Vec<StarshipDto>),
        (status = 400, description = "Invalid query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_starships(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<StarshipQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let starship_service = StarshipService::new(&state.db);

    let starships = starship_service.list_starships(params).await?;

    Ok((StatusCode::OK, Json(starships)))
}

/// Get a starship by ID
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Starship found", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let starship_service = StarshipService::new(&state.db);

    let starship = starship_service.get_starship(id).await?;

    Ok((StatusCode::OK, Json(starship)))
}
