//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI descriptions, and Swagger UI is
//! served at `/api/docs`. Trailing slashes on API paths are insignificant: `/listings/` and
//! `/listings` reach the same handler.

use axum::Router;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Collects every API endpoint and its OpenAPI description.
///
/// # Registered Endpoints
/// - `GET /starships` - List the catalog, optionally filtered by class
/// - `GET /starships/{id}` - Get one starship
/// - `GET /listings` - List active listings with optional filter and ordering
/// - `POST /listings` - Create a listing from a starship class name
/// - `GET /listings/{id}` - Get one listing in any state
/// - `PUT|PATCH /listings/{id}` - Update a listing in any state
/// - `DELETE /listings/{id}` - Delete a listing in any state
///
/// Catalog paths only route `GET`, so writes to them answer 405 Method Not Allowed.
pub fn api_routes() -> OpenApiRouter<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Shiptrader", description = "Starship catalog and sale listings API"), tags(
        (name = controller::starship::STARSHIP_TAG, description = "Read-only starship catalog"),
        (name = controller::listing::LISTING_TAG, description = "Starship sale listings"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::starship::list_starships))
        .routes(routes!(controller::starship::get_starship))
        .routes(routes!(
            controller::listing::list_listings,
            controller::listing::create_listing
        ))
        .routes(routes!(
            controller::listing::get_listing,
            controller::listing::update_listing,
            controller::listing::partial_update_listing,
            controller::listing::delete_listing
        ))
}

/// Builds the complete application router.
///
/// Swagger UI is matched first; it redirects `/api/docs` to `/api/docs/` itself, so it must
/// not see trailing slashes trimmed. Every other request falls through to the API routes
/// behind the trailing slash normalization.
///
/// # Arguments
/// - `state` - Shared state handed to every API handler
///
/// # Returns
/// A `Router` ready to be passed to `axum::serve`
pub fn router(state: AppState) -> Router {
    let (api, openapi) = api_routes().split_for_parts();

    let api = NormalizePathLayer::trim_trailing_slash().layer(api.with_state(state));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .fallback_service(api)
        .layer(TraceLayer::new_for_http())
}
