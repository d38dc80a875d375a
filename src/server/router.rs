//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their OpenAPI specifications. Swagger UI is served
//! at `/api/docs` and the raw document at `/api/docs/openapi.json`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, util::request_log::log_request};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/characters` - Search characters with cache, remote and local fallback
/// - `GET /api/characters/local` - List stored characters
/// - `GET /api/characters/{id}` - Get a stored character
///
/// Every request passes through the request log middleware.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Citadel", description = "Citadel character catalog API"), tags(
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::character::search_characters))
        .routes(routes!(controller::character::list_local_characters))
        .routes(routes!(controller::character::get_character))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn(log_request))
}
