//! Geohash Service Library
//!
//! HTTP handlers, router and configuration for the geohash service.
//! This library is used by both the geohash-service binary and integration tests.

pub mod config;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::ServiceConfig;

/// Application state shared across handlers.
pub struct AppState {
    /// Runtime settings.
    pub config: ServiceConfig,
}

// Re-export commonly used types for convenience
pub use handlers::{
    DecodeResponse, EncodeResponse, ErrorResponse, HealthResponse, NeighborResponse,
    NeighborsResponse,
};

/// OpenAPI documentation for the geohash service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geohash Service",
        version = "0.1.0",
        description = "REST API for encoding coordinates as geohashes, decoding them and finding adjacent cells.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::encode,
        handlers::decode,
        handlers::neighbors,
        handlers::neighbor,
        handlers::cell,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::EncodeQuery,
            handlers::GeohashQuery,
            handlers::NeighborQuery,
            handlers::EncodeResponse,
            handlers::IntervalResponse,
            handlers::DecodeResponse,
            handlers::NeighborsResponse,
            handlers::NeighborResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "geohash", description = "Geohash endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// Build the service router with all routes and the Swagger UI.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/encode", get(handlers::encode))
        .route("/decode", get(handlers::decode))
        .route("/neighbors", get(handlers::neighbors))
        .route("/neighbor", get(handlers::neighbor))
        .route("/cell", get(handlers::cell))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
