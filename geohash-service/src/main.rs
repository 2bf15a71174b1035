//! Geohash Service - HTTP microservice for geohash encoding and adjacency.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEOHASH_PORT` | HTTP server port | 8080 |
//! | `GEOHASH_DEFAULT_PRECISION` | Precision when `/encode` omits it | 12 |
//! | `GEOHASH_MAX_PRECISION` | Largest precision `/encode` accepts | 22 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /encode?lat=X&lon=Y&precision=N` - Encode a coordinate
//! - `GET /decode?geohash=H` - Bounding cell of a geohash
//! - `GET /neighbors?geohash=H` - The eight surrounding cells
//! - `GET /neighbor?geohash=H&direction=D` - One adjacent cell
//! - `GET /cell?geohash=H` - Cell as a GeoJSON Feature
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use geohash_service::{AppState, ServiceConfig};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geohash_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!(
        port = config.port,
        default_precision = config.default_precision,
        max_precision = config.max_precision,
        "Starting geohash service"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState { config });

    let app = geohash_service::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
