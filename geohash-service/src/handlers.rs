//! HTTP request handlers for the geohash service.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use geohash::{Direction, GeohashError, Interval};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Query parameters for the encode endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EncodeQuery {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,
    /// Number of characters in the geohash. Defaults to the service setting.
    pub precision: Option<i64>,
}

/// Query parameters for endpoints taking a geohash.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GeohashQuery {
    /// Geohash string (case-insensitive).
    pub geohash: String,
}

/// Query parameters for the single-neighbor endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NeighborQuery {
    /// Geohash string (case-insensitive).
    pub geohash: String,
    /// One of `top`, `right`, `bottom`, `left` (or `north`, `east`, `south`, `west`).
    pub direction: String,
}

/// Successful encode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeResponse {
    /// Encoded geohash.
    pub geohash: String,
    /// Latitude encoded.
    pub lat: f64,
    /// Longitude encoded.
    pub lon: f64,
    /// Number of characters used.
    pub precision: usize,
}

/// Extent of a cell along one axis.
#[derive(Debug, Serialize, ToSchema)]
pub struct IntervalResponse {
    pub min: f64,
    pub max: f64,
    pub center: f64,
    /// Half the interval width.
    pub error: f64,
}

impl From<Interval> for IntervalResponse {
    fn from(interval: Interval) -> Self {
        Self {
            min: interval.min,
            max: interval.max,
            center: interval.center,
            error: interval.error,
        }
    }
}

/// Successful decode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecodeResponse {
    /// Geohash decoded (lowercase).
    pub geohash: String,
    /// Latitude extent.
    pub lat: IntervalResponse,
    /// Longitude extent.
    pub lon: IntervalResponse,
}

/// The eight cells around a geohash. `null` marks a slot past the map edge.
#[derive(Debug, Serialize, ToSchema)]
pub struct NeighborsResponse {
    pub geohash: String,
    pub top: Option<String>,
    pub top_right: Option<String>,
    pub right: Option<String>,
    pub bottom_right: Option<String>,
    pub bottom: Option<String>,
    pub bottom_left: Option<String>,
    pub left: Option<String>,
    pub top_left: Option<String>,
}

/// A single neighbor. `neighbor` is `null` past the map edge.
#[derive(Debug, Serialize, ToSchema)]
pub struct NeighborResponse {
    pub geohash: String,
    pub direction: String,
    pub neighbor: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Encode a coordinate as a geohash.
///
/// # Returns
///
/// - `200 OK` with the geohash on success
/// - `400 Bad Request` if the coordinate or precision is invalid
#[utoipa::path(
    get,
    path = "/encode",
    tag = "geohash",
    params(EncodeQuery),
    responses(
        (status = 200, description = "Geohash of the coordinate", body = EncodeResponse),
        (status = 400, description = "Invalid coordinate or precision", body = ErrorResponse)
    )
)]
pub async fn encode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodeQuery>,
) -> impl IntoResponse {
    tracing::debug!(
        lat = query.lat,
        lon = query.lon,
        precision = ?query.precision,
        "Encode query"
    );

    let precision = match query.precision {
        Some(requested) => match geohash::checked_precision(requested) {
            Ok(precision) => precision,
            Err(e) => return error_response(&format!("precision={}", requested), e),
        },
        None => state.config.default_precision,
    };

    if precision > state.config.max_precision {
        tracing::warn!(
            precision,
            max_precision = state.config.max_precision,
            "Precision above limit"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "Invalid precision: {} (maximum is {})",
                    precision, state.config.max_precision
                ),
            }),
        )
            .into_response();
    }

    match geohash::encode(query.lat, query.lon, precision) {
        Ok(hash) => {
            tracing::info!(lat = query.lat, lon = query.lon, geohash = %hash, "Encoded");
            (
                StatusCode::OK,
                Json(EncodeResponse {
                    geohash: hash,
                    lat: query.lat,
                    lon: query.lon,
                    precision,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(&format!("lat={} lon={}", query.lat, query.lon), e),
    }
}

/// Decode a geohash into its bounding cell.
#[utoipa::path(
    get,
    path = "/decode",
    tag = "geohash",
    params(GeohashQuery),
    responses(
        (status = 200, description = "Cell covered by the geohash", body = DecodeResponse),
        (status = 400, description = "Invalid geohash character", body = ErrorResponse)
    )
)]
pub async fn decode(Query(query): Query<GeohashQuery>) -> impl IntoResponse {
    tracing::debug!(geohash = %query.geohash, "Decode query");

    match geohash::decode(&query.geohash) {
        Ok(cell) => (
            StatusCode::OK,
            Json(DecodeResponse {
                geohash: query.geohash.to_lowercase(),
                lat: cell.lat.into(),
                lon: cell.lon.into(),
            }),
        )
            .into_response(),
        Err(e) => error_response(&query.geohash, e),
    }
}

/// Get the eight cells surrounding a geohash.
#[utoipa::path(
    get,
    path = "/neighbors",
    tag = "geohash",
    params(GeohashQuery),
    responses(
        (status = 200, description = "Surrounding cells, null past the map edge", body = NeighborsResponse),
        (status = 400, description = "Invalid geohash character", body = ErrorResponse)
    )
)]
pub async fn neighbors(Query(query): Query<GeohashQuery>) -> impl IntoResponse {
    tracing::debug!(geohash = %query.geohash, "Neighbors query");

    match geohash::adjacent_grid(&query.geohash) {
        Ok([top, top_right, right, bottom_right, bottom, bottom_left, left, top_left]) => (
            StatusCode::OK,
            Json(NeighborsResponse {
                geohash: query.geohash.to_lowercase(),
                top,
                top_right,
                right,
                bottom_right,
                bottom,
                bottom_left,
                left,
                top_left,
            }),
        )
            .into_response(),
        Err(e) => error_response(&query.geohash, e),
    }
}

/// Get the cell next to a geohash in one direction.
#[utoipa::path(
    get,
    path = "/neighbor",
    tag = "geohash",
    params(NeighborQuery),
    responses(
        (status = 200, description = "Neighboring cell, null past the map edge", body = NeighborResponse),
        (status = 400, description = "Invalid geohash or direction", body = ErrorResponse)
    )
)]
pub async fn neighbor(Query(query): Query<NeighborQuery>) -> impl IntoResponse {
    tracing::debug!(
        geohash = %query.geohash,
        direction = %query.direction,
        "Neighbor query"
    );

    let result = query
        .direction
        .parse::<Direction>()
        .and_then(|direction| {
            geohash::adjacent(&query.geohash, direction).map(|cell| (direction, cell))
        });

    match result {
        Ok((direction, cell)) => (
            StatusCode::OK,
            Json(NeighborResponse {
                geohash: query.geohash.to_lowercase(),
                direction: direction.to_string(),
                neighbor: cell,
            }),
        )
            .into_response(),
        Err(e) => error_response(&query.geohash, e),
    }
}

/// Get a geohash cell as a GeoJSON feature.
#[utoipa::path(
    get,
    path = "/cell",
    tag = "geohash",
    params(GeohashQuery),
    responses(
        (status = 200, description = "GeoJSON Feature with the cell polygon"),
        (status = 400, description = "Invalid geohash character", body = ErrorResponse)
    )
)]
pub async fn cell(Query(query): Query<GeohashQuery>) -> impl IntoResponse {
    tracing::debug!(geohash = %query.geohash, "Cell query");

    match geohash::geojson::geohash_to_feature(&query.geohash) {
        Ok(feature) => (StatusCode::OK, Json(feature)).into_response(),
        Err(e) => error_response(&query.geohash, e),
    }
}

/// Create an error response for a rejected request.
fn error_response(input: &str, e: GeohashError) -> axum::response::Response {
    tracing::warn!(input = input, error = %e, "Geohash request failed");

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_deserialize() {
        let json = r#"{"lat": 39.928167, "lon": 116.38955}"#;
        let query: EncodeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.lat, 39.928167);
        assert_eq!(query.precision, None);
    }

    #[test]
    fn test_decode_response_serialize() {
        let cell = geohash::decode("ezs42").unwrap();
        let response = DecodeResponse {
            geohash: "ezs42".to_string(),
            lat: cell.lat.into(),
            lon: cell.lon.into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"min\":-5.625"));
        assert!(json.contains("\"error\":0.02197265625"));
    }

    #[test]
    fn test_neighbor_response_null_at_edge() {
        let response = NeighborResponse {
            geohash: "zzzz".to_string(),
            direction: "top".to_string(),
            neighbor: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"neighbor\":null"));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }
}
