use crate::core::FeedEngine;
use crate::models::{
    ErrorResponse, HealthResponse, ListingKey, NearbyFeedRequest, NearbyFeedResponse,
    PropertyListQuery, PropertyListResponse, VehicleListResponse,
};
use crate::services::{resolve_origin, CatalogStore, LocationProvider};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub location: Arc<dyn LocationProvider>,
    pub engine: FeedEngine,
    /// Hard cap applied to client-supplied limits
    pub max_limit: u16,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/feed/nearby", web::post().to(nearby_feed))
        .route("/properties", web::get().to(list_properties))
        .route("/vehicles", web::get().to(list_vehicles))
        .route("/listings/{key}", web::get().to(listing_detail));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        properties: state.catalog.properties().len(),
        vehicles: state.catalog.vehicles().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Nearby feed endpoint
///
/// POST /api/v1/feed/nearby
///
/// Request body:
/// ```json
/// {
///   "latitude": 37.77,
///   "longitude": -122.41,
///   "category": "all|properties|vehicles",
///   "searchText": "villa",
///   "limit": 50
/// }
/// ```
///
/// Coordinates are optional; a request without them is a client whose
/// location was denied or unavailable, and the configured fallback origin
/// applies.
async fn nearby_feed(
    state: web::Data<AppState>,
    req: web::Json<NearbyFeedRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for nearby feed request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filter = req.filter_state();
    let origin = resolve_origin(req.coordinate(), state.location.as_ref());

    let result = state.engine.build_feed(
        state.catalog.properties(),
        state.catalog.vehicles(),
        origin,
        &filter,
    );

    // The core always produces the full ranked sequence; truncation for
    // presentation happens here, capped by configuration.
    let limit = req.limit.min(state.max_limit) as usize;
    let total_listings = result.total_listings;
    let mut items = result.items;
    items.truncate(limit);

    tracing::info!(
        "Returning {} of {} listings (located: {}, category: {:?})",
        items.len(),
        total_listings,
        result.located,
        filter.category
    );

    HttpResponse::Ok().json(NearbyFeedResponse {
        items,
        origin: result.origin,
        located: result.located,
        total_listings,
    })
}

/// Property list endpoint
///
/// GET /api/v1/properties?type=Villa
async fn list_properties(
    state: web::Data<AppState>,
    query: web::Query<PropertyListQuery>,
) -> impl Responder {
    let properties = state
        .catalog
        .properties_of_type(query.property_type.as_deref());
    let total = properties.len();

    HttpResponse::Ok().json(PropertyListResponse { properties, total })
}

/// Vehicle list endpoint
///
/// GET /api/v1/vehicles
async fn list_vehicles(state: web::Data<AppState>) -> impl Responder {
    let vehicles = state.catalog.vehicles().to_vec();
    let total = vehicles.len();

    HttpResponse::Ok().json(VehicleListResponse { vehicles, total })
}

/// Listing detail endpoint
///
/// GET /api/v1/listings/{key} where key is `{kind}-{id}`, e.g. `property-p3`
async fn listing_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let raw = path.into_inner();

    let key = match ListingKey::parse(&raw) {
        Some(key) => key,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_key".to_string(),
                message: format!("'{}' is not a valid listing key", raw),
                status_code: 400,
            });
        }
    };

    match state.catalog.find_by_key(&key) {
        Some(detail) => HttpResponse::Ok().json(detail),
        None => {
            tracing::debug!("Listing not found: {}", key);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: format!("No listing with key '{}'", key),
                status_code: 404,
            })
        }
    }
}
