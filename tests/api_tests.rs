// HTTP round-trip tests for the listing routes

use actix_web::{test, web, App};
use rentora_nearby::core::FeedEngine;
use rentora_nearby::models::Coordinate;
use rentora_nearby::routes::listings::AppState;
use rentora_nearby::services::{CatalogStore, LocationProvider, NoLocation};
use std::sync::Arc;

fn test_state() -> AppState {
    let location: Arc<dyn LocationProvider> = Arc::new(NoLocation);
    AppState {
        catalog: Arc::new(CatalogStore::embedded()),
        location,
        engine: FeedEngine::new(Coordinate {
            latitude: 37.7749,
            longitude: -122.4194,
        }),
        max_limit: 200,
    }
}

#[actix_web::test]
async fn test_nearby_feed_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/feed/nearby")
        .set_json(serde_json::json!({
            "latitude": 37.7749,
            "longitude": -122.4194,
            "category": "vehicles",
            "limit": 3
        }))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["located"], true);
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty() && items.len() <= 3);
    for item in items {
        assert_eq!(item["kind"], "vehicle");
        assert!(item["distanceKm"].as_f64().unwrap() >= 0.0);
    }
}

#[actix_web::test]
async fn test_nearby_feed_without_coordinates_uses_fallback() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/feed/nearby")
        .set_json(serde_json::json!({}))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["located"], false);
    assert_eq!(body["origin"]["latitude"], 37.7749);
    assert!(!body["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_nearby_feed_rejects_out_of_range_limit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/feed/nearby")
        .set_json(serde_json::json!({"limit": 0}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_listing_detail_roundtrip() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/listings/property-p1")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["kind"], "property");
    assert_eq!(body["id"], "p1");

    let req = test::TestRequest::get()
        .uri("/api/v1/listings/vehicle-nope")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get()
        .uri("/api/v1/listings/garbage")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_property_list_type_filter() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/properties?type=Villa")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let properties = body["properties"].as_array().unwrap();
    assert!(!properties.is_empty());
    for p in properties {
        assert_eq!(p["type"], "Villa");
    }
}

#[actix_web::test]
async fn test_vehicle_list_and_health() {
    let state = test_state();
    let vehicle_count = state.catalog.vehicles().len();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(rentora_nearby::routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/vehicles").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], vehicle_count);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["vehicles"], vehicle_count);
}
