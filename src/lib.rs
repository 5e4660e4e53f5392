//! Rentora Nearby - nearby-listing ranking service for the Rentora rentals app
//!
//! This library provides the nearby-search core used by the Rentora app:
//! a pure pipeline that normalizes the property and vehicle catalogs into
//! one tagged collection, ranks it by great-circle distance from the user,
//! and applies the active category/search filter.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance::haversine_distance, FeedEngine, FeedResult};
pub use crate::models::{
    Category, Coordinate, FilterState, ListingKey, ListingKind, NearbyFeedRequest,
    NearbyFeedResponse, Property, RankedItem, Vehicle,
};
pub use crate::services::{CatalogStore, LocationProvider};
