use crate::models::domain::{Coordinate, Property, RankedItem, Vehicle};
use serde::{Deserialize, Serialize};

/// Response for the nearby feed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyFeedResponse {
    pub items: Vec<RankedItem>,
    /// Origin the distances were computed from
    pub origin: Coordinate,
    /// False when the configured fallback origin was used
    pub located: bool,
    /// Catalog size before filtering
    pub total_listings: usize,
}

/// Response for the property list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
    pub total: usize,
}

/// Response for the vehicle list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
}

/// Detail payload for a single listing, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingDetail {
    Property(Property),
    Vehicle(Vehicle),
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub properties: usize,
    pub vehicles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
