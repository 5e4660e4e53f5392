use crate::models::domain::{Category, Coordinate, FilterState};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to build the nearby feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyFeedRequest {
    /// Device latitude; absent when location permission was denied
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Device longitude; absent when location permission was denied
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Raw category selector; unrecognized values fall open to all listings
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[serde(alias = "search_text", rename = "searchText")]
    pub search_text: Option<String>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    50
}

impl NearbyFeedRequest {
    /// Coordinate from the request, if the client supplied both halves
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Filter state derived from the raw request fields
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            category: self
                .category
                .as_deref()
                .map(Category::parse)
                .unwrap_or_default(),
            search_text: self.search_text.clone().unwrap_or_default(),
        }
    }
}

/// Query parameters for the property list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListQuery {
    /// Exact property type to keep; absent or `All` returns everything
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
}
