// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Coordinate, FilterState, ListingKey, ListingKind, Property, RankedItem, Vehicle};
pub use requests::{NearbyFeedRequest, PropertyListQuery};
pub use responses::{ErrorResponse, HealthResponse, ListingDetail, NearbyFeedResponse, PropertyListResponse, VehicleListResponse};
