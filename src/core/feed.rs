use crate::core::{filters::apply_filter, normalize::normalize, rank::rank};
use crate::models::{Coordinate, FilterState, Property, RankedItem, Vehicle};

/// Result of one feed computation
#[derive(Debug)]
pub struct FeedResult {
    pub items: Vec<RankedItem>,
    /// Origin the distances were computed from
    pub origin: Coordinate,
    /// False when the fallback origin was used
    pub located: bool,
    /// Catalog size before filtering
    pub total_listings: usize,
}

/// Feed orchestrator - runs the normalize, rank and filter pipeline
///
/// # Pipeline Stages
/// 1. Normalize both catalogs into tagged, distance-annotated items
/// 2. Stable sort ascending by distance
/// 3. Category + search filtering
///
/// Every call is a fresh synchronous pass over immutable snapshots of its
/// inputs; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FeedEngine {
    fallback_origin: Coordinate,
}

impl FeedEngine {
    /// Create an engine that falls back to `fallback_origin` when no live
    /// coordinate is available (location denied or provider failure)
    pub fn new(fallback_origin: Coordinate) -> Self {
        Self { fallback_origin }
    }

    pub fn fallback_origin(&self) -> Coordinate {
        self.fallback_origin
    }

    /// Build the full nearby feed
    ///
    /// # Arguments
    /// * `properties` - Property catalog snapshot
    /// * `vehicles` - Vehicle catalog snapshot
    /// * `origin` - Live user coordinate, or None when unavailable
    /// * `filter` - Active category and search text
    ///
    /// # Returns
    /// FeedResult with the complete filtered sequence; truncation for
    /// presentation is the caller's concern.
    pub fn build_feed(
        &self,
        properties: &[Property],
        vehicles: &[Vehicle],
        origin: Option<Coordinate>,
        filter: &FilterState,
    ) -> FeedResult {
        let located = origin.is_some();
        let origin = origin.unwrap_or(self.fallback_origin);
        let total_listings = properties.len() + vehicles.len();

        let items = apply_filter(rank(normalize(properties, vehicles, origin)), filter);

        FeedResult {
            items,
            origin,
            located,
            total_listings,
        }
    }
}

impl Default for FeedEngine {
    fn default() -> Self {
        // San Francisco city center
        Self::new(Coordinate {
            latitude: 37.7749,
            longitude: -122.4194,
        })
    }
}
