use crate::core::distance::distance_between;
use crate::models::{Coordinate, Property, RankedItem, Vehicle};

/// Convert both raw catalogs into a single sequence of ranked items
///
/// Each listing is tagged with its kind and annotated with its distance from
/// `origin`. Properties come first, then vehicles; that concatenation order
/// is what the stable sort preserves for equal distances. Listings without a
/// stored coordinate are measured against (0, 0).
pub fn normalize(
    properties: &[Property],
    vehicles: &[Vehicle],
    origin: Coordinate,
) -> Vec<RankedItem> {
    let mut items = Vec::with_capacity(properties.len() + vehicles.len());

    items.extend(properties.iter().map(|p| RankedItem::Property {
        distance_km: distance_between(origin, p.coordinate()),
        listing: p.clone(),
    }));

    items.extend(vehicles.iter().map(|v| RankedItem::Vehicle {
        distance_km: distance_between(origin, v.coordinate()),
        listing: v.clone(),
    }));

    items
}
