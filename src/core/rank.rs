use crate::models::RankedItem;
use std::cmp::Ordering;

/// Sort items ascending by distance
///
/// The sort is stable: items at equal distance keep their input order, which
/// the normalizer pins to properties-before-vehicles. No deduplication is
/// performed; the two source catalogs are already disjoint by (kind, id).
pub fn rank(mut items: Vec<RankedItem>) -> Vec<RankedItem> {
    items.sort_by(|a, b| {
        a.distance_km()
            .partial_cmp(&b.distance_km())
            .unwrap_or(Ordering::Equal)
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingKind, Property, Vehicle};

    fn property_at(id: &str, distance_km: f64) -> RankedItem {
        RankedItem::Property {
            listing: Property {
                id: id.to_string(),
                title: format!("Property {}", id),
                location: "Lyon".to_string(),
                property_type: "House".to_string(),
                price: 1500.0,
                bedrooms: 3,
                bathrooms: 2,
                area: 110.0,
                rating: 4.7,
                image: String::new(),
                latitude: None,
                longitude: None,
            },
            distance_km,
        }
    }

    fn vehicle_at(id: &str, distance_km: f64) -> RankedItem {
        RankedItem::Vehicle {
            listing: Vehicle {
                id: id.to_string(),
                name: format!("Vehicle {}", id),
                brand: "Peugeot".to_string(),
                year: 2021,
                price_per_day: 39.0,
                seats: 5,
                fuel_type: "Petrol".to_string(),
                rating: 4.0,
                image: String::new(),
                available: true,
                latitude: None,
                longitude: None,
            },
            distance_km,
        }
    }

    #[test]
    fn test_sorted_ascending_by_distance() {
        let items = vec![
            property_at("p1", 42.0),
            vehicle_at("v1", 3.5),
            property_at("p2", 17.0),
        ];

        let ranked = rank(items);

        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km() <= pair[1].distance_km());
        }
        assert_eq!(ranked[0].id(), "v1");
        assert_eq!(ranked[2].id(), "p1");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            property_at("p1", 10.0),
            vehicle_at("v1", 10.0),
            property_at("p2", 10.0),
        ];

        let ranked = rank(items);

        assert_eq!(ranked[0].id(), "p1");
        assert_eq!(ranked[0].kind(), ListingKind::Property);
        assert_eq!(ranked[1].id(), "v1");
        assert_eq!(ranked[2].id(), "p2");
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(rank(vec![]).is_empty());
    }
}
