use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in decimal degrees
///
/// No range validation is performed; out-of-range values produce a
/// numerically defined (if meaningless) distance downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Rental property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub property_type: String,
    pub price: f64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area: f64,
    pub rating: f64,
    pub image: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Property {
    /// Stored coordinate, defaulting to (0, 0) when the listing has none
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.unwrap_or(0.0),
            longitude: self.longitude.unwrap_or(0.0),
        }
    }
}

/// Rental vehicle listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub year: u16,
    #[serde(rename = "pricePerDay")]
    pub price_per_day: f64,
    pub seats: u8,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub rating: f64,
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Vehicle {
    /// Stored coordinate, defaulting to (0, 0) when the listing has none
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.unwrap_or(0.0),
            longitude: self.longitude.unwrap_or(0.0),
        }
    }
}

fn default_true() -> bool { true }

/// Listing kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Property,
    Vehicle,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Property => "property",
            ListingKind::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry annotated with its distance from the user
///
/// Explicit tagged union over the two listing shapes. All branching happens
/// on the variant, never on field presence, so matches stay exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RankedItem {
    Property {
        #[serde(flatten)]
        listing: Property,
        #[serde(rename = "distanceKm")]
        distance_km: f64,
    },
    Vehicle {
        #[serde(flatten)]
        listing: Vehicle,
        #[serde(rename = "distanceKm")]
        distance_km: f64,
    },
}

impl RankedItem {
    pub fn kind(&self) -> ListingKind {
        match self {
            RankedItem::Property { .. } => ListingKind::Property,
            RankedItem::Vehicle { .. } => ListingKind::Vehicle,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RankedItem::Property { listing, .. } => &listing.id,
            RankedItem::Vehicle { listing, .. } => &listing.id,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            RankedItem::Property { distance_km, .. } => *distance_km,
            RankedItem::Vehicle { distance_km, .. } => *distance_km,
        }
    }

    /// Primary display name: title for a property, name for a vehicle
    pub fn display_name(&self) -> &str {
        match self {
            RankedItem::Property { listing, .. } => &listing.title,
            RankedItem::Vehicle { listing, .. } => &listing.name,
        }
    }

    /// Secondary descriptor: location for a property, brand for a vehicle
    pub fn secondary_descriptor(&self) -> &str {
        match self {
            RankedItem::Property { listing, .. } => &listing.location,
            RankedItem::Vehicle { listing, .. } => &listing.brand,
        }
    }

    /// Detail-view navigation key in the form `{kind}-{id}`
    pub fn listing_key(&self) -> String {
        format!("{}-{}", self.kind(), self.id())
    }
}

/// Coarse feed selector restricting results to one listing kind or all kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Properties,
    Vehicles,
}

impl Category {
    /// Parse a client-supplied category string
    ///
    /// Anything unrecognized falls open to `All` so the pipeline stays total:
    /// a typoed filter widens results instead of erroring.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "properties" | "property" => Category::Properties,
            "vehicles" | "vehicle" | "cars" | "car" => Category::Vehicles,
            _ => Category::All,
        }
    }
}

/// Active feed filter: category plus free-text search
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub category: Category,
    pub search_text: String,
}

impl FilterState {
    pub fn new(category: Category, search_text: impl Into<String>) -> Self {
        Self {
            category,
            search_text: search_text.into(),
        }
    }
}

/// Parsed detail-view key
///
/// Keys look like `property-p3` or `vehicle-c1-gt`. Only the first `-`
/// separates the kind; the remainder is the id and may itself contain `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingKey {
    pub kind: ListingKind,
    pub id: String,
}

impl ListingKey {
    pub fn parse(raw: &str) -> Option<Self> {
        let (kind, id) = raw.split_once('-')?;
        if id.is_empty() {
            return None;
        }
        let kind = match kind {
            "property" => ListingKind::Property,
            "vehicle" => ListingKind::Vehicle,
            _ => return None,
        };
        Some(Self {
            kind,
            id: id.to_string(),
        })
    }
}

impl fmt::Display for ListingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}
