use crate::models::{ListingDetail, ListingKey, ListingKind, Property, Vehicle};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Built-in catalog bundled with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk catalog document shape
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

/// Immutable in-memory listing catalog
///
/// Loaded once at startup and never mutated afterwards; every feed
/// computation reads a snapshot of these collections. Load failures are
/// startup failures, never mid-request ones.
pub struct CatalogStore {
    properties: Vec<Property>,
    vehicles: Vec<Vehicle>,
}

impl CatalogStore {
    pub fn new(properties: Vec<Property>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            properties,
            vehicles,
        }
    }

    /// Catalog bundled into the binary at build time
    ///
    /// # Panics
    /// Panics if the embedded document is malformed, which is a build defect
    /// rather than a runtime condition.
    pub fn embedded() -> Self {
        let doc: CatalogDocument =
            serde_json::from_str(EMBEDDED_CATALOG).expect("embedded catalog is malformed");
        Self::new(doc.properties, doc.vehicles)
    }

    /// Load a catalog from an operator-supplied JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let doc: CatalogDocument = serde_json::from_str(&raw)?;
        Ok(Self::new(doc.properties, doc.vehicles))
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn vehicle_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Look up a listing by its `{kind}-{id}` detail key
    pub fn find_by_key(&self, key: &ListingKey) -> Option<ListingDetail> {
        match key.kind {
            ListingKind::Property => self
                .property_by_id(&key.id)
                .cloned()
                .map(ListingDetail::Property),
            ListingKind::Vehicle => self
                .vehicle_by_id(&key.id)
                .cloned()
                .map(ListingDetail::Vehicle),
        }
    }

    /// Properties restricted to one type, or all of them
    ///
    /// `None` and the literal `All` both return the whole collection,
    /// matching the home screen's filter chips.
    pub fn properties_of_type(&self, property_type: Option<&str>) -> Vec<Property> {
        match property_type {
            None => self.properties.clone(),
            Some(t) if t.eq_ignore_ascii_case("all") => self.properties.clone(),
            Some(t) => self
                .properties
                .iter()
                .filter(|p| p.property_type == t)
                .cloned()
                .collect(),
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::embedded()
    }
}
