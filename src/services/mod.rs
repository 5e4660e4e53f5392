// Service exports
pub mod catalog;
pub mod location;

pub use catalog::{CatalogError, CatalogStore};
pub use location::{FixedLocation, LocationOutcome, LocationProvider, NoLocation, resolve_origin};
