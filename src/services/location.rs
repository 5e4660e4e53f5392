use crate::models::Coordinate;

/// Outcome of a location request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationOutcome {
    Granted(Coordinate),
    Denied,
}

/// Capability interface over the platform location source
///
/// One implementation is selected at startup; the feed pipeline never
/// depends on which. Denial is a recovered-locally condition: callers fall
/// back to the configured origin instead of surfacing an error. There is no
/// retry policy.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> LocationOutcome;
}

/// Provider pinned to a fixed coordinate (a configured city center)
pub struct FixedLocation {
    coordinate: Coordinate,
}

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> LocationOutcome {
        LocationOutcome::Granted(self.coordinate)
    }
}

/// Provider for deployments with no location source at all
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_location(&self) -> LocationOutcome {
        LocationOutcome::Denied
    }
}

/// Resolve the origin for one request
///
/// An explicit client-supplied coordinate wins; otherwise the provider is
/// asked. `None` means the caller should apply its fallback origin.
pub fn resolve_origin(
    explicit: Option<Coordinate>,
    provider: &dyn LocationProvider,
) -> Option<Coordinate> {
    explicit.or_else(|| match provider.current_location() {
        LocationOutcome::Granted(coordinate) => Some(coordinate),
        LocationOutcome::Denied => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Coordinate = Coordinate {
        latitude: 52.52,
        longitude: 13.405,
    };

    #[test]
    fn test_explicit_coordinate_wins() {
        let provider = FixedLocation::new(BERLIN);
        let explicit = Coordinate {
            latitude: 48.8566,
            longitude: 2.3522,
        };

        assert_eq!(resolve_origin(Some(explicit), &provider), Some(explicit));
    }

    #[test]
    fn test_provider_answers_when_no_explicit_coordinate() {
        let provider = FixedLocation::new(BERLIN);
        assert_eq!(resolve_origin(None, &provider), Some(BERLIN));
    }

    #[test]
    fn test_denied_resolves_to_none() {
        assert_eq!(resolve_origin(None, &NoLocation), None);
    }
}
