//! Current-position acquisition with an explicit fallback.

use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Red Square, used when no location can be acquired.
pub const DEFAULT_FALLBACK: GeoPoint = GeoPoint {
    latitude: 55.7558,
    longitude: 37.6176,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location request timed out")]
    Timeout,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Something that can report the user's position.
pub trait LocationSource {
    fn current_location(&self) -> Result<GeoPoint, LocateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationOrigin {
    Acquired,
    Fallback,
}

/// Ask `source` for a position, using `fallback` on failure or invalid coordinates.
pub fn locate_or_fallback<S: LocationSource + ?Sized>(
    source: &S,
    fallback: GeoPoint,
) -> (GeoPoint, LocationOrigin) {
    match source.current_location() {
        Ok(point) if point.validate().is_ok() => (point, LocationOrigin::Acquired),
        Ok(point) => {
            tracing::warn!(?point, "location source returned invalid coordinates, using fallback");
            (fallback, LocationOrigin::Fallback)
        }
        Err(e) => {
            tracing::warn!(error = %e, "location unavailable, using fallback");
            (fallback, LocationOrigin::Fallback)
        }
    }
}

/// A source that always reports the same point.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationSource for FixedLocation {
    fn current_location(&self) -> Result<GeoPoint, LocateError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Denied;

    impl LocationSource for Denied {
        fn current_location(&self) -> Result<GeoPoint, LocateError> {
            Err(LocateError::PermissionDenied)
        }
    }

    #[test]
    fn acquired_location_is_used() {
        let here = GeoPoint {
            latitude: 59.93,
            longitude: 30.33,
        };
        let (point, origin) = locate_or_fallback(&FixedLocation(here), DEFAULT_FALLBACK);
        assert_eq!(point, here);
        assert_eq!(origin, LocationOrigin::Acquired);
    }

    #[test]
    fn failure_uses_configured_fallback() {
        let fallback = GeoPoint {
            latitude: 56.84,
            longitude: 60.6,
        };
        let (point, origin) = locate_or_fallback(&Denied, fallback);
        assert_eq!(point, fallback);
        assert_eq!(origin, LocationOrigin::Fallback);
    }

    #[test]
    fn invalid_coordinates_use_fallback() {
        let broken = FixedLocation(GeoPoint {
            latitude: 120.0,
            longitude: 0.0,
        });
        let (point, origin) = locate_or_fallback(&broken, DEFAULT_FALLBACK);
        assert_eq!(point, DEFAULT_FALLBACK);
        assert_eq!(origin, LocationOrigin::Fallback);
    }
}
