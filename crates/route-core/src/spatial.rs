//! Great-circle distance math for routes and points of interest.

use crate::format::{format_km, PLACEHOLDER};
use crate::models::GeoPoint;
use thiserror::Error;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("non-finite coordinate ({latitude}, {longitude})")]
    NonFinite { latitude: f64, longitude: f64 },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Calculate distance between two points in kilometers using the haversine formula.
///
/// Returns `NaN` when either point has a non-finite coordinate so callers can
/// tell "unknown" apart from a genuine zero distance.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    haversine_distance_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Like [`distance_km`], but validates both points first.
pub fn try_distance_km(a: &GeoPoint, b: &GeoPoint) -> Result<f64, GeoError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_distance_km(
        a.latitude,
        a.longitude,
        b.latitude,
        b.longitude,
    ))
}

/// Great-circle distance in kilometers between two raw coordinate pairs.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Total length of an ordered polyline in kilometers.
///
/// Empty and single-point paths have length 0. Any non-finite point makes the
/// whole length `NaN`.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .fold(0.0, |acc, leg| acc + distance_km(&leg[0], &leg[1]))
}

/// Distance label for display, `"—"` when the distance is unknown.
pub fn format_distance_km(distance: f64) -> String {
    if distance.is_finite() && distance >= 0.0 {
        format_km(distance)
    } else {
        PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn haversine_known_distance() {
        let moscow = point(55.7558, 37.6176);
        let spb = point(59.9343, 30.3351);
        let dist = distance_km(&moscow, &spb);
        assert!((dist - 635.0).abs() < 5.0, "got {dist}");
    }

    #[test]
    fn haversine_same_point() {
        let a = point(55.7558, 37.6176);
        assert_eq!(distance_km(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (point(0.0, 0.0), point(1.0, 0.0)),
            (point(-33.86, 151.21), point(51.5, -0.12)),
            (point(89.9, 179.9), point(-89.9, -179.9)),
        ];
        for (a, b) in pairs {
            let ab = distance_km(&a, &b);
            let ba = distance_km(&b, &a);
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn non_finite_coordinate_is_nan_not_zero() {
        let a = point(f64::NAN, 37.0);
        let b = point(55.0, 37.0);
        assert!(distance_km(&a, &b).is_nan());
        assert!(distance_km(&b, &point(55.0, f64::INFINITY)).is_nan());
        assert!(matches!(
            try_distance_km(&a, &b),
            Err(GeoError::NonFinite { .. })
        ));
    }

    #[test]
    fn path_length_sums_legs() {
        let path = [point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0)];
        let total = path_length_km(&path);
        let direct = distance_km(&path[0], &path[2]);
        assert!((total - direct).abs() < 1e-6);
        assert_eq!(path_length_km(&path[..1]), 0.0);
        assert_eq!(path_length_km(&[]), 0.0);
        assert!(path_length_km(&[]).is_sign_positive());
        assert_eq!(format_distance_km(path_length_km(&path[..1])), "0.0 км");
    }

    #[test]
    fn unknown_distance_formats_as_placeholder() {
        assert_eq!(format_distance_km(f64::NAN), "—");
        assert_eq!(format_distance_km(-1.0), "—");
        assert_eq!(format_distance_km(12.34), "12.3 км");
    }
}
