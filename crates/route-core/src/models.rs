//! Core data models received from the route-analysis backend.
//!
//! Every type here is an immutable snapshot of one analysis request. Editing a
//! route means requesting a new snapshot, never mutating these in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::spatial::GeoError;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated point.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Check that both coordinates are finite and inside their ranges.
    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(GeoError::NonFinite {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Result of a single route calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalytics {
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    pub overall_risk: i64,
    pub weather_risk: i64,
    pub road_quality_risk: i64,
    #[serde(default)]
    pub weather_conditions: String,
    #[serde(default)]
    pub cost_breakdown: Option<CostBreakdown>,
    #[serde(default)]
    pub rest_stops: Vec<RestStopRecommendation>,
}

/// Backend-computed cost split. `total` is authoritative for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fuel: f64,
    pub tolls: f64,
    pub driver: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeatherRiskLevel {
    Low,
    Medium,
    High,
}

/// One forecast sample along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPoint {
    /// Degrees Celsius
    pub temperature: f64,
    /// Percent, 0-100
    pub humidity: f64,
    /// Meters per second
    pub wind_speed: f64,
    pub risk_level: WeatherRiskLevel,
    #[serde(default)]
    pub weather_description: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStation {
    pub station_name: String,
    pub price_per_liter: f64,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub distance_from_route_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollSegment {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub segment: Option<SegmentBounds>,
}

/// Start and end of a toll section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentBounds {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// Kind of rest break, resolved once when the recommendation is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestKind {
    ShortBreak,
    DailyRest,
    WeeklyRest,
    Other,
}

impl RestKind {
    /// Map a backend token or localized label to a rest kind.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "short_break" | "short" | "break" => return Self::ShortBreak,
            "daily_rest" | "daily" => return Self::DailyRest,
            "weekly_rest" | "weekly" => return Self::WeeklyRest,
            _ => {}
        }
        // Long-rest words win: "Длительный перерыв" is a daily rest.
        if normalized.contains("еженедел") {
            Self::WeeklyRest
        } else if normalized.contains("ежеднев") || normalized.contains("длител") {
            Self::DailyRest
        } else if normalized.contains("корот") || normalized.contains("перерыв") {
            Self::ShortBreak
        } else {
            Self::Other
        }
    }

    /// Default Russian label used when the backend sent a bare token.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortBreak => "Короткий перерыв",
            Self::DailyRest => "Ежедневный отдых",
            Self::WeeklyRest => "Еженедельный отдых",
            Self::Other => "Остановка",
        }
    }
}

/// The backend `restType` field: the original label plus its decoded kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RestType {
    pub kind: RestKind,
    pub label: String,
}

impl From<String> for RestType {
    fn from(label: String) -> Self {
        Self {
            kind: RestKind::from_label(&label),
            label,
        }
    }
}

impl From<RestType> for String {
    fn from(rest_type: RestType) -> Self {
        rest_type.label
    }
}

impl RestType {
    /// Human-readable label, replacing machine tokens with the kind's label.
    pub fn display_label(&self) -> &str {
        let looks_like_token = !self.label.is_empty()
            && self
                .label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if self.label.trim().is_empty() || (looks_like_token && self.kind != RestKind::Other) {
            self.kind.label()
        } else {
            &self.label
        }
    }
}

/// A recommended stop. Sequence order is the stopping order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestStopRecommendation {
    pub rest_type: RestType,
    pub recommended_rest_duration_minutes: u32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub distance_from_start_km: f64,
    #[serde(default)]
    pub time_from_departure: String,
    #[serde(default)]
    pub expected_arrival_at_stop: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub facilities: Option<BTreeMap<String, bool>>,
}

/// Driver working-time (RTO) analysis for a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRestAnalysis {
    #[serde(default)]
    pub is_compliant: Option<bool>,
    #[serde(default)]
    pub requires_rest: Option<bool>,
    #[serde(default)]
    pub total_driving_minutes: Option<u32>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub rest_stops: Vec<RestStopRecommendation>,
}

/// Everything the dashboard knows about one route at a point in time.
///
/// Each part may be missing when its request is still pending or failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSnapshot {
    #[serde(default)]
    pub route_id: Option<String>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: Vec<GeoPoint>,
    #[serde(default)]
    pub analytics: Option<RouteAnalytics>,
    #[serde(default)]
    pub weather: Option<Vec<WeatherPoint>>,
    #[serde(default)]
    pub fuel_stations: Option<Vec<FuelStation>>,
    #[serde(default)]
    pub toll_segments: Option<Vec<TollSegment>>,
    #[serde(default)]
    pub rest_analysis: Option<DriverRestAnalysis>,
}
