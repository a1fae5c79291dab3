//! Weather reduction along a route.

use crate::format::round_half_up;
use crate::models::{WeatherPoint, WeatherRiskLevel};
use serde::{Deserialize, Serialize};

/// Marker color for a forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Yellow,
    Red,
}

const RISK_COLORS: [(WeatherRiskLevel, RiskColor); 3] = [
    (WeatherRiskLevel::Low, RiskColor::Green),
    (WeatherRiskLevel::Medium, RiskColor::Yellow),
    (WeatherRiskLevel::High, RiskColor::Red),
];

pub fn risk_color(level: WeatherRiskLevel) -> RiskColor {
    RISK_COLORS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, color)| *color)
        .unwrap_or(RiskColor::Green)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean temperature rounded half-up. `None` for an empty or invalid sequence.
pub fn average_temperature(points: &[WeatherPoint]) -> Option<i64> {
    mean(points.iter().map(|p| p.temperature)).and_then(round_half_up)
}

/// Mean wind speed rounded half-up. `None` for an empty or invalid sequence.
pub fn average_wind_speed(points: &[WeatherPoint]) -> Option<i64> {
    mean(points.iter().map(|p| p.wind_speed)).and_then(round_half_up)
}

pub fn average_humidity(points: &[WeatherPoint]) -> Option<i64> {
    mean(points.iter().map(|p| p.humidity)).and_then(round_half_up)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherPointView {
    pub description: String,
    pub temperature: Option<i64>,
    pub wind_speed: Option<i64>,
    pub risk_level: WeatherRiskLevel,
    pub color: RiskColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub point_count: usize,
    /// `None` only when the inputs contain non-finite values
    pub average_temperature: Option<i64>,
    pub average_wind_speed: Option<i64>,
    pub average_humidity: Option<i64>,
    pub worst_risk: WeatherRiskLevel,
    pub high_risk_points: usize,
    pub medium_risk_points: usize,
    pub points: Vec<WeatherPointView>,
}

/// Reduce a forecast sequence. Returns `None` when there are no points, which
/// callers show as a pending state.
pub fn summarize_weather(points: &[WeatherPoint]) -> Option<WeatherSummary> {
    let worst_risk = points.iter().map(|p| p.risk_level).max()?;
    let count_level = |level: WeatherRiskLevel| {
        points.iter().filter(|p| p.risk_level == level).count()
    };

    Some(WeatherSummary {
        point_count: points.len(),
        average_temperature: average_temperature(points),
        average_wind_speed: average_wind_speed(points),
        average_humidity: average_humidity(points),
        worst_risk,
        high_risk_points: count_level(WeatherRiskLevel::High),
        medium_risk_points: count_level(WeatherRiskLevel::Medium),
        points: points
            .iter()
            .map(|p| WeatherPointView {
                description: p.weather_description.clone(),
                temperature: round_half_up(p.temperature),
                wind_speed: round_half_up(p.wind_speed),
                risk_level: p.risk_level,
                color: risk_color(p.risk_level),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(temperature: f64, wind_speed: f64, risk_level: WeatherRiskLevel) -> WeatherPoint {
        WeatherPoint {
            temperature,
            humidity: 70.0,
            wind_speed,
            risk_level,
            weather_description: "облачно".to_string(),
            location: None,
        }
    }

    #[test]
    fn temperature_rounds_half_up() {
        let points = vec![
            point(10.4, 3.0, WeatherRiskLevel::Low),
            point(10.6, 4.0, WeatherRiskLevel::Low),
        ];
        assert_eq!(average_temperature(&points), Some(11));
        assert_eq!(average_wind_speed(&points), Some(4));
    }

    #[test]
    fn empty_sequence_has_no_summary() {
        assert!(summarize_weather(&[]).is_none());
        assert_eq!(average_temperature(&[]), None);
    }

    #[test]
    fn colors_are_table_driven() {
        assert_eq!(risk_color(WeatherRiskLevel::High), RiskColor::Red);
        assert_eq!(risk_color(WeatherRiskLevel::Medium), RiskColor::Yellow);
        assert_eq!(risk_color(WeatherRiskLevel::Low), RiskColor::Green);
    }

    #[test]
    fn summary_tracks_worst_risk() {
        let points = vec![
            point(-2.0, 8.0, WeatherRiskLevel::Low),
            point(-5.0, 14.0, WeatherRiskLevel::High),
            point(-3.0, 10.0, WeatherRiskLevel::Medium),
        ];
        let summary = summarize_weather(&points).unwrap();
        assert_eq!(summary.point_count, 3);
        assert_eq!(summary.worst_risk, WeatherRiskLevel::High);
        assert_eq!(summary.high_risk_points, 1);
        assert_eq!(summary.medium_risk_points, 1);
        assert_eq!(summary.average_temperature, Some(-3));
        assert_eq!(summary.average_humidity, Some(70));
        assert_eq!(summary.points[1].color, RiskColor::Red);
    }

    #[test]
    fn invalid_reading_is_unknown() {
        let points = vec![
            point(f64::NAN, 3.0, WeatherRiskLevel::Low),
            point(5.0, 3.0, WeatherRiskLevel::Low),
        ];
        let summary = summarize_weather(&points).unwrap();
        assert_eq!(summary.average_temperature, None);
        assert_eq!(summary.average_wind_speed, Some(3));
    }
}
