//! Rest-stop schedule formatting.
//!
//! Recommendations are displayed in the order the backend sent them. That
//! order is the stopping order; `distance_from_start_km` is informational and
//! may be approximate or tied, so it is never used for sorting.

use crate::format::PLACEHOLDER;
use crate::models::{DriverRestAnalysis, RestKind, RestStopRecommendation};
use crate::spatial::format_distance_km;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format a duration as `"{h}ч {m}м"`, or `"{m}м"` under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{rest}м")
    } else {
        format!("{hours}ч {rest}м")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestIcon {
    Coffee,
    Bed,
    Home,
    MapPin,
}

const REST_ICONS: [(RestKind, RestIcon); 4] = [
    (RestKind::ShortBreak, RestIcon::Coffee),
    (RestKind::DailyRest, RestIcon::Bed),
    (RestKind::WeeklyRest, RestIcon::Home),
    (RestKind::Other, RestIcon::MapPin),
];

pub fn rest_icon(kind: RestKind) -> RestIcon {
    REST_ICONS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, icon)| *icon)
        .unwrap_or(RestIcon::MapPin)
}

/// Minutes between departure and arrival, formatted. `None` when the arrival
/// precedes departure.
pub fn elapsed_label(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Option<String> {
    let minutes = (arrival - departure).num_minutes();
    u32::try_from(minutes).ok().map(format_duration)
}

pub fn format_arrival(arrival: Option<DateTime<Utc>>) -> String {
    arrival
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Names of facilities marked available, in key order.
pub fn available_facilities(stop: &RestStopRecommendation) -> Vec<String> {
    stop.facilities
        .iter()
        .flatten()
        .filter(|(_, available)| **available)
        .map(|(name, _)| name.clone())
        .collect()
}

/// One rendered line of the rest schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStopRow {
    /// 1-based position in the stopping order
    pub sequence: usize,
    pub kind: RestKind,
    pub icon: RestIcon,
    pub type_label: String,
    pub duration_label: String,
    pub distance_label: String,
    pub time_from_departure: String,
    pub arrival_label: String,
    pub location_name: String,
    pub reason: String,
    pub facilities: Vec<String>,
}

fn time_from_departure(stop: &RestStopRecommendation, departure: Option<DateTime<Utc>>) -> String {
    if !stop.time_from_departure.trim().is_empty() {
        return stop.time_from_departure.clone();
    }
    match (departure, stop.expected_arrival_at_stop) {
        (Some(departure), Some(arrival)) => {
            elapsed_label(departure, arrival).unwrap_or_else(|| PLACEHOLDER.to_string())
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Build display rows preserving input order.
///
/// The backend `timeFromDeparture` text is used as-is; when it is blank the
/// label is derived from `departure` and the expected arrival.
pub fn schedule_rows(
    stops: &[RestStopRecommendation],
    departure: Option<DateTime<Utc>>,
) -> Vec<RestStopRow> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| RestStopRow {
            sequence: index + 1,
            kind: stop.rest_type.kind,
            icon: rest_icon(stop.rest_type.kind),
            type_label: stop.rest_type.display_label().to_string(),
            duration_label: format_duration(stop.recommended_rest_duration_minutes),
            distance_label: format_distance_km(stop.distance_from_start_km),
            time_from_departure: time_from_departure(stop, departure),
            arrival_label: format_arrival(stop.expected_arrival_at_stop),
            location_name: stop
                .location_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            reason: stop.reason.clone(),
            facilities: available_facilities(stop),
        })
        .collect()
}

/// Rest schedule with the driver compliance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestPlan {
    pub rows: Vec<RestStopRow>,
    pub total_rest_minutes: u32,
    pub total_rest_label: String,
    pub driving_time_label: String,
    pub advisories: Vec<String>,
}

/// Compliance lines for a driver rest analysis. Unknown flags add nothing.
pub fn rest_advisories(analysis: &DriverRestAnalysis) -> Vec<String> {
    let mut lines = Vec::new();
    if analysis.is_compliant == Some(false) {
        lines.push("Маршрут нарушает режим труда и отдыха водителя.".to_string());
    }
    if analysis.requires_rest == Some(true) {
        lines.push("Водителю требуется отдых в пути.".to_string());
    }
    lines.extend(analysis.warnings.iter().cloned());
    lines
}

pub fn rest_plan(analysis: &DriverRestAnalysis, departure: Option<DateTime<Utc>>) -> RestPlan {
    let total_rest_minutes = analysis
        .rest_stops
        .iter()
        .map(|stop| stop.recommended_rest_duration_minutes)
        .fold(0u32, u32::saturating_add);
    RestPlan {
        rows: schedule_rows(&analysis.rest_stops, departure),
        total_rest_minutes,
        total_rest_label: format_duration(total_rest_minutes),
        driving_time_label: analysis
            .total_driving_minutes
            .map(format_duration)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        advisories: rest_advisories(analysis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestType;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn stop(label: &str, minutes: u32, distance: f64) -> RestStopRecommendation {
        RestStopRecommendation {
            rest_type: RestType::from(label.to_string()),
            recommended_rest_duration_minutes: minutes,
            reason: String::new(),
            distance_from_start_km: distance,
            time_from_departure: String::new(),
            expected_arrival_at_stop: None,
            location_name: None,
            facilities: None,
        }
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0м");
        assert_eq!(format_duration(59), "59м");
        assert_eq!(format_duration(60), "1ч 0м");
        assert_eq!(format_duration(125), "2ч 5м");
    }

    #[test]
    fn rows_keep_input_order() {
        let stops = vec![
            stop("Ежедневный отдых", 540, 800.0),
            stop("Короткий перерыв", 45, 300.0),
            stop("Короткий перерыв", 45, 300.0),
            stop("WEEKLY_REST", 2700, 120.0),
        ];
        let rows = schedule_rows(&stops, None);
        let sequence: Vec<_> = rows.iter().map(|r| (r.sequence, r.kind)).collect();
        assert_eq!(
            sequence,
            vec![
                (1, RestKind::DailyRest),
                (2, RestKind::ShortBreak),
                (3, RestKind::ShortBreak),
                (4, RestKind::WeeklyRest),
            ]
        );
        assert_eq!(rows[0].icon, RestIcon::Bed);
        assert_eq!(rows[1].icon, RestIcon::Coffee);
        assert_eq!(rows[3].type_label, "Еженедельный отдых");
        assert_eq!(rows[3].duration_label, "45ч 0м");
    }

    #[test]
    fn elapsed_label_from_departure() {
        let departure = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
        let mut first = stop("Короткий перерыв", 45, 360.0);
        first.expected_arrival_at_stop = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());

        let rows = schedule_rows(&[first.clone()], Some(departure));
        assert_eq!(rows[0].time_from_departure, "4ч 30м");
        assert_eq!(rows[0].arrival_label, "10:30");

        first.time_from_departure = "через 4,5 часа".to_string();
        let rows = schedule_rows(&[first], Some(departure));
        assert_eq!(rows[0].time_from_departure, "через 4,5 часа");

        let before = Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).unwrap();
        assert_eq!(elapsed_label(departure, before), None);
    }

    #[test]
    fn missing_optional_fields_use_placeholder() {
        let rows = schedule_rows(&[stop("Короткий перерыв", 15, f64::NAN)], None);
        assert_eq!(rows[0].distance_label, "—");
        assert_eq!(rows[0].arrival_label, "—");
        assert_eq!(rows[0].location_name, "—");
        assert_eq!(rows[0].time_from_departure, "—");
    }

    #[test]
    fn only_available_facilities_are_listed() {
        let mut with_facilities = stop("Ежедневный отдых", 540, 500.0);
        let mut facilities = BTreeMap::new();
        facilities.insert("shower".to_string(), true);
        facilities.insert("parking".to_string(), true);
        facilities.insert("cafe".to_string(), false);
        with_facilities.facilities = Some(facilities);
        assert_eq!(
            available_facilities(&with_facilities),
            vec!["parking".to_string(), "shower".to_string()]
        );
    }

    #[test]
    fn rest_plan_totals_and_advisories() {
        let analysis = DriverRestAnalysis {
            is_compliant: Some(false),
            requires_rest: Some(true),
            total_driving_minutes: Some(610),
            warnings: vec!["Превышено время непрерывного вождения".to_string()],
            rest_stops: vec![stop("Короткий перерыв", 45, 300.0), stop("Ежедневный отдых", 540, 700.0)],
        };
        let plan = rest_plan(&analysis, None);
        assert_eq!(plan.total_rest_minutes, 585);
        assert_eq!(plan.total_rest_label, "9ч 45м");
        assert_eq!(plan.driving_time_label, "10ч 10м");
        assert_eq!(plan.advisories.len(), 3);

        let unknown = rest_plan(&DriverRestAnalysis::default(), None);
        assert!(unknown.advisories.is_empty());
        assert_eq!(unknown.driving_time_label, "—");
    }
}
