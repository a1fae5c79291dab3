//! Fuel, toll and cost-breakdown aggregation.
//!
//! Empty inputs aggregate to `0.0`; callers decide between "no data" and "zero"
//! by looking at the input length, which is why the summaries carry counts.
//! Non-finite inputs aggregate to `NaN`.

use crate::format::{format_currency, format_percent, PLACEHOLDER};
use crate::models::{CostBreakdown, FuelStation, TollSegment};
use serde::{Deserialize, Serialize};

fn all_finite(mut values: impl Iterator<Item = f64>) -> bool {
    values.all(f64::is_finite)
}

/// Arithmetic mean of station prices. `0.0` for no stations.
pub fn average_price_per_liter(stations: &[FuelStation]) -> f64 {
    if stations.is_empty() {
        return 0.0;
    }
    if !all_finite(stations.iter().map(|s| s.price_per_liter)) {
        return f64::NAN;
    }
    let sum = stations.iter().fold(0.0, |acc, s| acc + s.price_per_liter);
    sum / stations.len() as f64
}

/// Sum of toll costs. `0.0` for no segments, which means "no tolls".
pub fn total_toll_cost(segments: &[TollSegment]) -> f64 {
    if !all_finite(segments.iter().map(|s| s.cost)) {
        return f64::NAN;
    }
    segments.iter().fold(0.0, |acc, s| acc + s.cost)
}

/// Station price relative to the route average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceComparison {
    /// Strictly below average
    Cheaper,
    /// At or above average
    NotCheaper,
    /// Price or average is not a finite number
    Unknown,
}

pub fn compare_to_average(station: &FuelStation, average: f64) -> PriceComparison {
    if !station.price_per_liter.is_finite() || !average.is_finite() {
        PriceComparison::Unknown
    } else if station.price_per_liter < average {
        PriceComparison::Cheaper
    } else {
        PriceComparison::NotCheaper
    }
}

/// Cheapest station; the first one wins on ties. Non-finite prices are skipped.
pub fn cheapest_station(stations: &[FuelStation]) -> Option<&FuelStation> {
    stations
        .iter()
        .filter(|s| s.price_per_liter.is_finite())
        .min_by(|a, b| a.price_per_liter.total_cmp(&b.price_per_liter))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRow {
    pub station_name: String,
    pub fuel_type: String,
    pub price_label: String,
    pub distance_from_route_km: f64,
    pub comparison: PriceComparison,
    /// Average minus this price, positive when the station is cheaper
    pub savings_per_liter: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelSummary {
    pub station_count: usize,
    pub average_price_per_liter: f64,
    /// `"—"` when there are no stations or prices are invalid
    pub average_label: String,
    pub price_spread: f64,
    pub cheapest_station: Option<String>,
    pub stations: Vec<StationRow>,
}

impl FuelSummary {
    pub fn has_data(&self) -> bool {
        self.station_count > 0
    }
}

/// Per-station comparison against the route average, in input order.
pub fn summarize_fuel(stations: &[FuelStation]) -> FuelSummary {
    let average = average_price_per_liter(stations);
    let average_label = if stations.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format_currency(average)
    };

    let finite_prices = stations
        .iter()
        .map(|s| s.price_per_liter)
        .filter(|p| p.is_finite());
    let (min, max) = finite_prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });
    let price_spread = if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    };

    let rows = stations
        .iter()
        .map(|station| StationRow {
            station_name: station.station_name.clone(),
            fuel_type: station.fuel_type.clone(),
            price_label: format_currency(station.price_per_liter),
            distance_from_route_km: station.distance_from_route_km,
            comparison: compare_to_average(station, average),
            savings_per_liter: average - station.price_per_liter,
        })
        .collect();

    FuelSummary {
        station_count: stations.len(),
        average_price_per_liter: average,
        average_label,
        price_spread,
        cheapest_station: cheapest_station(stations).map(|s| s.station_name.clone()),
        stations: rows,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TollSummary {
    pub segment_count: usize,
    pub total_cost: f64,
    /// `"0.00 ₽"` for a route without tolls
    pub total_label: String,
    pub total_distance_km: f64,
    /// `None` when the tolled distance is zero or unknown
    pub cost_per_km: Option<f64>,
}

/// Toll totals. Only call this when the toll list has actually been received.
pub fn summarize_tolls(segments: &[TollSegment]) -> TollSummary {
    let total_cost = total_toll_cost(segments);
    let total_distance_km = segments.iter().fold(0.0, |acc, s| acc + s.distance_km);
    let cost_per_km = if total_distance_km.is_finite() && total_distance_km > 0.0 {
        Some(total_cost / total_distance_km).filter(|v| v.is_finite())
    } else {
        None
    };
    TollSummary {
        segment_count: segments.len(),
        total_cost,
        total_label: format_currency(total_cost),
        total_distance_km,
        cost_per_km,
    }
}

/// Whether a reported total agrees with the sum of its parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CostConsistency {
    Consistent,
    Mismatch { reported: f64, computed: f64 },
    Unknown,
}

/// Compare `total` against `fuel + tolls + driver`.
///
/// The reported total is never replaced; a mismatch is only reported and logged.
pub fn check_cost_breakdown(breakdown: &CostBreakdown, tolerance: f64) -> CostConsistency {
    let parts = [breakdown.fuel, breakdown.tolls, breakdown.driver, breakdown.total];
    if !all_finite(parts.into_iter()) {
        return CostConsistency::Unknown;
    }
    let computed = breakdown.fuel + breakdown.tolls + breakdown.driver;
    if (computed - breakdown.total).abs() <= tolerance {
        CostConsistency::Consistent
    } else {
        tracing::warn!(
            reported = breakdown.total,
            computed,
            "cost breakdown total does not match the sum of its parts"
        );
        CostConsistency::Mismatch {
            reported: breakdown.total,
            computed,
        }
    }
}

/// Display-ready cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostView {
    pub fuel_label: String,
    pub tolls_label: String,
    pub driver_label: String,
    /// Always the backend-reported total
    pub total_label: String,
    pub fuel_share: String,
    pub tolls_share: String,
    pub driver_share: String,
    pub consistency: CostConsistency,
}

fn share_of(part: f64, total: f64) -> String {
    if total.is_finite() && total > 0.0 {
        format_percent(part / total * 100.0)
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn cost_view(breakdown: &CostBreakdown, tolerance: f64) -> CostView {
    CostView {
        fuel_label: format_currency(breakdown.fuel),
        tolls_label: format_currency(breakdown.tolls),
        driver_label: format_currency(breakdown.driver),
        total_label: format_currency(breakdown.total),
        fuel_share: share_of(breakdown.fuel, breakdown.total),
        tolls_share: share_of(breakdown.tolls, breakdown.total),
        driver_share: share_of(breakdown.driver, breakdown.total),
        consistency: check_cost_breakdown(breakdown, tolerance),
    }
}
