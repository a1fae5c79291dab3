//! Route overview view-model.
//!
//! Assembles every derived figure for one [`RouteSnapshot`]. Each section is
//! optional: an absent input leaves its section `None` (shown as pending or
//! "—") instead of failing the whole overview.

use crate::cost::{
    cost_view, summarize_fuel, summarize_tolls, CostConsistency, CostView, FuelSummary,
    TollSummary,
};
use crate::format::PLACEHOLDER;
use crate::models::{DriverRestAnalysis, RouteSnapshot};
use crate::rest_stops::{format_duration, rest_plan, RestPlan};
use crate::risk::{assess_route, RouteRiskAssessment};
use crate::rules::RiskRules;
use crate::spatial::{format_distance_km, path_length_km};
use crate::weather::{summarize_weather, WeatherSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOverview {
    pub route_id: Option<String>,
    pub distance_label: String,
    pub duration_label: String,
    /// Length of the drawn path, when one was supplied
    pub path_length_label: Option<String>,
    pub weather_conditions: Option<String>,
    pub risk: Option<RouteRiskAssessment>,
    pub costs: Option<CostView>,
    pub fuel: Option<FuelSummary>,
    pub tolls: Option<TollSummary>,
    pub weather: Option<WeatherSummary>,
    pub rest: Option<RestPlan>,
    /// Data-quality warnings to show next to the figures
    pub warnings: Vec<String>,
}

fn duration_label(minutes: f64) -> String {
    if (0.0..=u32::MAX as f64).contains(&minutes) {
        format_duration(minutes.round() as u32)
    } else {
        PLACEHOLDER.to_string()
    }
}

impl RouteOverview {
    pub fn build(snapshot: &RouteSnapshot, rules: &RiskRules) -> Self {
        let analytics = snapshot.analytics.as_ref();
        let mut warnings = Vec::new();

        let costs = analytics
            .and_then(|a| a.cost_breakdown.as_ref())
            .map(|breakdown| cost_view(breakdown, rules.cost_tolerance));
        if let Some(CostConsistency::Mismatch { reported, computed }) =
            costs.as_ref().map(|c| c.consistency)
        {
            warnings.push(format!(
                "Итоговая стоимость {reported:.2} ₽ не совпадает с суммой статей {computed:.2} ₽"
            ));
        }

        // A dedicated rest analysis wins over the stops embedded in the route.
        let rest = match (&snapshot.rest_analysis, analytics) {
            (Some(analysis), _) => Some(rest_plan(analysis, snapshot.departure_time)),
            (None, Some(a)) if !a.rest_stops.is_empty() => {
                let embedded = DriverRestAnalysis {
                    rest_stops: a.rest_stops.clone(),
                    ..DriverRestAnalysis::default()
                };
                Some(rest_plan(&embedded, snapshot.departure_time))
            }
            _ => None,
        };

        let path_length_label = (snapshot.path.len() >= 2)
            .then(|| format_distance_km(path_length_km(&snapshot.path)));

        let overview = Self {
            route_id: snapshot.route_id.clone(),
            distance_label: analytics
                .map(|a| format_distance_km(a.distance))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            duration_label: analytics
                .map(|a| duration_label(a.duration))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            path_length_label,
            weather_conditions: analytics
                .map(|a| a.weather_conditions.trim().to_string())
                .filter(|text| !text.is_empty()),
            risk: analytics.map(|a| assess_route(a, rules)),
            costs,
            fuel: snapshot.fuel_stations.as_deref().map(summarize_fuel),
            tolls: snapshot.toll_segments.as_deref().map(summarize_tolls),
            weather: snapshot.weather.as_deref().and_then(summarize_weather),
            rest,
            warnings,
        };

        tracing::debug!(
            route_id = ?overview.route_id,
            has_risk = overview.risk.is_some(),
            has_weather = overview.weather.is_some(),
            warnings = overview.warnings.len(),
            "built route overview"
        );
        overview
    }
}
