//! Route risk and cost aggregation for the logistics dashboard.
//!
//! Pure, synchronous transforms from backend route snapshots to display-ready
//! figures: distances, cost totals, risk bands, weather averages and the rest
//! schedule.

pub mod cost;
pub mod format;
pub mod locate;
pub mod models;
pub mod overview;
pub mod places;
pub mod rest_stops;
pub mod risk;
pub mod rules;
pub mod spatial;
pub mod weather;

pub use cost::{
    average_price_per_liter, check_cost_breakdown, compare_to_average, total_toll_cost,
    CostConsistency, PriceComparison,
};
pub use locate::{locate_or_fallback, LocateError, LocationOrigin, LocationSource};
pub use models::{
    CostBreakdown, DriverRestAnalysis, FuelStation, GeoPoint, RestKind, RestStopRecommendation,
    RouteAnalytics, RouteSnapshot, TollSegment, WeatherPoint, WeatherRiskLevel,
};
pub use overview::RouteOverview;
pub use places::{Place, PlaceAddress};
pub use rest_stops::{format_duration, schedule_rows};
pub use risk::{classify_risk, classify_risk_with_rules, DisplayVariant, RiskBand};
pub use rules::RiskRules;
pub use spatial::{distance_km, GeoError};
pub use weather::{average_temperature, average_wind_speed, summarize_weather};
