//! Route risk classification.
//!
//! Every screen that shows a risk score goes through [`classify_risk_with_rules`]
//! so the same score always lands in the same band. Band metadata (display
//! variant, recommendation) lives in one table.

use crate::models::RouteAnalytics;
use crate::rules::RiskRules;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Severity band of a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Badge style token for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariant {
    Default,
    Secondary,
    Destructive,
}

struct BandInfo {
    variant: DisplayVariant,
    label: &'static str,
    recommendation: &'static str,
}

const BAND_TABLE: [BandInfo; 3] = [
    BandInfo {
        variant: DisplayVariant::Default,
        label: "Низкий",
        recommendation: "Маршрут безопасен для движения.",
    },
    BandInfo {
        variant: DisplayVariant::Secondary,
        label: "Средний",
        recommendation: "Соблюдайте осторожность и следите за дорожной обстановкой.",
    },
    BandInfo {
        variant: DisplayVariant::Destructive,
        label: "Высокий",
        recommendation: "Рекомендуется отложить поездку или выбрать альтернативный маршрут.",
    },
];

const WEATHER_ADVISORY: &str = "Неблагоприятные погодные условия: снизьте скорость и увеличьте дистанцию.";
const ROAD_QUALITY_ADVISORY: &str = "Плохое качество дорожного покрытия: возможны задержки в пути.";

// Indexed by band discriminant.
fn band_info(band: RiskBand) -> &'static BandInfo {
    &BAND_TABLE[band as usize]
}

impl RiskBand {
    pub fn variant(&self) -> DisplayVariant {
        band_info(*self).variant
    }

    pub fn label(&self) -> &'static str {
        band_info(*self).label
    }

    pub fn recommendation(&self) -> &'static str {
        band_info(*self).recommendation
    }
}

/// Result of classifying a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    /// Score after clamping into [0, 100]
    pub score: i64,
    pub band: RiskBand,
    pub variant: DisplayVariant,
}

/// Clamp a backend score into [0, 100]. Out-of-range scores are not rejected.
pub fn clamp_score(score: i64) -> i64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Classify with the default thresholds (`> 70` HIGH, `> 40` MEDIUM).
pub fn classify_risk(score: i64) -> RiskClassification {
    classify_risk_with_rules(score, &RiskRules::default())
}

/// Classify using configured thresholds. Boundary values belong to the lower band.
pub fn classify_risk_with_rules(score: i64, rules: &RiskRules) -> RiskClassification {
    let score = clamp_score(score);
    let band = if score > rules.high_above {
        RiskBand::High
    } else if score > rules.medium_above {
        RiskBand::Medium
    } else {
        RiskBand::Low
    };
    RiskClassification {
        score,
        band,
        variant: band.variant(),
    }
}

/// Classified scores for a whole route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRiskAssessment {
    pub overall: RiskClassification,
    pub weather: RiskClassification,
    pub road_quality: RiskClassification,
    /// Band recommendation first, then any advisories
    pub recommendations: Vec<String>,
}

/// Classify all three route scores and build the recommendation lines.
///
/// The weather and road-quality advisories are independent of the overall band
/// and of each other.
pub fn assess_route(analytics: &RouteAnalytics, rules: &RiskRules) -> RouteRiskAssessment {
    let overall = classify_risk_with_rules(analytics.overall_risk, rules);
    let weather = classify_risk_with_rules(analytics.weather_risk, rules);
    let road_quality = classify_risk_with_rules(analytics.road_quality_risk, rules);

    let mut recommendations = vec![overall.band.recommendation().to_string()];
    if weather.score > rules.advisory_above {
        recommendations.push(WEATHER_ADVISORY.to_string());
    }
    if road_quality.score > rules.advisory_above {
        recommendations.push(ROAD_QUALITY_ADVISORY.to_string());
    }

    RouteRiskAssessment {
        overall,
        weather,
        road_quality,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytics(overall: i64, weather: i64, road: i64) -> RouteAnalytics {
        RouteAnalytics {
            distance: 100.0,
            duration: 90.0,
            overall_risk: overall,
            weather_risk: weather,
            road_quality_risk: road,
            weather_conditions: String::new(),
            cost_breakdown: None,
            rest_stops: Vec::new(),
        }
    }

    #[test]
    fn band_boundaries_belong_to_lower_band() {
        assert_eq!(classify_risk(70).band, RiskBand::Medium);
        assert_eq!(classify_risk(71).band, RiskBand::High);
        assert_eq!(classify_risk(40).band, RiskBand::Low);
        assert_eq!(classify_risk(41).band, RiskBand::Medium);
        assert_eq!(classify_risk(0).band, RiskBand::Low);
        assert_eq!(classify_risk(100).band, RiskBand::High);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let below = classify_risk(-15);
        assert_eq!(below.score, 0);
        assert_eq!(below.band, RiskBand::Low);

        let above = classify_risk(250);
        assert_eq!(above.score, 100);
        assert_eq!(above.band, RiskBand::High);
    }

    #[test]
    fn variant_follows_band_table() {
        assert_eq!(classify_risk(10).variant, DisplayVariant::Default);
        assert_eq!(classify_risk(50).variant, DisplayVariant::Secondary);
        assert_eq!(classify_risk(90).variant, DisplayVariant::Destructive);
    }

    #[test]
    fn custom_rules_move_boundaries() {
        let rules = RiskRules {
            high_above: 80,
            medium_above: 20,
            ..RiskRules::default()
        };
        assert_eq!(classify_risk_with_rules(75, &rules).band, RiskBand::Medium);
        assert_eq!(classify_risk_with_rules(21, &rules).band, RiskBand::Medium);
        assert_eq!(classify_risk_with_rules(20, &rules).band, RiskBand::Low);
    }

    #[test]
    fn advisories_are_additive() {
        let rules = RiskRules::default();

        let calm = assess_route(&analytics(20, 50, 50), &rules);
        assert_eq!(calm.recommendations.len(), 1);
        assert_eq!(calm.recommendations[0], RiskBand::Low.recommendation());

        let stormy = assess_route(&analytics(20, 51, 10), &rules);
        assert_eq!(stormy.recommendations.len(), 2);
        assert_eq!(stormy.recommendations[1], WEATHER_ADVISORY);

        let both = assess_route(&analytics(85, 90, 75), &rules);
        assert_eq!(both.overall.band, RiskBand::High);
        assert_eq!(
            both.recommendations,
            vec![
                RiskBand::High.recommendation().to_string(),
                WEATHER_ADVISORY.to_string(),
                ROAD_QUALITY_ADVISORY.to_string(),
            ]
        );
    }
}
