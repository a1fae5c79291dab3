//! Risk thresholds for route classification.

use serde::{Deserialize, Serialize};

/// Configuration for risk banding and advisories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRules {
    /// Scores strictly above this are HIGH
    pub high_above: i64,
    /// Scores strictly above this (and not HIGH) are MEDIUM
    pub medium_above: i64,
    /// Weather/road-quality scores strictly above this add an advisory line
    pub advisory_above: i64,
    /// Allowed difference between a reported cost total and the sum of its parts
    pub cost_tolerance: f64,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            high_above: 70,
            medium_above: 40,
            advisory_above: 50,
            cost_tolerance: 0.01,
        }
    }
}
