//! Point-of-interest search queries.
//!
//! Text search and nearby search hit two near-identical geocoding endpoints;
//! [`PoiQuery`] picks the endpoint and its query parameters.

use crate::client::ClientError;
use route_core::GeoPoint;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const MAX_RESULTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PoiQuery {
    /// Free-text search, optionally biased towards a point
    Text {
        query: String,
        #[serde(default)]
        near: Option<GeoPoint>,
    },
    /// Places of a category around a center
    Nearby {
        center: GeoPoint,
        radius_km: f64,
        #[serde(default)]
        category: Option<String>,
    },
}

impl PoiQuery {
    pub fn text(query: impl Into<String>) -> Self {
        Self::Text {
            query: query.into(),
            near: None,
        }
    }

    pub fn nearby(center: GeoPoint, category: Option<String>) -> Self {
        Self::Nearby {
            center,
            radius_km: DEFAULT_RADIUS_KM,
            category,
        }
    }

    pub fn endpoint(&self) -> [&'static str; 3] {
        match self {
            Self::Text { .. } => ["api", "geocoding", "search"],
            Self::Nearby { .. } => ["api", "geocoding", "nearby"],
        }
    }

    /// Validate and flatten into query parameters.
    pub fn params(&self) -> Result<Vec<(&'static str, String)>, ClientError> {
        let mut params = Vec::new();
        match self {
            Self::Text { query, near } => {
                let query = query.trim();
                if query.is_empty() {
                    return Err(ClientError::InvalidRequest(
                        "search text is empty".to_string(),
                    ));
                }
                params.push(("q", query.to_string()));
                if let Some(point) = near {
                    point
                        .validate()
                        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    params.push(("lat", point.latitude.to_string()));
                    params.push(("lon", point.longitude.to_string()));
                }
            }
            Self::Nearby {
                center,
                radius_km,
                category,
            } => {
                center
                    .validate()
                    .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                if !radius_km.is_finite() || *radius_km <= 0.0 {
                    return Err(ClientError::InvalidRequest(format!(
                        "invalid search radius {radius_km}"
                    )));
                }
                params.push(("lat", center.latitude.to_string()));
                params.push(("lon", center.longitude.to_string()));
                params.push(("radius", radius_km.to_string()));
                if let Some(category) = category.as_deref().filter(|c| !c.is_empty()) {
                    params.push(("category", category.to_string()));
                }
            }
        }
        params.push(("limit", MAX_RESULTS.to_string()));
        Ok(params)
    }
}
