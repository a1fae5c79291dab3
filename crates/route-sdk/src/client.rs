//! Client for the route analysis backend.

use crate::config::Config;
use crate::poi::PoiQuery;
use chrono::{DateTime, Utc};
use reqwest::Url;
use route_core::models::{
    DriverRestAnalysis, FuelStation, RouteAnalytics, RouteSnapshot, TollSegment, WeatherPoint,
};
use route_core::Place;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Client for the route analysis REST API.
#[derive(Debug, Clone)]
pub struct RouteClient {
    pub(crate) base_url: Url,
    pub(crate) client: reqwest::Client,
}

impl RouteClient {
    /// Create a client with default HTTP settings.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base(base_url)?,
            client: reqwest::Client::new(),
        })
    }

    /// Create a client with the configured URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            base_url: parse_base(&config.api_url)?,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(segments)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn route_analytics(&self, route_id: &str) -> Result<RouteAnalytics, ClientError> {
        self.get_json(&["api", "routes", route_id, "analytics"], &[])
            .await
    }

    pub async fn route_weather(&self, route_id: &str) -> Result<Vec<WeatherPoint>, ClientError> {
        self.get_json(&["api", "routes", route_id, "weather"], &[])
            .await
    }

    pub async fn fuel_stations(&self, route_id: &str) -> Result<Vec<FuelStation>, ClientError> {
        self.get_json(&["api", "routes", route_id, "fuel-stations"], &[])
            .await
    }

    pub async fn toll_segments(&self, route_id: &str) -> Result<Vec<TollSegment>, ClientError> {
        self.get_json(&["api", "routes", route_id, "tolls"], &[])
            .await
    }

    pub async fn rest_analysis(&self, route_id: &str) -> Result<DriverRestAnalysis, ClientError> {
        self.get_json(&["api", "routes", route_id, "rest-analysis"], &[])
            .await
    }

    /// Search places by text or around a point.
    pub async fn search_places(&self, query: &PoiQuery) -> Result<Vec<Place>, ClientError> {
        let params = query.params()?;
        self.get_json(&query.endpoint(), &params).await
    }

    /// Fetch every part of a route snapshot concurrently.
    ///
    /// A failed part is logged and left empty; the snapshot is returned even
    /// if every request failed.
    pub async fn fetch_snapshot(
        &self,
        route_id: &str,
        departure_time: Option<DateTime<Utc>>,
    ) -> RouteSnapshot {
        let (analytics, weather, fuel_stations, toll_segments, rest_analysis) = tokio::join!(
            self.route_analytics(route_id),
            self.route_weather(route_id),
            self.fuel_stations(route_id),
            self.toll_segments(route_id),
            self.rest_analysis(route_id),
        );

        let snapshot = RouteSnapshot {
            route_id: Some(route_id.to_string()),
            departure_time,
            path: Vec::new(),
            analytics: keep("analytics", route_id, analytics),
            weather: keep("weather", route_id, weather),
            fuel_stations: keep("fuel stations", route_id, fuel_stations),
            toll_segments: keep("toll segments", route_id, toll_segments),
            rest_analysis: keep("rest analysis", route_id, rest_analysis),
        };
        tracing::info!(
            route_id,
            analytics = snapshot.analytics.is_some(),
            weather = snapshot.weather.is_some(),
            fuel = snapshot.fuel_stations.is_some(),
            tolls = snapshot.toll_segments.is_some(),
            rest = snapshot.rest_analysis.is_some(),
            "fetched route snapshot"
        );
        snapshot
    }
}

fn keep<T>(part: &str, route_id: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(route_id, part, error = %e, "route snapshot part unavailable");
            None
        }
    }
}

fn parse_base(base_url: &str) -> Result<Url, ClientError> {
    let url = Url::parse(base_url).map_err(|e| ClientError::BaseUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::BaseUrl(base_url.to_string()));
    }
    Ok(url)
}
