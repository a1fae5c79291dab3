//! Client configuration from environment.

use route_core::locate::DEFAULT_FALLBACK;
use route_core::GeoPoint;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    /// Used when the user's location cannot be acquired
    pub fallback_location: GeoPoint,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
            fallback_location: DEFAULT_FALLBACK,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing or unparseable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_f64 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok());

        let fallback_location = match (
            parse_f64("ROUTE_FALLBACK_LAT"),
            parse_f64("ROUTE_FALLBACK_LON"),
        ) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).unwrap_or(defaults.fallback_location),
            _ => defaults.fallback_location,
        };

        Self {
            api_url: lookup("ROUTE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout: lookup("ROUTE_API_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            fallback_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.fallback_location, DEFAULT_FALLBACK);
    }

    #[test]
    fn values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTE_API_URL", "https://logistics.example.com/"),
            ("ROUTE_API_TIMEOUT_SECS", "3"),
            ("ROUTE_FALLBACK_LAT", "56.8389"),
            ("ROUTE_FALLBACK_LON", "60.6057"),
        ]));
        assert_eq!(config.api_url, "https://logistics.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.fallback_location.latitude, 56.8389);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTE_API_TIMEOUT_SECS", "soon"),
            ("ROUTE_FALLBACK_LAT", "200"),
            ("ROUTE_FALLBACK_LON", "10"),
        ]));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.fallback_location, DEFAULT_FALLBACK);
    }
}
