//! Route SDK - backend integration for the logistics dashboard.
//!
//! Fetches route snapshots and geocoding results from the route analysis API.

pub mod client;
pub mod config;
pub mod poi;

pub use client::{ClientError, RouteClient};
pub use config::Config;
pub use poi::PoiQuery;
pub use route_core::RouteSnapshot;
