//! Route CLI - reporting tools for route risk and cost figures.
//!
//! - route-report: renders the overview of a saved or fetched route snapshot

pub mod render;
pub mod snapshot;

pub use render::render_overview;
pub use snapshot::load_snapshot;
