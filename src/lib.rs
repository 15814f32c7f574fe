//! Footprint Scorer Rust Implementation
//!
//! Turns a single annual CO2-equivalent estimate from an external model into
//! a structured sustainability report.
//!
//! Module layout:
//! - `input`: lenient request decoding and default substitution
//! - `predictor/`: ordered feature schema and predictor subprocess runner
//! - `utils/`: normalization and rounding helpers
//! - `analytics/`: the seven independent report components
//! - `scorer`: composes components into an `AnalyticsReport`
//! - `store/`, `history`: prediction history persistence and dashboard summary
//! - `api_server` (feature `api`): Axum HTTP surface

pub mod utils;
pub mod input;
pub mod predictor;
pub mod analytics;
pub mod report;
pub mod scorer;
pub mod store;
pub mod history;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use input::{PredictionInput, PredictionRequest};
pub use predictor::{FeatureVector, PredictorConfig, PredictorError, PredictorRunner, RawEstimate};
pub use analytics::*;
pub use report::AnalyticsReport;
pub use scorer::FootprintScorer;
pub use store::{JsonlStore, MemoryStore, PredictionRecord, PredictionStore};
pub use history::HistorySummary;
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
