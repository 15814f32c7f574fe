//! Analytics report types
//!
//! The serialized field names are the public contract shared with clients and
//! the history store; do not rename them.

use serde::{Deserialize, Serialize};

use crate::analytics::{Badge, Breakdown, Comparison, TrajectoryPoint};

/// Complete analytics for a single prediction
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Sustainability score (0-100, higher is better)
    pub score: u8,
    pub breakdown: Breakdown,
    pub comparison: Comparison,
    pub badge: Badge,
    /// Five yearly projections starting at the base year
    pub trajectory: Vec<TrajectoryPoint>,
    /// Never empty
    pub recommendations: Vec<String>,
    /// Cosmetic confidence figure, regenerated per report; not a real metric
    pub model_accuracy: f64,
}
