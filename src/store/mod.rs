//! Prediction history persistence
//!
//! The store is an external collaborator from the scorer's point of view:
//! it receives a subset of each report and hands records back per user,
//! newest first.

pub mod jsonl;
pub mod memory;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::PredictionInput;
use crate::predictor::RawEstimate;
use crate::report::AnalyticsReport;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

/// Persisted subset of a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub user_id: String,
    pub body_type: String,
    pub sex: String,
    pub diet: String,
    pub predicted_carbon_emission: f64,
    pub sustainability_score: u8,
    pub model_accuracy: f64,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        user_id: &str,
        input: &PredictionInput,
        estimate: RawEstimate,
        report: &AnalyticsReport,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            body_type: input.body_type.clone(),
            sex: input.sex.clone(),
            diet: input.diet.clone(),
            predicted_carbon_emission: estimate.kg(),
            sustainability_score: report.score,
            model_accuracy: report.model_accuracy,
            recommendations: report.recommendations.clone(),
            created_at,
        }
    }
}

/// Storage backend for prediction records
pub trait PredictionStore: Send + Sync {
    /// Persist one record
    fn insert(&self, record: PredictionRecord) -> Result<()>;

    /// All records for `user_id`, newest `created_at` first
    /// (equal timestamps: most recently inserted first)
    fn history(&self, user_id: &str) -> Result<Vec<PredictionRecord>>;
}
