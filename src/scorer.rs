//! Footprint Scorer - coordinator for building analytics reports
//!
//! Composes the seven independent analytics components into one
//! [`AnalyticsReport`].

use rand::Rng;

use crate::analytics::*;
use crate::input::PredictionInput;
use crate::predictor::RawEstimate;
use crate::report::AnalyticsReport;

/// Main footprint scorer
#[derive(Debug, Clone, Copy)]
pub struct FootprintScorer {
    base_year: i32,
}

impl Default for FootprintScorer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_YEAR)
    }
}

impl FootprintScorer {
    /// `base_year` is the first year of the projected trajectory
    pub fn new(base_year: i32) -> Self {
        Self { base_year }
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Build a report, drawing the cosmetic confidence from the thread RNG
    pub fn score(&self, estimate: RawEstimate, input: &PredictionInput) -> AnalyticsReport {
        self.score_with_rng(estimate, input, &mut rand::thread_rng())
    }

    /// Build a report with a caller-supplied RNG (reproducible in tests)
    pub fn score_with_rng<R: Rng + ?Sized>(
        &self,
        estimate: RawEstimate,
        input: &PredictionInput,
        rng: &mut R,
    ) -> AnalyticsReport {
        let raw = estimate.kg();
        let score = normalize_score(raw);

        AnalyticsReport {
            score,
            breakdown: allocate_breakdown(raw),
            comparison: compare_benchmarks(raw),
            badge: classify_badge(score),
            trajectory: project_trajectory(raw, self.base_year),
            recommendations: recommend(raw, input),
            model_accuracy: generate_confidence_with(rng),
        }
    }
}
