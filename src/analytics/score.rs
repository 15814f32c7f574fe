//! ANALYTICS 1: SCORE NORMALIZER
//!
//! Maps the raw annual emission onto a 0-100 sustainability score by inverse
//! linear normalization between fixed reference points. Lower emissions give
//! higher scores; estimates outside [MIN, MAX] clamp instead of erroring.

use crate::utils::{linear_inverse_normalize, round_half_up};

/// Emission (kg CO2e / year) that earns a perfect score
pub const SCORE_MIN_EMISSION: f64 = 500.0;

/// Emission (kg CO2e / year) at which the score bottoms out
pub const SCORE_MAX_EMISSION: f64 = 5000.0;

/// Sustainability score in [0, 100]
pub fn normalize_score(raw_estimate: f64) -> u8 {
    let score = linear_inverse_normalize(raw_estimate, SCORE_MIN_EMISSION, SCORE_MAX_EMISSION);
    round_half_up(score) as u8
}
