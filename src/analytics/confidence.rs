//! ANALYTICS 7: CONFIDENCE SCORE GENERATOR
//!
//! Produces the `modelAccuracy` figure shown next to each report.
//! This is a cosmetic value drawn uniformly from a fixed band on every call.
//! It is not derived from the estimate or from any evaluation of the model
//! and must not be read as a calibration metric.

use rand::Rng;

use crate::utils::round_to_decimals;

/// Lower edge of the cosmetic confidence band (percent)
pub const CONFIDENCE_FLOOR: f64 = 94.0;

/// Width of the cosmetic confidence band (percent)
pub const CONFIDENCE_SPAN: f64 = 3.8;

/// Cosmetic confidence from the thread-local RNG
pub fn generate_confidence() -> f64 {
    generate_confidence_with(&mut rand::thread_rng())
}

/// Cosmetic confidence in [94.0, 97.8], one decimal place
pub fn generate_confidence_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let draw: f64 = rng.gen();
    round_to_decimals(CONFIDENCE_FLOOR + draw * CONFIDENCE_SPAN, 1)
}
