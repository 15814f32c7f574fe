//! Analytics components for footprint reports
//!
//! Each component is a pure function of the raw estimate (and, for
//! recommendations, the resolved input). None reads another's output, so
//! they can run in any order.

pub mod score;
pub mod recommendations;
pub mod breakdown;
pub mod benchmark;
pub mod badge;
pub mod trajectory;
pub mod confidence;

// Re-export component entry points
pub use score::{normalize_score, SCORE_MAX_EMISSION, SCORE_MIN_EMISSION};
pub use recommendations::{apply_rules, recommend, RecommendationRule, DEFAULT_RULES};
pub use breakdown::{allocate_breakdown, Breakdown};
pub use benchmark::{compare_benchmarks, Comparison, GLOBAL_AVERAGE, INDIA_AVERAGE};
pub use badge::{classify_badge, Badge};
pub use trajectory::{project_trajectory, TrajectoryPoint, DEFAULT_BASE_YEAR};
pub use confidence::{generate_confidence, generate_confidence_with};
