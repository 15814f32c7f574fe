//! Utility modules for footprint scoring
//!
//! Contains shared functionality used across multiple analytics components:
//! - Normalization: bounded score mapping and rounding rules

pub mod normalization;

// Re-export commonly used helpers
pub use normalization::{
    linear_inverse_normalize, percent_deviation, round_half_up, round_to_decimals,
};
