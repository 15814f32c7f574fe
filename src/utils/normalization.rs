//! Normalization Utilities
//!
//! Shared numeric helpers for turning raw emission figures into bounded,
//! display-ready values.

/// Round half up: `floor(x + 0.5)`.
///
/// Identical to ties-away-from-zero for non-negative inputs. For negative
/// inputs ties move toward positive infinity (-2.5 -> -2), which keeps signed
/// benchmark percentages consistent with the figures users have already seen.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a fixed number of decimal places using [`round_half_up`].
#[inline]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

/// Linear inverse normalization onto 0-100
///
/// Algorithm:
/// 1. `raw = 100 - (value - min) / (max - min) × 100`
/// 2. Clamp to [0, 100] (values outside [min, max] are absorbed, never rejected)
///
/// Lower inputs map to higher scores. A degenerate range (`max <= min`)
/// collapses to a step at `min`.
pub fn linear_inverse_normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return if value <= min { 100.0 } else { 0.0 };
    }

    let raw = 100.0 - ((value - min) / span) * 100.0;
    raw.clamp(0.0, 100.0)
}

/// Signed percentage deviation of `value` from `reference`
pub fn percent_deviation(value: f64, reference: f64) -> f64 {
    ((value - reference) / reference) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_relative_eq!(round_to_decimals(95.25, 1), 95.3, epsilon = 1e-9);
        assert_relative_eq!(round_to_decimals(97.79, 1), 97.8, epsilon = 1e-9);
        assert_relative_eq!(round_to_decimals(94.0, 1), 94.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_inverse_normalize_edge_cases() {
        // Endpoints
        assert_relative_eq!(linear_inverse_normalize(500.0, 500.0, 5000.0), 100.0);
        assert_relative_eq!(linear_inverse_normalize(5000.0, 500.0, 5000.0), 0.0);

        // Midpoint
        assert_relative_eq!(linear_inverse_normalize(2750.0, 500.0, 5000.0), 50.0, epsilon = 1e-9);

        // Outside the range clamps
        assert_relative_eq!(linear_inverse_normalize(0.0, 500.0, 5000.0), 100.0);
        assert_relative_eq!(linear_inverse_normalize(12_000.0, 500.0, 5000.0), 0.0);
    }

    #[test]
    fn test_linear_inverse_normalize_degenerate_range() {
        assert_eq!(linear_inverse_normalize(10.0, 10.0, 10.0), 100.0);
        assert_eq!(linear_inverse_normalize(11.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn test_percent_deviation_sign() {
        assert_relative_eq!(percent_deviation(950.0, 1900.0), -50.0);
        assert_relative_eq!(percent_deviation(3800.0, 1900.0), 100.0);
        assert_relative_eq!(percent_deviation(1900.0, 1900.0), 0.0);
    }
}
