//! ANALYTICS 6: TRAJECTORY PROJECTOR
//!
//! Five-year forward projection using fixed additive growth multipliers
//! (+3 % of the base value per year, not compounded). Presentational only:
//! no historical trend feeds into it.

use serde::{Deserialize, Serialize};

use crate::utils::round_half_up;

/// First projected year unless configured otherwise
pub const DEFAULT_BASE_YEAR: i32 = 2026;

/// Multiplier applied to the base estimate for each successive year
pub const GROWTH_MULTIPLIERS: [f64; 5] = [1.00, 1.03, 1.06, 1.09, 1.12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: i32,
    pub emission: u64,
}

pub fn project_trajectory(raw_estimate: f64, base_year: i32) -> Vec<TrajectoryPoint> {
    GROWTH_MULTIPLIERS
        .iter()
        .zip(base_year..)
        .map(|(multiplier, year)| TrajectoryPoint {
            year,
            emission: round_half_up(raw_estimate * multiplier).max(0.0) as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_thousand() {
        let points = project_trajectory(1000.0, DEFAULT_BASE_YEAR);
        let emissions: Vec<u64> = points.iter().map(|p| p.emission).collect();
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();

        assert_eq!(emissions, vec![1000, 1030, 1060, 1090, 1120]);
        assert_eq!(years, vec![2026, 2027, 2028, 2029, 2030]);
    }

    #[test]
    fn test_growth_is_linear_not_compounded() {
        let points = project_trajectory(10_000.0, 2030);
        // 1.03^4 would give 11255
        assert_eq!(points[4].emission, 11_200);
        assert_eq!(points[0].year, 2030);
        assert_eq!(points[4].year, 2034);
    }

    #[test]
    fn test_first_point_is_rounded_estimate() {
        let points = project_trajectory(1234.5, DEFAULT_BASE_YEAR);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].emission, 1235);
    }
}
