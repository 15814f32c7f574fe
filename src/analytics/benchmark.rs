//! ANALYTICS 4: BENCHMARK COMPARATOR
//!
//! Signed percentage deviation from two fixed per-capita reference averages.
//! "Better than" is a strict comparison: matching an average is not better.

use serde::{Deserialize, Serialize};

use crate::utils::{percent_deviation, round_half_up};

/// India per-capita average (kg CO2e / year)
pub const INDIA_AVERAGE: u32 = 1900;

/// Global per-capita average (kg CO2e / year)
pub const GLOBAL_AVERAGE: u32 = 4600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub india_average: u32,
    pub global_average: u32,
    pub vs_india_percent: i64,
    pub vs_global_percent: i64,
    pub better_than_india: bool,
    pub better_than_global: bool,
}

pub fn compare_benchmarks(raw_estimate: f64) -> Comparison {
    let india = f64::from(INDIA_AVERAGE);
    let global = f64::from(GLOBAL_AVERAGE);

    Comparison {
        india_average: INDIA_AVERAGE,
        global_average: GLOBAL_AVERAGE,
        vs_india_percent: round_half_up(percent_deviation(raw_estimate, india)) as i64,
        vs_global_percent: round_half_up(percent_deviation(raw_estimate, global)) as i64,
        better_than_india: raw_estimate < india,
        better_than_global: raw_estimate < global,
    }
}
