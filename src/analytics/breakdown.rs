//! ANALYTICS 3: BREAKDOWN ALLOCATOR
//!
//! Splits the total emission across five fixed lifestyle categories.
//! Each share is rounded on its own, so the parts may drift from the rounded
//! total by up to one unit per category. The drift is kept as is.

use serde::{Deserialize, Serialize};

use crate::utils::round_half_up;

pub const TRANSPORT_WEIGHT: f64 = 0.32;
pub const ENERGY_WEIGHT: f64 = 0.28;
pub const DIET_WEIGHT: f64 = 0.18;
pub const WASTE_WEIGHT: f64 = 0.12;
pub const LIFESTYLE_WEIGHT: f64 = 0.10;

/// Per-category emission in kg CO2e / year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub transport: u64,
    pub energy: u64,
    pub diet: u64,
    pub waste: u64,
    pub lifestyle: u64,
}

impl Breakdown {
    pub fn total(&self) -> u64 {
        self.transport + self.energy + self.diet + self.waste + self.lifestyle
    }
}

pub fn allocate_breakdown(raw_estimate: f64) -> Breakdown {
    let share = |weight: f64| round_half_up(raw_estimate * weight).max(0.0) as u64;

    Breakdown {
        transport: share(TRANSPORT_WEIGHT),
        energy: share(ENERGY_WEIGHT),
        diet: share(DIET_WEIGHT),
        waste: share(WASTE_WEIGHT),
        lifestyle: share(LIFESTYLE_WEIGHT),
    }
}
