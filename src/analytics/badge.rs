//! ANALYTICS 5: BADGE CLASSIFIER
//!
//! Three-tier qualitative label derived from the sustainability score.
//! Each tier includes its lower bound.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score earning [`Badge::EcoChampion`]
pub const CHAMPION_MIN_SCORE: u8 = 80;

/// Lowest score earning [`Badge::EcoConscious`]
pub const CONSCIOUS_MIN_SCORE: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Eco Champion")]
    EcoChampion,
    #[serde(rename = "Eco Conscious")]
    EcoConscious,
    #[serde(rename = "Eco Beginner")]
    EcoBeginner,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::EcoChampion => "Eco Champion",
            Badge::EcoConscious => "Eco Conscious",
            Badge::EcoBeginner => "Eco Beginner",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_badge(score: u8) -> Badge {
    match score {
        s if s >= CHAMPION_MIN_SCORE => Badge::EcoChampion,
        s if s >= CONSCIOUS_MIN_SCORE => Badge::EcoConscious,
        _ => Badge::EcoBeginner,
    }
}
