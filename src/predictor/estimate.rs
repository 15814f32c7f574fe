use serde::Serialize;
use thiserror::Error;

/// Annual CO2-equivalent kilograms produced by the predictor
///
/// Always finite and non-negative. No upper bound: only the derived score
/// is bounded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RawEstimate(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidEstimate {
    #[error("estimate is not a finite number: {0}")]
    NotFinite(f64),
    #[error("estimate is negative: {0}")]
    Negative(f64),
}

impl RawEstimate {
    pub fn new(kg_co2e: f64) -> Result<Self, InvalidEstimate> {
        if !kg_co2e.is_finite() {
            return Err(InvalidEstimate::NotFinite(kg_co2e));
        }
        if kg_co2e < 0.0 {
            return Err(InvalidEstimate::Negative(kg_co2e));
        }
        Ok(Self(kg_co2e))
    }

    pub fn kg(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RawEstimate {
    type Error = InvalidEstimate;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_large_values() {
        assert_eq!(RawEstimate::new(0.0).unwrap().kg(), 0.0);
        assert_eq!(RawEstimate::new(1.0e7).unwrap().kg(), 1.0e7);
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert_eq!(RawEstimate::new(-1.0), Err(InvalidEstimate::Negative(-1.0)));
        assert!(matches!(RawEstimate::new(f64::NAN), Err(InvalidEstimate::NotFinite(_))));
        assert!(matches!(
            RawEstimate::try_from(f64::INFINITY),
            Err(InvalidEstimate::NotFinite(_))
        ));
    }
}
