//! Dashboard figures derived from a user's prediction history

use serde::Serialize;

use crate::store::PredictionRecord;
use crate::utils::round_half_up;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub count: usize,
    pub latest_score: Option<u8>,
    pub latest_emission: Option<f64>,
    /// Mean score rounded to a whole number
    pub average_score: Option<u8>,
    /// Latest score minus the previous one (0 with a single record)
    pub improvement: i16,
}

impl HistorySummary {
    /// `history` must be newest first, as returned by the store
    pub fn from_history(history: &[PredictionRecord]) -> Self {
        let Some(latest) = history.first() else {
            return Self {
                count: 0,
                latest_score: None,
                latest_emission: None,
                average_score: None,
                improvement: 0,
            };
        };

        let previous = history.get(1).unwrap_or(latest);
        let total: f64 = history.iter().map(|r| f64::from(r.sustainability_score)).sum();
        let average = round_half_up(total / history.len() as f64);

        Self {
            count: history.len(),
            latest_score: Some(latest.sustainability_score),
            latest_emission: Some(latest.predicted_carbon_emission),
            average_score: Some(average as u8),
            improvement: i16::from(latest.sustainability_score) - i16::from(previous.sustainability_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::record;

    #[test]
    fn test_empty_history() {
        let summary = HistorySummary::from_history(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.latest_score, None);
        assert_eq!(summary.average_score, None);
        assert_eq!(summary.improvement, 0);
    }

    #[test]
    fn test_single_record_has_no_improvement() {
        let summary = HistorySummary::from_history(&[record("alice", 64, 0)]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.latest_score, Some(64));
        assert_eq!(summary.latest_emission, Some(1064.0));
        assert_eq!(summary.average_score, Some(64));
        assert_eq!(summary.improvement, 0);
    }

    #[test]
    fn test_trend_and_average() {
        // Newest first
        let history = vec![record("alice", 55, 3), record("alice", 70, 2), record("alice", 40, 1)];
        let summary = HistorySummary::from_history(&history);

        assert_eq!(summary.latest_score, Some(55));
        assert_eq!(summary.improvement, -15);
        // (55 + 70 + 40) / 3 = 55.0
        assert_eq!(summary.average_score, Some(55));

        let history = vec![record("alice", 61, 2), record("alice", 50, 1)];
        let summary = HistorySummary::from_history(&history);
        // 55.5 rounds up
        assert_eq!(summary.average_score, Some(56));
        assert_eq!(summary.improvement, 11);
    }
}
