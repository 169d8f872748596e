//! Blends the individual rank axes into one power ranking

use crate::error::{PowerRankingsError, Result};
use crate::rank::{competition_rank, MetricMap, RankMap, RankOrder};
use crate::records::RecordSummary;
use crate::scoring::ScoringSummary;
use crate::weights::SelectedWeights;
use league_data::RosterId;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Composite scores (lower is better) and the final order
#[derive(Debug, Clone, PartialEq)]
pub struct PowerRanking {
    pub scores: MetricMap,
    pub ranks: RankMap,
}

pub struct PowerRankCompositor {
    weights: SelectedWeights,
}

impl PowerRankCompositor {
    pub fn new(weights: SelectedWeights) -> Self {
        Self { weights }
    }

    /// Weighted rank sum over the fixed denominator, rounded to 2 places
    pub fn compose(
        &self,
        records: &RecordSummary,
        scoring: &ScoringSummary,
        roster_strength: &BTreeMap<RosterId, i64>,
    ) -> Result<PowerRanking> {
        let denominator = self.weights.denominator();
        if denominator == 0.0 {
            return Err(PowerRankingsError::config(
                "early-season win, overall win, points and roster strength weights sum to zero",
            ));
        }
        info!("Using weights: {}", self.weights);

        let mut scores = MetricMap::new();
        for roster_id in records.wins_rank.keys().copied() {
            let w = &self.weights;
            let numerator = rank(&records.wins_rank, roster_id, "wins")? * w.win
                + rank(&records.overall_wins_rank, roster_id, "overall wins")? * w.overall_win
                + rank(&records.recent_wins_rank, roster_id, "recent wins")? * w.recent_win
                + rank(&scoring.points_per_game_rank, roster_id, "points per game")? * w.points
                + rank(&scoring.consistency_rank, roster_id, "consistency")? * w.consistency
                + strength(roster_strength, roster_id)? * w.roster_strength;

            let score = round_to_hundredths(numerator / denominator);
            debug!("Roster {}: power score {:.2}", roster_id, score);
            scores.insert(roster_id, score);
        }

        let ranks = competition_rank(&scores, RankOrder::Ascending);
        Ok(PowerRanking { scores, ranks })
    }
}

fn rank(ranks: &RankMap, roster_id: RosterId, stage: &'static str) -> Result<f64> {
    ranks
        .get(&roster_id)
        .map(|r| f64::from(*r))
        .ok_or(PowerRankingsError::MissingMetric { roster_id, stage })
}

fn strength(ranks: &BTreeMap<RosterId, i64>, roster_id: RosterId) -> Result<f64> {
    ranks
        .get(&roster_id)
        .map(|r| *r as f64)
        .ok_or(PowerRankingsError::MissingMetric { roster_id, stage: "roster strength" })
}

/// Round to two decimal places from the exact binary value, ties to even
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightsConfig;

    const A: RosterId = RosterId(1);
    const B: RosterId = RosterId(2);

    fn ranks(a: u32, b: u32) -> RankMap {
        RankMap::from([(A, a), (B, b)])
    }

    fn inputs() -> (RecordSummary, ScoringSummary, BTreeMap<RosterId, i64>) {
        let records = RecordSummary {
            wins_rank: ranks(1, 2),
            overall_wins_rank: ranks(2, 1),
            recent_wins_rank: ranks(3, 1),
            ..Default::default()
        };
        let scoring = ScoringSummary {
            points_per_game_rank: ranks(4, 1),
            consistency_rank: ranks(1, 2),
            ..Default::default()
        };
        let strength = BTreeMap::from([(A, 2), (B, 1)]);
        (records, scoring, strength)
    }

    #[test]
    fn test_composite_score_formula() {
        let weights = SelectedWeights::for_week(&WeightsConfig::default(), 10);
        let (records, scoring, strength) = inputs();

        let ranking =
            PowerRankCompositor::new(weights).compose(&records, &scoring, &strength).unwrap();

        // A: (3 + 4 + 4.5 + 4 + 0.5 + 3) / (12 + 2 + 1 + 1.5) = 19 / 16.5
        assert_eq!(ranking.scores[&A], 1.15);
        // B: (6 + 2 + 1.5 + 1 + 1 + 1.5) / 16.5 = 13 / 16.5
        assert_eq!(ranking.scores[&B], 0.79);
        assert_eq!(ranking.ranks[&B], 1);
        assert_eq!(ranking.ranks[&A], 2);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let weights = SelectedWeights::for_week(&WeightsConfig::default(), 4);
        let (records, scoring, strength) = inputs();
        let compositor = PowerRankCompositor::new(weights);

        let first = compositor.compose(&records, &scoring, &strength).unwrap();
        let second = compositor.compose(&records, &scoring, &strength).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_scores_share_final_rank() {
        let weights = SelectedWeights::for_week(&WeightsConfig::default(), 10);
        let records = RecordSummary {
            wins_rank: ranks(1, 1),
            overall_wins_rank: ranks(1, 1),
            recent_wins_rank: ranks(1, 1),
            ..Default::default()
        };
        let scoring = ScoringSummary {
            points_per_game_rank: ranks(1, 1),
            consistency_rank: ranks(1, 1),
            ..Default::default()
        };
        let strength = BTreeMap::from([(A, 1), (B, 1)]);

        let ranking =
            PowerRankCompositor::new(weights).compose(&records, &scoring, &strength).unwrap();

        assert_eq!(ranking.ranks[&A], 1);
        assert_eq!(ranking.ranks[&B], 1);
    }

    #[test]
    fn test_missing_rank_is_reported() {
        let weights = SelectedWeights::for_week(&WeightsConfig::default(), 10);
        let (records, mut scoring, strength) = inputs();
        scoring.consistency_rank.remove(&B);

        let err =
            PowerRankCompositor::new(weights).compose(&records, &scoring, &strength).unwrap_err();

        assert!(matches!(
            err,
            PowerRankingsError::MissingMetric { roster_id: B, stage: "consistency" }
        ));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let config = WeightsConfig {
            win_early_season_per_week: 0.0,
            overall_win_weight: 0.0,
            points_scored_weight: 0.0,
            roster_strength_weight: 0.0,
            ..Default::default()
        };
        let (records, scoring, strength) = inputs();

        let err = PowerRankCompositor::new(SelectedWeights::for_week(&config, 10))
            .compose(&records, &scoring, &strength)
            .unwrap_err();
        assert!(matches!(err, PowerRankingsError::InvalidConfig { .. }));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(1.151515), 1.15);
        assert_eq!(round_to_hundredths(2.0 / 3.0), 0.67);
        assert_eq!(round_to_hundredths(4.0), 4.0);
    }

    #[test]
    fn test_round_to_hundredths_half_cases() {
        // Exact binary ties go to the even digit
        assert_eq!(round_to_hundredths(0.125), 0.12);
        assert_eq!(round_to_hundredths(0.375), 0.38);
        assert_eq!(round_to_hundredths(-0.125), -0.12);
        // Decimal "ties" that sit just below the half in binary round down
        assert_eq!(round_to_hundredths(1.115), 1.11);
        assert_eq!(round_to_hundredths(2.675), 2.67);
        assert_eq!(round_to_hundredths(1.005), 1.0);
        assert_eq!(round_to_hundredths(0.285), 0.28);
    }

    #[test]
    fn test_eighths_round_to_even_hundredth() {
        let config = WeightsConfig {
            win_weight: 1.0,
            win_early_season_per_week: 0.0,
            overall_win_weight: 0.0,
            recent_wins_weight: 0.0,
            consistency_weight: 0.0,
            points_scored_weight: 0.0,
            roster_strength_weight: 8.0,
            ..Default::default()
        };
        let records = RecordSummary {
            wins_rank: ranks(1, 3),
            overall_wins_rank: ranks(1, 1),
            recent_wins_rank: ranks(1, 1),
            ..Default::default()
        };
        let scoring = ScoringSummary {
            points_per_game_rank: ranks(1, 1),
            consistency_rank: ranks(1, 1),
            ..Default::default()
        };
        let strength = BTreeMap::from([(A, 0), (B, 0)]);

        let ranking = PowerRankCompositor::new(SelectedWeights::for_week(&config, 10))
            .compose(&records, &scoring, &strength)
            .unwrap();

        // 1 / 8 and 3 / 8
        assert_eq!(ranking.scores[&A], 0.12);
        assert_eq!(ranking.scores[&B], 0.38);
    }
}
