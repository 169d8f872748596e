//! Points-per-game and scoring consistency

use crate::rank::{competition_rank, MetricMap, RankMap, RankOrder};
use league_data::WeeklyResultStore;
use tracing::{debug, info, warn};

/// Scoring metrics and their ranks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringSummary {
    pub points_per_game: MetricMap,
    /// Coefficient of variation of weekly points (lower is steadier)
    pub consistency: MetricMap,
    /// Highest average = rank 1
    pub points_per_game_rank: RankMap,
    /// Lowest coefficient of variation = rank 1
    pub consistency_rank: RankMap,
}

pub struct ScoringCalculator {
    consistency_threshold_week: u32,
}

impl ScoringCalculator {
    pub fn new(consistency_threshold_week: u32) -> Self {
        Self { consistency_threshold_week }
    }

    /// Average and spread of every roster's weekly points
    ///
    /// Before the consistency threshold the spread is treated as zero, so all
    /// rosters tie on consistency.
    pub fn calculate(&self, store: &WeeklyResultStore) -> ScoringSummary {
        let completed_weeks = store.completed_weeks();
        let measure_spread = completed_weeks >= self.consistency_threshold_week;

        let mut points_per_game = MetricMap::new();
        let mut consistency = MetricMap::new();

        for roster_id in store.roster_ids() {
            let points = store.points(roster_id);
            let ppg = mean(&points);
            let std_dev = if measure_spread { sample_std_dev(&points) } else { 0.0 };

            let variation = if ppg == 0.0 {
                warn!("Roster {} averages zero points, consistency set to 0", roster_id);
                0.0
            } else {
                std_dev / ppg
            };

            debug!(
                "Roster {}: {:.2} points per game, std dev {:.2}, consistency {:.4}",
                roster_id, ppg, std_dev, variation
            );
            points_per_game.insert(roster_id, ppg);
            consistency.insert(roster_id, variation);
        }

        info!(
            "Calculated scoring for {} rosters (consistency {})",
            points_per_game.len(),
            if measure_spread { "measured" } else { "not yet measured" }
        );

        ScoringSummary {
            points_per_game_rank: competition_rank(&points_per_game, RankOrder::Descending),
            consistency_rank: competition_rank(&consistency, RankOrder::Ascending),
            points_per_game,
            consistency,
        }
    }
}

/// Arithmetic mean, 0 for no values
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator), 0 for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
