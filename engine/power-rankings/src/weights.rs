//! Season-phase weight selection

use crate::config::WeightsConfig;
use serde::Serialize;
use std::fmt;

/// A weight that switches value once enough weeks have completed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWeight {
    pub threshold_week: u32,
    pub early_season: f64,
    pub regular_season: f64,
}

impl PhaseWeight {
    pub fn new(threshold_week: u32, early_season: f64, regular_season: f64) -> Self {
        Self { threshold_week, early_season, regular_season }
    }

    /// Early-season value while `completed_weeks < threshold_week`
    pub fn select(&self, completed_weeks: u32) -> f64 {
        if completed_weeks < self.threshold_week {
            self.early_season
        } else {
            self.regular_season
        }
    }
}

/// Weights in effect for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedWeights {
    pub win: f64,
    pub overall_win: f64,
    pub recent_win: f64,
    pub points: f64,
    pub consistency: f64,
    pub roster_strength: f64,
    /// Early-season win weight; the composite denominator always uses it
    pub win_early_season_baseline: f64,
}

impl SelectedWeights {
    /// Resolve every factor's weight for the given number of completed weeks
    pub fn for_week(config: &WeightsConfig, completed_weeks: u32) -> Self {
        let win_early_season = config.win_early_season_per_week * f64::from(completed_weeks);

        let win = PhaseWeight::new(
            config.win_early_season_week_threshold,
            win_early_season,
            config.win_weight,
        );
        let recent_win = PhaseWeight::new(
            config.recent_wins_early_season_week_threshold,
            config.recent_wins_weight_early_season,
            config.recent_wins_weight,
        );
        let consistency = PhaseWeight::new(
            config.consistency_early_season_week_threshold,
            config.consistency_weight_early_season,
            config.consistency_weight,
        );

        Self {
            win: win.select(completed_weeks),
            overall_win: config.overall_win_weight,
            recent_win: recent_win.select(completed_weeks),
            points: config.points_scored_weight,
            consistency: consistency.select(completed_weeks),
            roster_strength: config.roster_strength_weight,
            win_early_season_baseline: win_early_season,
        }
    }

    /// Composite score normaliser
    ///
    /// Uses the early-season win weight rather than the selected one and
    /// leaves out the recent-win and consistency weights, so scores are not a
    /// weighted mean of ranks.
    pub fn denominator(&self) -> f64 {
        self.win_early_season_baseline + self.overall_win + self.points + self.roster_strength
    }
}

impl fmt::Display for SelectedWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {} | Overall Wins: {} | Recent Wins: {} | Consistency: {} | \
             Points per Game: {} | ROS Rank: {}",
            self.win,
            self.overall_win,
            self.recent_win,
            self.consistency,
            self.points,
            self.roster_strength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_weight_switches_at_threshold() {
        let weight = PhaseWeight::new(3, 0.0, 1.5);
        assert_eq!(weight.select(0), 0.0);
        assert_eq!(weight.select(2), 0.0);
        assert_eq!(weight.select(3), 1.5);
        assert_eq!(weight.select(12), 1.5);
    }

    #[test]
    fn test_win_weight_early_and_regular_season() {
        let config = WeightsConfig::default();

        let week_two = SelectedWeights::for_week(&config, 2);
        assert!((week_two.win - 2.4).abs() < 1e-9);

        let week_three = SelectedWeights::for_week(&config, 3);
        assert_eq!(week_three.win, 3.0);
    }

    #[test]
    fn test_default_weights_mid_season() {
        let config = WeightsConfig::default();

        let week_five = SelectedWeights::for_week(&config, 5);
        assert_eq!(week_five.win, 3.0);
        assert_eq!(week_five.overall_win, 2.0);
        assert_eq!(week_five.recent_win, 0.0);
        assert_eq!(week_five.consistency, 0.5);
        assert_eq!(week_five.points, 1.0);
        assert_eq!(week_five.roster_strength, 1.5);
        assert!((week_five.win_early_season_baseline - 6.0).abs() < 1e-9);
        assert!((week_five.denominator() - 10.5).abs() < 1e-9);

        let week_eight = SelectedWeights::for_week(&config, 8);
        assert_eq!(week_eight.recent_win, 1.5);
    }

    #[test]
    fn test_denominator_ignores_selected_weights() {
        let config = WeightsConfig {
            recent_wins_weight: 50.0,
            consistency_weight: 50.0,
            ..Default::default()
        };

        let weights = SelectedWeights::for_week(&config, 10);

        // 1.2 * 10 + 2 + 1 + 1.5, win weight in use is 3
        assert!((weights.denominator() - 16.5).abs() < 1e-9);
        assert_eq!(weights.win, 3.0);
    }
}
