//! Win, overall-win and recent-win tabulation

use crate::error::{PowerRankingsError, Result};
use crate::rank::{competition_rank, counts_to_metrics, RankMap, RankOrder};
use league_data::{RosterId, WeeklyObservation, WeeklyResultStore};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Raw counts and their ranks (more wins = rank 1)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSummary {
    /// Head-to-head wins against the actual opponent
    pub wins: BTreeMap<RosterId, u32>,
    /// Wins against every other roster's score each week
    pub overall_wins: BTreeMap<RosterId, u32>,
    /// Head-to-head wins inside the trailing window
    pub recent_wins: BTreeMap<RosterId, u32>,
    pub wins_rank: RankMap,
    pub overall_wins_rank: RankMap,
    pub recent_wins_rank: RankMap,
}

/// Tabulates records from the weekly result store
pub struct RecordCalculator {
    recent_weeks_count: u32,
}

impl RecordCalculator {
    pub fn new(recent_weeks_count: u32) -> Self {
        Self { recent_weeks_count }
    }

    /// Compare every ordered pair of rosters in every completed week
    ///
    /// Fails if a roster shares its matchup with more than one other roster.
    pub fn calculate(&self, store: &WeeklyResultStore) -> Result<RecordSummary> {
        let completed_weeks = store.completed_weeks();
        let recent_start = self.recent_window_start(completed_weeks);

        let zeroed: BTreeMap<RosterId, u32> = store.roster_ids().map(|id| (id, 0)).collect();
        let mut wins = zeroed.clone();
        let mut overall_wins = zeroed.clone();
        let mut recent_wins = zeroed;

        for week_index in 0..completed_weeks {
            let week = store.week(week_index);
            check_single_opponents(&week, week_index)?;
            let is_recent = recent_start.is_some_and(|start| week_index >= start);

            for (roster_id, observation) in &week {
                for (other_id, other) in &week {
                    if roster_id == other_id || observation.points_scored <= other.points_scored {
                        continue;
                    }
                    *overall_wins.entry(*roster_id).or_default() += 1;
                    if observation.played_against(other) {
                        *wins.entry(*roster_id).or_default() += 1;
                        if is_recent {
                            *recent_wins.entry(*roster_id).or_default() += 1;
                        }
                    }
                }
            }
        }

        let summary = RecordSummary {
            wins_rank: competition_rank(&counts_to_metrics(&wins), RankOrder::Descending),
            overall_wins_rank: competition_rank(
                &counts_to_metrics(&overall_wins),
                RankOrder::Descending,
            ),
            recent_wins_rank: competition_rank(
                &counts_to_metrics(&recent_wins),
                RankOrder::Descending,
            ),
            wins,
            overall_wins,
            recent_wins,
        };

        for roster_id in store.roster_ids() {
            debug!(
                "Roster {}: wins {} (rank {:?}), overall wins {} (rank {:?}), \
                 recent wins {} (rank {:?})",
                roster_id,
                summary.wins[&roster_id],
                summary.wins_rank.get(&roster_id),
                summary.overall_wins[&roster_id],
                summary.overall_wins_rank.get(&roster_id),
                summary.recent_wins[&roster_id],
                summary.recent_wins_rank.get(&roster_id),
            );
        }
        info!(
            "Tabulated records over {} weeks (recent window starts at week index {:?})",
            completed_weeks, recent_start
        );

        Ok(summary)
    }

    /// First zero-based week index counted as recent
    ///
    /// `None` when the window is longer than the season so far.
    pub fn recent_window_start(&self, completed_weeks: u32) -> Option<u32> {
        completed_weeks.checked_sub(self.recent_weeks_count)
    }
}

fn check_single_opponents(week: &[(RosterId, WeeklyObservation)], week_index: u32) -> Result<()> {
    for (roster_id, observation) in week {
        let opponents: Vec<RosterId> = week
            .iter()
            .filter(|(other_id, other)| other_id != roster_id && observation.played_against(other))
            .map(|(other_id, _)| *other_id)
            .collect();

        if opponents.len() > 1 {
            return Err(PowerRankingsError::AmbiguousOpponent {
                roster_id: *roster_id,
                week: week_index + 1,
                opponents,
            });
        }
    }
    Ok(())
}
