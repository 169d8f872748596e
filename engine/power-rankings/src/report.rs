//! Joins every per-roster metric into one report row

use crate::compositor::PowerRanking;
use crate::error::{PowerRankingsError, Result};
use crate::records::RecordSummary;
use crate::scoring::ScoringSummary;
use crate::weights::SelectedWeights;
use chrono::{DateTime, Utc};
use league_data::{RosterDirectory, RosterId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every computed metric and rank for one roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterResult {
    #[serde(rename = "Rank")]
    pub power_rank: u32,
    #[serde(rename = "Score")]
    pub power_score: f64,
    #[serde(rename = "Team")]
    pub team_name: String,
    #[serde(rename = "Points Per Game")]
    pub points_per_game: f64,
    #[serde(rename = "PPG Rank")]
    pub points_per_game_rank: u32,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Wins Rank")]
    pub wins_rank: u32,
    #[serde(rename = "Overall Wins")]
    pub overall_wins: u32,
    #[serde(rename = "Overall Wins Rank")]
    pub overall_wins_rank: u32,
    #[serde(rename = "Recent Wins")]
    pub recent_wins: u32,
    #[serde(rename = "Recent Wins Rank")]
    pub recent_wins_rank: u32,
    #[serde(rename = "Consistency")]
    pub consistency: f64,
    #[serde(rename = "Consistency Rank")]
    pub consistency_rank: u32,
    #[serde(rename = "ROS Rank")]
    pub roster_strength_rank: i64,
    #[serde(skip)]
    pub roster_id: RosterId,
}

/// Final report handed to the sinks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRankingReport {
    pub league_id: String,
    pub completed_weeks: u32,
    /// Identifies the reported week, e.g. `week_5`
    pub label: String,
    pub generated_at: DateTime<Utc>,
    pub weights: SelectedWeights,
    /// Ordered by rank, then score, then team name
    pub rows: Vec<RosterResult>,
}

/// Stage outputs consumed by [`assemble_report`]
pub struct StageResults<'a> {
    pub records: &'a RecordSummary,
    pub scoring: &'a ScoringSummary,
    pub roster_strength: &'a BTreeMap<RosterId, i64>,
    pub power: &'a PowerRanking,
}

pub fn report_label(completed_weeks: u32) -> String {
    format!("week_{completed_weeks}")
}

/// Build one row per directory roster, failing if any stage skipped one
pub fn assemble_report(
    league_id: &str,
    completed_weeks: u32,
    weights: SelectedWeights,
    directory: &RosterDirectory,
    stages: &StageResults<'_>,
) -> Result<PowerRankingReport> {
    let mut rows = Vec::with_capacity(directory.len());

    for (roster_id, team_name) in directory.iter() {
        let records = stages.records;
        let scoring = stages.scoring;
        rows.push(RosterResult {
            power_rank: lookup(&stages.power.ranks, roster_id, "power rank")?,
            power_score: lookup(&stages.power.scores, roster_id, "power score")?,
            team_name: team_name.to_string(),
            points_per_game: lookup(&scoring.points_per_game, roster_id, "points per game")?,
            points_per_game_rank: lookup(
                &scoring.points_per_game_rank,
                roster_id,
                "points per game",
            )?,
            wins: lookup(&records.wins, roster_id, "wins")?,
            wins_rank: lookup(&records.wins_rank, roster_id, "wins")?,
            overall_wins: lookup(&records.overall_wins, roster_id, "overall wins")?,
            overall_wins_rank: lookup(&records.overall_wins_rank, roster_id, "overall wins")?,
            recent_wins: lookup(&records.recent_wins, roster_id, "recent wins")?,
            recent_wins_rank: lookup(&records.recent_wins_rank, roster_id, "recent wins")?,
            consistency: lookup(&scoring.consistency, roster_id, "consistency")?,
            consistency_rank: lookup(&scoring.consistency_rank, roster_id, "consistency")?,
            roster_strength_rank: lookup(stages.roster_strength, roster_id, "roster strength")?,
            roster_id,
        });
    }

    rows.sort_by(|a, b| {
        a.power_rank
            .cmp(&b.power_rank)
            .then_with(|| a.power_score.total_cmp(&b.power_score))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });

    Ok(PowerRankingReport {
        league_id: league_id.to_string(),
        completed_weeks,
        label: report_label(completed_weeks),
        generated_at: Utc::now(),
        weights,
        rows,
    })
}

fn lookup<T: Copy>(
    values: &BTreeMap<RosterId, T>,
    roster_id: RosterId,
    stage: &'static str,
) -> Result<T> {
    values.get(&roster_id).copied().ok_or(PowerRankingsError::MissingMetric { roster_id, stage })
}
