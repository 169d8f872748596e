use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier of a team entry in the league
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-week token shared by the rosters that played each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchupId(pub u32);

impl fmt::Display for MatchupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One roster's result for one completed week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyObservation {
    /// Zero-based week index (0 = week 1)
    pub week: u32,
    pub points_scored: f64,
    /// `None` when the roster had no scheduled opponent
    pub matchup_id: Option<MatchupId>,
}

impl WeeklyObservation {
    pub fn new(week: u32, points_scored: f64, matchup_id: Option<MatchupId>) -> Self {
        Self { week, points_scored, matchup_id }
    }

    /// True if both observations share a matchup grouping
    pub fn played_against(&self, other: &WeeklyObservation) -> bool {
        match (self.matchup_id, other.matchup_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// League member (Sleeper user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
}

/// Roster and its owning user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRoster {
    pub roster_id: RosterId,
    /// Orphaned rosters have no owner
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// One roster's entry in a week's matchup listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub roster_id: RosterId,
    #[serde(default, deserialize_with = "points_or_zero")]
    pub points: f64,
    #[serde(default)]
    pub matchup_id: Option<MatchupId>,
}

/// NFL calendar state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NflState {
    /// Week currently in progress
    pub week: u32,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub season_type: String,
}

impl NflState {
    /// Number of fully completed weeks
    pub fn completed_weeks(&self) -> u32 {
        self.week.saturating_sub(1)
    }
}

fn points_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
