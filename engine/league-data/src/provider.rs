//! League data collaborator interface

use crate::types::{LeagueRoster, LeagueUser, MatchupEntry, NflState};
use crate::Result;

/// Source of league membership and weekly matchup results
#[async_trait::async_trait]
pub trait LeagueDataProvider: Send + Sync {
    /// League members with their display names
    async fn fetch_users(&self, league_id: &str) -> Result<Vec<LeagueUser>>;

    /// Rosters with their owning user
    async fn fetch_rosters(&self, league_id: &str) -> Result<Vec<LeagueRoster>>;

    /// Per-roster matchup entries for a 1-based week number
    async fn fetch_matchups(&self, league_id: &str, week: u32) -> Result<Vec<MatchupEntry>>;

    /// Current NFL calendar state
    async fn fetch_nfl_state(&self) -> Result<NflState>;
}
