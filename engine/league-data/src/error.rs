//! Error types for league data access

use crate::types::RosterId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueDataError {
    #[error("Sleeper API error: {message}")]
    SleeperApiError { message: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Week {week}: matchup entry for roster {roster_id} which is not in the league")]
    UnknownRoster { roster_id: RosterId, week: u32 },

    #[error("Week {week}: roster {roster_id} reported more than once")]
    DuplicateObservation { roster_id: RosterId, week: u32 },

    #[error("Week {week}: no result for roster {roster_id} ({team_name})")]
    DataGap { roster_id: RosterId, team_name: String, week: u32 },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LeagueDataError {
    /// True for failures of the remote data source itself
    pub fn is_external_fetch(&self) -> bool {
        matches!(
            self,
            LeagueDataError::SleeperApiError { .. }
                | LeagueDataError::HttpError(_)
                | LeagueDataError::UnknownRoster { .. }
                | LeagueDataError::DuplicateObservation { .. }
        )
    }
}
