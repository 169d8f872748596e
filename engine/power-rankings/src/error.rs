//! Error types for the power rankings pipeline

use league_data::{LeagueDataError, RosterId};
use thiserror::Error;

/// Result type for power rankings operations
pub type Result<T> = std::result::Result<T, PowerRankingsError>;

#[derive(Error, Debug)]
pub enum PowerRankingsError {
    #[error("League data error: {0}")]
    LeagueData(#[from] LeagueDataError),

    #[error(
        "Week {week}: roster {roster_id} shares a matchup with {} rosters ({opponents:?})",
        opponents.len()
    )]
    AmbiguousOpponent { roster_id: RosterId, week: u32, opponents: Vec<RosterId> },

    #[error("Roster strength for {team} is not an integer: {input:?}")]
    ManualInputParse { team: String, input: String },

    #[error("No roster strength entry for {team}")]
    MissingRosterStrength { team: String },

    #[error("Roster {roster_id} has no {stage} result")]
    MissingMetric { roster_id: RosterId, stage: &'static str },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PowerRankingsError {
    pub fn config(message: impl Into<String>) -> Self {
        PowerRankingsError::InvalidConfig { message: message.into() }
    }
}
