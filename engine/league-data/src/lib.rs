//! League data access for the power rankings engine
//!
//! This crate resolves roster identifiers to team names and collects per-week
//! matchup results into a uniform, week-indexed store. Remote data comes from
//! a [`LeagueDataProvider`]; [`SleeperClient`] is the production implementation.

pub mod config;
pub mod directory;
pub mod error;
pub mod loader;
pub mod provider;
pub mod sleeper;
pub mod store;
pub mod types;

pub use config::SleeperConfig;
pub use directory::RosterDirectory;
pub use error::LeagueDataError;
pub use loader::{load_league, LeagueSnapshot};
pub use provider::LeagueDataProvider;
pub use sleeper::SleeperClient;
pub use store::WeeklyResultStore;
pub use types::*;

// Result type alias
pub type Result<T> = std::result::Result<T, LeagueDataError>;
