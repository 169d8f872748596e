//! Weekly power rankings for a Sleeper fantasy league
//!
//! Each run loads every completed week, ranks rosters on actual wins,
//! all-play wins, recent wins, points per game, scoring consistency and a
//! manually supplied rest-of-season strength rank, then folds those ranks
//! into one weighted score. Early-season weighting leans on wins while
//! the sample is small.

pub mod cli;
pub mod compositor;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod rank;
pub mod records;
pub mod report;
pub mod scoring;
pub mod sink;
pub mod strength;
pub mod weights;

pub use cli::Cli;
pub use compositor::{PowerRankCompositor, PowerRanking};
pub use config::{LeagueConfig, LoggingConfig, OutputConfig, PowerRankingsConfig, WeightsConfig};
pub use engine::PowerRankingsEngine;
pub use error::{PowerRankingsError, Result};
pub use logging::initialize_logging;
pub use rank::{competition_rank, MetricMap, RankMap, RankOrder};
pub use records::{RecordCalculator, RecordSummary};
pub use report::{assemble_report, PowerRankingReport, RosterResult, StageResults};
pub use scoring::{ScoringCalculator, ScoringSummary};
pub use sink::{ConsoleSink, CsvSink, ReportSink};
pub use strength::{
    collect_roster_strength, FileRosterStrength, PromptRosterStrength, RosterStrengthProvider,
};
pub use weights::{PhaseWeight, SelectedWeights};
