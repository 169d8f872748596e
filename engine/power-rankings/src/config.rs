//! Power rankings configuration
//!
//! Precedence, lowest first: defaults, TOML file, environment, CLI flags.

use crate::error::{PowerRankingsError, Result};
use league_data::SleeperConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerRankingsConfig {
    pub league: LeagueConfig,
    pub sleeper: SleeperConfig,
    pub weights: WeightsConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Sleeper league ID
    pub league_id: String,

    /// Weeks to process; inferred from the NFL state when unset
    pub completed_weeks: Option<u32>,
}

/// Ranking factor weights and season-phase thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub win_weight: f64,
    /// Early-season win weight is this factor times the completed weeks
    pub win_early_season_per_week: f64,
    pub win_early_season_week_threshold: u32,

    pub overall_win_weight: f64,

    pub recent_wins_weight: f64,
    pub recent_wins_weight_early_season: f64,
    pub recent_wins_early_season_week_threshold: u32,
    /// Trailing window for recent wins
    pub recent_weeks_count: u32,

    pub consistency_weight: f64,
    pub consistency_weight_early_season: f64,
    pub consistency_early_season_week_threshold: u32,

    pub points_scored_weight: f64,

    pub roster_strength_weight: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            win_weight: 3.0,
            win_early_season_per_week: 1.2,
            win_early_season_week_threshold: 3,
            overall_win_weight: 2.0,
            recent_wins_weight: 1.5,
            recent_wins_weight_early_season: 0.0,
            recent_wins_early_season_week_threshold: 8,
            recent_weeks_count: 5,
            consistency_weight: 0.5,
            consistency_weight_early_season: 0.0,
            consistency_early_season_week_threshold: 3,
            points_scored_weight: 1.0,
            roster_strength_weight: 1.5,
        }
    }
}

impl WeightsConfig {
    fn named_weights(&self) -> [(&'static str, f64); 9] {
        [
            ("win_weight", self.win_weight),
            ("win_early_season_per_week", self.win_early_season_per_week),
            ("overall_win_weight", self.overall_win_weight),
            ("recent_wins_weight", self.recent_wins_weight),
            ("recent_wins_weight_early_season", self.recent_wins_weight_early_season),
            ("consistency_weight", self.consistency_weight),
            ("consistency_weight_early_season", self.consistency_weight_early_season),
            ("points_scored_weight", self.points_scored_weight),
            ("roster_strength_weight", self.roster_strength_weight),
        ]
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for CSV reports
    pub dir: PathBuf,

    /// Print the table to stdout
    pub console: bool,

    /// Write a CSV report
    pub csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("./reports"), console: true, csv: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl PowerRankingsConfig {
    /// Load defaults, then the optional TOML file, then environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.sleeper.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `POWER_RANKINGS_*` overrides using the given variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(league_id) = lookup("POWER_RANKINGS_LEAGUE_ID") {
            self.league.league_id = league_id;
        }

        if let Some(week) = lookup("POWER_RANKINGS_WEEK") {
            let week = week.parse::<u32>().map_err(|_| {
                PowerRankingsError::config(format!("Invalid POWER_RANKINGS_WEEK: {week}"))
            })?;
            self.league.completed_weeks = Some(week);
        }

        if let Some(dir) = lookup("POWER_RANKINGS_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("POWER_RANKINGS_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("POWER_RANKINGS_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.league.league_id.trim().is_empty() {
            return Err(PowerRankingsError::config("league_id is required"));
        }

        if self.league.completed_weeks == Some(0) {
            return Err(PowerRankingsError::config("completed_weeks must be at least 1"));
        }

        for (name, value) in self.weights.named_weights() {
            if !value.is_finite() || value < 0.0 {
                return Err(PowerRankingsError::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let w = &self.weights;
        let denominator_weights = w.win_early_season_per_week
            + w.overall_win_weight
            + w.points_scored_weight
            + w.roster_strength_weight;
        if denominator_weights == 0.0 {
            return Err(PowerRankingsError::config(
                "early-season win, overall win, points and roster strength weights are all zero",
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PowerRankingsError::config(format!(
                    "Invalid log level: {}",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.as_str() {
            "pretty" | "json" | "compact" => {}
            _ => {
                return Err(PowerRankingsError::config(format!(
                    "Invalid log format: {}",
                    self.logging.format
                )))
            }
        }

        Ok(())
    }
}
