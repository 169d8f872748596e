//! # Command Line Interface
//!
//! Flags override values from the config file and environment.

use crate::config::PowerRankingsConfig;
use clap::Parser;
use std::path::PathBuf;

/// Weekly power rankings for a Sleeper fantasy league
#[derive(Debug, Parser)]
#[command(name = "power-rankings")]
#[command(about = "Compute weekly power rankings for a Sleeper fantasy league")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sleeper league ID
    #[arg(short, long)]
    pub league_id: Option<String>,

    /// Number of completed weeks to rank (defaults to the last finished NFL week)
    #[arg(short, long)]
    pub week: Option<u32>,

    /// CSV file with `team,rank` rows instead of prompting for roster strength
    #[arg(short = 'r', long)]
    pub roster_strength: Option<PathBuf>,

    /// Directory for the CSV report
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the console table
    #[arg(long)]
    pub no_console: bool,

    /// Skip writing the CSV report
    #[arg(long)]
    pub no_csv: bool,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format: pretty, json or compact
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`
    pub fn apply_to(&self, config: &mut PowerRankingsConfig) {
        if let Some(league_id) = &self.league_id {
            config.league.league_id = league_id.clone();
        }
        if let Some(week) = self.week {
            config.league.completed_weeks = Some(week);
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if self.no_console {
            config.output.console = false;
        }
        if self.no_csv {
            config.output.csv = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
    }
}
