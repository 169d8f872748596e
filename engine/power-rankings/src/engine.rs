use crate::compositor::PowerRankCompositor;
use crate::config::PowerRankingsConfig;
use crate::error::{PowerRankingsError, Result};
use crate::records::RecordCalculator;
use crate::report::{assemble_report, PowerRankingReport, StageResults};
use crate::scoring::ScoringCalculator;
use crate::sink::ReportSink;
use crate::strength::{collect_roster_strength, RosterStrengthProvider};
use crate::weights::SelectedWeights;
use league_data::{load_league, LeagueDataProvider};
use std::fmt::Display;
use tracing::{error, info};

/// Runs the full ranking pipeline for one league and week
///
/// Stages run in a fixed order: load, records, scoring, roster strength,
/// composite, report. Sinks are only called once every stage has succeeded.
pub struct PowerRankingsEngine {
    config: PowerRankingsConfig,
}

impl PowerRankingsEngine {
    pub fn new(config: PowerRankingsConfig) -> Self {
        Self { config }
    }

    /// Configured week count, or the last completed week per the NFL state
    pub async fn resolve_completed_weeks<P>(&self, provider: &P) -> Result<u32>
    where
        P: LeagueDataProvider + ?Sized,
    {
        if let Some(weeks) = self.config.league.completed_weeks {
            return Ok(weeks);
        }

        let state = provider.fetch_nfl_state().await?;
        match state.completed_weeks() {
            0 => Err(PowerRankingsError::config(format!(
                "no completed weeks yet (NFL week {}), pass --week",
                state.week
            ))),
            weeks => {
                info!("Inferred {} completed weeks from NFL state", weeks);
                Ok(weeks)
            }
        }
    }

    /// Build the report and hand it to every sink
    pub async fn run<P, S>(
        &self,
        provider: &P,
        strength: &mut S,
        sinks: &mut [Box<dyn ReportSink>],
    ) -> Result<PowerRankingReport>
    where
        P: LeagueDataProvider + ?Sized,
        S: RosterStrengthProvider + ?Sized,
    {
        let league_id = self.config.league.league_id.as_str();
        let completed_weeks = self.resolve_completed_weeks(provider).await?;
        let weights_config = &self.config.weights;

        info!("📥 Loading league {} through week {}", league_id, completed_weeks);
        let snapshot = stage("load", load_league(provider, league_id, completed_weeks).await)?;

        info!("🏈 Tabulating records");
        let records = stage(
            "records",
            RecordCalculator::new(weights_config.recent_weeks_count).calculate(&snapshot.store),
        )?;

        info!("📊 Calculating points per game and consistency");
        let scoring = ScoringCalculator::new(weights_config.consistency_early_season_week_threshold)
            .calculate(&snapshot.store);

        info!("📝 Collecting roster strength");
        let roster_strength =
            stage("roster strength", collect_roster_strength(strength, &snapshot.directory))?;

        info!("⚖️ Computing power rankings");
        let weights = SelectedWeights::for_week(weights_config, completed_weeks);
        let power = stage(
            "composite",
            PowerRankCompositor::new(weights).compose(&records, &scoring, &roster_strength),
        )?;

        let stages = StageResults {
            records: &records,
            scoring: &scoring,
            roster_strength: &roster_strength,
            power: &power,
        };
        let report = stage(
            "report",
            assemble_report(league_id, completed_weeks, weights, &snapshot.directory, &stages),
        )?;

        for sink in sinks.iter_mut() {
            stage("output", sink.emit(&report))?;
        }

        info!("✅ Power rankings complete for {} teams", report.rows.len());
        Ok(report)
    }
}

fn stage<T, E>(name: &str, result: std::result::Result<T, E>) -> std::result::Result<T, E>
where
    E: Display,
{
    if let Err(e) = &result {
        error!("❌ {} stage failed: {}", name, e);
    }
    result
}
