//! Report output sinks

use crate::error::Result;
use crate::report::PowerRankingReport;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for a finished report
pub trait ReportSink {
    fn emit(&mut self, report: &PowerRankingReport) -> Result<()>;
}

/// Fixed-width table on any writer (stdout by default)
pub struct ConsoleSink<W> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &PowerRankingReport) -> Result<()> {
        let width =
            report.rows.iter().map(|r| r.team_name.chars().count()).max().unwrap_or(4).max(4);

        writeln!(
            self.out,
            "POWER RANKINGS - league {} - through week {}",
            report.league_id, report.completed_weeks
        )?;
        writeln!(self.out, "Weights: {}", report.weights)?;
        writeln!(self.out, "{}", "=".repeat(width + 78))?;
        writeln!(
            self.out,
            "{:>4}  {:>6}  {:<width$}  {:>7} {:>3}  {:>4} {:>3}  {:>7} {:>3}  \
             {:>6} {:>3}  {:>6} {:>3}  {:>4}",
            "Rank",
            "Score",
            "Team",
            "PPG",
            "#",
            "W",
            "#",
            "OvrW",
            "#",
            "RecW",
            "#",
            "CV",
            "#",
            "ROS",
        )?;
        for row in &report.rows {
            writeln!(
                self.out,
                "{:>4}  {:>6.2}  {:<width$}  {:>7.2} {:>3}  {:>4} {:>3}  {:>7} {:>3}  \
                 {:>6} {:>3}  {:>6.3} {:>3}  {:>4}",
                row.power_rank,
                row.power_score,
                row.team_name,
                row.points_per_game,
                row.points_per_game_rank,
                row.wins,
                row.wins_rank,
                row.overall_wins,
                row.overall_wins_rank,
                row.recent_wins,
                row.recent_wins_rank,
                row.consistency,
                row.consistency_rank,
                row.roster_strength_rank,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes `power_rankings_<label>.csv` into a directory
pub struct CsvSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), written: Vec::new() }
    }

    pub fn report_path(&self, label: &str) -> PathBuf {
        self.dir.join(format!("power_rankings_{label}.csv"))
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for CsvSink {
    fn emit(&mut self, report: &PowerRankingReport) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.report_path(&report.label);
        write_csv(&path, report)?;
        info!("Wrote {} rows to {:?}", report.rows.len(), path);
        self.written.push(path);
        Ok(())
    }
}

fn write_csv(path: &Path, report: &PowerRankingReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightsConfig;
    use crate::report::RosterResult;
    use crate::weights::SelectedWeights;
    use chrono::Utc;
    use league_data::RosterId;

    fn row(rank: u32, score: f64, team: &str) -> RosterResult {
        RosterResult {
            power_rank: rank,
            power_score: score,
            team_name: team.to_string(),
            points_per_game: 112.5,
            points_per_game_rank: rank,
            wins: 3,
            wins_rank: 1,
            overall_wins: 20,
            overall_wins_rank: rank,
            recent_wins: 0,
            recent_wins_rank: 1,
            consistency: 0.125,
            consistency_rank: 2,
            roster_strength_rank: 4,
            roster_id: RosterId(rank),
        }
    }

    fn report() -> PowerRankingReport {
        PowerRankingReport {
            league_id: "42".to_string(),
            completed_weeks: 5,
            label: "week_5".to_string(),
            generated_at: Utc::now(),
            weights: SelectedWeights::for_week(&WeightsConfig::default(), 5),
            rows: vec![row(1, 1.25, "gridiron_gary"), row(2, 2.5, "waiver_wendy")],
        }
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvSink::new(dir.path().join("reports"));

        sink.emit(&report()).unwrap();

        let path = dir.path().join("reports").join("power_rankings_week_5.csv");
        assert_eq!(sink.written(), &[path.clone()]);
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Rank,Score,Team,Points Per Game,PPG Rank,Wins,Wins Rank,Overall Wins,\
             Overall Wins Rank,Recent Wins,Recent Wins Rank,Consistency,Consistency Rank,ROS Rank"
        );
        assert_eq!(lines[1], "1,1.25,gridiron_gary,112.5,1,3,1,20,1,0,1,0.125,2,4");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_console_columns_align_with_non_ascii_names() {
        let mut report = report();
        report.rows = vec![row(1, 1.25, "Zoë's Crüe 🏈"), row(2, 2.5, "bo")];
        let mut sink = ConsoleSink::new(Vec::new());

        sink.emit(&report).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let table: Vec<usize> = text.lines().skip(3).map(|line| line.chars().count()).collect();
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|&len| len == table[0]), "ragged table: {table:?}");
    }

    #[test]
    fn test_console_sink_lists_teams_in_order() {
        let mut sink = ConsoleSink::new(Vec::new());

        sink.emit(&report()).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("through week 5"));
        assert!(text.contains("Wins: 3"));
        assert!(text.find("gridiron_gary").unwrap() < text.find("waiver_wendy").unwrap());
    }
}
