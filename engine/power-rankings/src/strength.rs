//! Manual rest-of-season roster strength input

use crate::error::{PowerRankingsError, Result};
use league_data::{RosterDirectory, RosterId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Source of subjective roster strength ranks (lower = stronger)
pub trait RosterStrengthProvider {
    fn roster_strength(&mut self, team_name: &str) -> Result<i64>;
}

/// Ask the provider once per roster, in roster order
pub fn collect_roster_strength<P>(
    provider: &mut P,
    directory: &RosterDirectory,
) -> Result<BTreeMap<RosterId, i64>>
where
    P: RosterStrengthProvider + ?Sized,
{
    let mut ranks = BTreeMap::new();
    for (roster_id, team_name) in directory.iter() {
        let rank = provider.roster_strength(team_name)?;
        ranks.insert(roster_id, rank);
    }
    info!("Collected roster strength for {} rosters", ranks.len());
    Ok(ranks)
}

/// Interactive prompt; re-asks until the answer parses as an integer
pub struct PromptRosterStrength<R, W> {
    input: R,
    output: W,
}

impl PromptRosterStrength<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptRosterStrength<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> RosterStrengthProvider for PromptRosterStrength<R, W> {
    fn roster_strength(&mut self, team_name: &str) -> Result<i64> {
        loop {
            write!(self.output, "ROS ranking for {team_name}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PowerRankingsError::MissingRosterStrength {
                    team: team_name.to_string(),
                });
            }

            match parse_rank(team_name, &line) {
                Ok(rank) => return Ok(rank),
                Err(err) => {
                    warn!("{}", err);
                    writeln!(self.output, "Please enter a whole number.")?;
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct StrengthRow {
    team: String,
    rank: String,
}

/// Ranks read from a `team,rank` CSV file
#[derive(Debug, Clone, Default)]
pub struct FileRosterStrength {
    ranks: HashMap<String, i64>,
}

impl FileRosterStrength {
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading roster strength from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader =
            csv::ReaderBuilder::new().trim(csv::Trim::All).has_headers(true).from_reader(reader);

        let mut ranks = HashMap::new();
        for row in csv_reader.deserialize() {
            let row: StrengthRow = row?;
            let rank = parse_rank(&row.team, &row.rank)?;
            ranks.insert(row.team, rank);
        }
        Ok(Self { ranks })
    }

    pub fn from_ranks<I, S>(ranks: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self { ranks: ranks.into_iter().map(|(team, rank)| (team.into(), rank)).collect() }
    }
}

impl RosterStrengthProvider for FileRosterStrength {
    fn roster_strength(&mut self, team_name: &str) -> Result<i64> {
        self.ranks
            .get(team_name)
            .copied()
            .ok_or_else(|| PowerRankingsError::MissingRosterStrength {
                team: team_name.to_string(),
            })
    }
}

fn parse_rank(team_name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| PowerRankingsError::ManualInputParse {
        team: team_name.to_string(),
        input: raw.trim().to_string(),
    })
}
