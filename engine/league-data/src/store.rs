use crate::directory::RosterDirectory;
use crate::types::{MatchupEntry, RosterId, WeeklyObservation};
use crate::{LeagueDataError, Result};
use std::collections::BTreeMap;

/// Per-roster weekly observations, index-aligned with week number
///
/// Every roster holds exactly one observation per processed week, so all
/// sequences have the same length. Weeks are appended in order and never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyResultStore {
    observations: BTreeMap<RosterId, Vec<WeeklyObservation>>,
    completed_weeks: u32,
    directory: RosterDirectory,
}

impl WeeklyResultStore {
    /// Create an empty store tracking every roster in the directory
    pub fn new(directory: &RosterDirectory) -> Self {
        Self {
            observations: directory.roster_ids().map(|id| (id, Vec::new())).collect(),
            completed_weeks: 0,
            directory: directory.clone(),
        }
    }

    /// Append the next week's results
    ///
    /// The week is validated as a whole before anything is stored: an entry
    /// for an unknown roster, a roster reported twice or a roster with no
    /// entry leaves the store untouched. Errors carry the 1-based week number.
    pub fn append_week(&mut self, entries: &[MatchupEntry]) -> Result<u32> {
        let week_index = self.completed_weeks;
        let week_number = week_index + 1;

        let mut week: BTreeMap<RosterId, WeeklyObservation> = BTreeMap::new();
        for entry in entries {
            if !self.observations.contains_key(&entry.roster_id) {
                return Err(LeagueDataError::UnknownRoster {
                    roster_id: entry.roster_id,
                    week: week_number,
                });
            }
            let observation = WeeklyObservation::new(week_index, entry.points, entry.matchup_id);
            if week.insert(entry.roster_id, observation).is_some() {
                return Err(LeagueDataError::DuplicateObservation {
                    roster_id: entry.roster_id,
                    week: week_number,
                });
            }
        }

        if let Some(missing) = self.observations.keys().find(|id| !week.contains_key(id)) {
            return Err(LeagueDataError::DataGap {
                roster_id: *missing,
                team_name: self.directory.name_or_fallback(*missing),
                week: week_number,
            });
        }

        for (roster_id, observation) in week {
            if let Some(sequence) = self.observations.get_mut(&roster_id) {
                sequence.push(observation);
            }
        }
        self.completed_weeks = week_number;
        Ok(week_number)
    }

    /// Number of weeks appended so far
    pub fn completed_weeks(&self) -> u32 {
        self.completed_weeks
    }

    pub fn roster_ids(&self) -> impl Iterator<Item = RosterId> + '_ {
        self.observations.keys().copied()
    }

    pub fn observations(&self, roster_id: RosterId) -> Option<&[WeeklyObservation]> {
        self.observations.get(&roster_id).map(Vec::as_slice)
    }

    /// Every roster's observation for a zero-based week index
    pub fn week(&self, week_index: u32) -> Vec<(RosterId, WeeklyObservation)> {
        self.observations
            .iter()
            .filter_map(|(id, seq)| seq.get(week_index as usize).map(|obs| (*id, *obs)))
            .collect()
    }

    /// Weekly points for a roster, in week order
    pub fn points(&self, roster_id: RosterId) -> Vec<f64> {
        self.observations(roster_id)
            .map(|seq| seq.iter().map(|obs| obs.points_scored).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RosterId, &[WeeklyObservation])> {
        self.observations.iter().map(|(id, seq)| (*id, seq.as_slice()))
    }
}
