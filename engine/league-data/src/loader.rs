//! Populates the roster directory and weekly result store from a provider

use crate::directory::RosterDirectory;
use crate::provider::LeagueDataProvider;
use crate::store::WeeklyResultStore;
use crate::Result;
use tracing::info;

/// Everything the ranking stages need from the data source
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSnapshot {
    pub directory: RosterDirectory,
    pub store: WeeklyResultStore,
}

/// Fetch users, rosters and weeks `1..=completed_weeks`, strictly in order
///
/// The first failing fetch or inconsistent week aborts the load.
pub async fn load_league<P>(
    provider: &P,
    league_id: &str,
    completed_weeks: u32,
) -> Result<LeagueSnapshot>
where
    P: LeagueDataProvider + ?Sized,
{
    info!("Loading league {} through week {}", league_id, completed_weeks);

    let users = provider.fetch_users(league_id).await?;
    let rosters = provider.fetch_rosters(league_id).await?;
    let directory = RosterDirectory::from_league(&users, &rosters);
    info!("Resolved {} rosters", directory.len());

    let mut store = WeeklyResultStore::new(&directory);
    for week in 1..=completed_weeks {
        let entries = provider.fetch_matchups(league_id, week).await?;
        store.append_week(&entries)?;
    }

    info!("Loaded {} weeks of results", store.completed_weeks());
    Ok(LeagueSnapshot { directory, store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeagueRoster, LeagueUser, MatchupEntry, MatchupId, NflState, RosterId};
    use crate::LeagueDataError;
    use std::sync::Mutex;

    struct FakeProvider {
        weeks: Vec<Vec<MatchupEntry>>,
        requested_weeks: Mutex<Vec<u32>>,
    }

    #[async_trait::async_trait]
    impl LeagueDataProvider for FakeProvider {
        async fn fetch_users(&self, _league_id: &str) -> Result<Vec<LeagueUser>> {
            Ok(vec![
                LeagueUser { user_id: "a".into(), display_name: "Alpha".into() },
                LeagueUser { user_id: "b".into(), display_name: "Bravo".into() },
            ])
        }

        async fn fetch_rosters(&self, _league_id: &str) -> Result<Vec<LeagueRoster>> {
            Ok(vec![
                LeagueRoster { roster_id: RosterId(1), owner_id: Some("a".into()) },
                LeagueRoster { roster_id: RosterId(2), owner_id: Some("b".into()) },
            ])
        }

        async fn fetch_matchups(&self, _league_id: &str, week: u32) -> Result<Vec<MatchupEntry>> {
            self.requested_weeks.lock().unwrap().push(week);
            self.weeks.get(week as usize - 1).cloned().ok_or_else(|| {
                LeagueDataError::SleeperApiError { message: format!("no week {week}") }
            })
        }

        async fn fetch_nfl_state(&self) -> Result<NflState> {
            Ok(NflState { week: 3, season: "2025".into(), season_type: "regular".into() })
        }
    }

    fn week(a: f64, b: f64) -> Vec<MatchupEntry> {
        vec![
            MatchupEntry { roster_id: RosterId(1), points: a, matchup_id: Some(MatchupId(1)) },
            MatchupEntry { roster_id: RosterId(2), points: b, matchup_id: Some(MatchupId(1)) },
        ]
    }

    #[tokio::test]
    async fn test_loads_weeks_in_order() {
        let provider = FakeProvider {
            weeks: vec![week(100.0, 90.0), week(80.0, 95.0)],
            requested_weeks: Mutex::new(Vec::new()),
        };

        let snapshot = load_league(&provider, "42", 2).await.unwrap();

        assert_eq!(*provider.requested_weeks.lock().unwrap(), vec![1, 2]);
        assert_eq!(snapshot.directory.name(RosterId(2)), Some("Bravo"));
        assert_eq!(snapshot.store.completed_weeks(), 2);
        assert_eq!(snapshot.store.points(RosterId(2)), vec![90.0, 95.0]);
    }

    #[tokio::test]
    async fn test_failed_week_aborts_load() {
        let provider = FakeProvider {
            weeks: vec![week(100.0, 90.0)],
            requested_weeks: Mutex::new(Vec::new()),
        };

        let err = load_league(&provider, "42", 3).await.unwrap_err();

        assert!(err.is_external_fetch());
        // Week 3 is never requested once week 2 fails
        assert_eq!(*provider.requested_weeks.lock().unwrap(), vec![1, 2]);
    }
}
