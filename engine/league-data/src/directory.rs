use crate::types::{LeagueRoster, LeagueUser, RosterId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Roster ID to team display name lookup
///
/// Built once from the league's users and rosters, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterDirectory {
    names: BTreeMap<RosterId, String>,
}

impl RosterDirectory {
    /// Join rosters to their owners' display names
    pub fn from_league(users: &[LeagueUser], rosters: &[LeagueRoster]) -> Self {
        let user_names: HashMap<&str, &str> =
            users.iter().map(|u| (u.user_id.as_str(), u.display_name.as_str())).collect();

        let mut names = BTreeMap::new();
        for roster in rosters {
            let name = match roster.owner_id.as_deref().and_then(|id| user_names.get(id)) {
                Some(display_name) if !display_name.is_empty() => display_name.to_string(),
                _ => {
                    warn!("Roster {} has no owner display name, using fallback", roster.roster_id);
                    fallback_name(roster.roster_id)
                }
            };
            debug!("Roster {} -> {}", roster.roster_id, name);
            names.insert(roster.roster_id, name);
        }

        Self { names }
    }

    /// Build directly from (roster, name) pairs
    pub fn from_names<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RosterId, S)>,
        S: Into<String>,
    {
        Self { names: entries.into_iter().map(|(id, name)| (id, name.into())).collect() }
    }

    pub fn name(&self, roster_id: RosterId) -> Option<&str> {
        self.names.get(&roster_id).map(String::as_str)
    }

    /// Display name, or the fallback label for unknown rosters
    pub fn name_or_fallback(&self, roster_id: RosterId) -> String {
        self.name(roster_id).map(str::to_string).unwrap_or_else(|| fallback_name(roster_id))
    }

    pub fn contains(&self, roster_id: RosterId) -> bool {
        self.names.contains_key(&roster_id)
    }

    /// Roster IDs in ascending order
    pub fn roster_ids(&self) -> impl Iterator<Item = RosterId> + '_ {
        self.names.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RosterId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn fallback_name(roster_id: RosterId) -> String {
    format!("Roster {roster_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> LeagueUser {
        LeagueUser { user_id: id.to_string(), display_name: name.to_string() }
    }

    fn roster(id: u32, owner: Option<&str>) -> LeagueRoster {
        LeagueRoster { roster_id: RosterId(id), owner_id: owner.map(str::to_string) }
    }

    #[test]
    fn test_joins_rosters_to_owner_names() {
        let users = vec![user("u1", "gridiron_gary"), user("u2", "waiver_wendy")];
        let rosters = vec![roster(2, Some("u2")), roster(1, Some("u1"))];

        let directory = RosterDirectory::from_league(&users, &rosters);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name(RosterId(1)), Some("gridiron_gary"));
        assert_eq!(directory.name(RosterId(2)), Some("waiver_wendy"));
        assert_eq!(directory.roster_ids().collect::<Vec<_>>(), vec![RosterId(1), RosterId(2)]);
    }

    #[test]
    fn test_orphaned_and_unknown_owners_fall_back() {
        let users = vec![user("u1", "gridiron_gary")];
        let rosters = vec![roster(1, Some("u1")), roster(2, None), roster(3, Some("gone"))];

        let directory = RosterDirectory::from_league(&users, &rosters);

        assert_eq!(directory.name(RosterId(2)), Some("Roster 2"));
        assert_eq!(directory.name(RosterId(3)), Some("Roster 3"));
        assert_eq!(directory.name_or_fallback(RosterId(9)), "Roster 9");
        assert!(!directory.contains(RosterId(9)));
    }
}
