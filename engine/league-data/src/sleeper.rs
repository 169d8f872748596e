//! Sleeper API integration

use crate::config::SleeperConfig;
use crate::provider::LeagueDataProvider;
use crate::types::{LeagueRoster, LeagueUser, MatchupEntry, NflState};
use crate::{LeagueDataError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Sleeper API client
#[derive(Debug)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: reqwest::Client,
}

impl SleeperClient {
    /// Create a new Sleeper API client
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn users_url(&self, league_id: &str) -> String {
        format!("{}/league/{}/users", self.config.base_url(), league_id)
    }

    pub fn rosters_url(&self, league_id: &str) -> String {
        format!("{}/league/{}/rosters", self.config.base_url(), league_id)
    }

    pub fn matchups_url(&self, league_id: &str, week: u32) -> String {
        format!("{}/league/{}/matchups/{}", self.config.base_url(), league_id, week)
    }

    pub fn nfl_state_url(&self) -> String {
        format!("{}/state/nfl", self.config.base_url())
    }

    /// GET a JSON document, mapping failures to errors that name the endpoint
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        debug!("Sleeper GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LeagueDataError::SleeperApiError {
                message: format!("Failed to get {what}: {status} - {error_text}"),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LeagueDataError::SleeperApiError {
            message: format!("Failed to parse {what} JSON: {e}"),
        })
    }
}

#[async_trait::async_trait]
impl LeagueDataProvider for SleeperClient {
    async fn fetch_users(&self, league_id: &str) -> Result<Vec<LeagueUser>> {
        let users: Vec<LeagueUser> = self.get_json(&self.users_url(league_id), "users").await?;
        info!("Fetched {} users for league {}", users.len(), league_id);
        Ok(users)
    }

    async fn fetch_rosters(&self, league_id: &str) -> Result<Vec<LeagueRoster>> {
        let rosters: Vec<LeagueRoster> =
            self.get_json(&self.rosters_url(league_id), "rosters").await?;
        info!("Fetched {} rosters for league {}", rosters.len(), league_id);
        Ok(rosters)
    }

    async fn fetch_matchups(&self, league_id: &str, week: u32) -> Result<Vec<MatchupEntry>> {
        // Sleeper answers null for weeks that have no matchups yet
        let matchups: Option<Vec<MatchupEntry>> = self
            .get_json(&self.matchups_url(league_id, week), &format!("week {week} matchups"))
            .await?;
        let matchups = matchups.unwrap_or_default();
        info!("Fetched {} matchup entries for week {}", matchups.len(), week);
        Ok(matchups)
    }

    async fn fetch_nfl_state(&self) -> Result<NflState> {
        let state: NflState = self.get_json(&self.nfl_state_url(), "NFL state").await?;
        info!("NFL state: season {} week {}", state.season, state.week);
        Ok(state)
    }
}
