//! Configuration for league data access

use serde::{Deserialize, Serialize};

/// Default Sleeper API base URL
pub const DEFAULT_SLEEPER_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Sleeper API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleeperConfig {
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_SLEEPER_API_BASE_URL.to_string(), timeout_secs: 30 }
    }
}

impl SleeperConfig {
    /// Apply `SLEEPER_API_BASE_URL` / `SLEEPER_TIMEOUT_SECS` overrides
    pub fn apply_env(&mut self) -> crate::Result<()> {
        if let Ok(url) = std::env::var("SLEEPER_API_BASE_URL") {
            self.api_base_url = url;
        }

        if let Ok(timeout) = std::env::var("SLEEPER_TIMEOUT_SECS") {
            self.timeout_secs =
                timeout.parse().map_err(|_| crate::LeagueDataError::InvalidConfig {
                    message: format!("Invalid SLEEPER_TIMEOUT_SECS: {timeout}"),
                })?;
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_sleeper() {
        let config = SleeperConfig::default();
        assert_eq!(config.base_url(), "https://api.sleeper.app/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = SleeperConfig {
            api_base_url: "http://localhost:8080/v1/".to_string(),
            timeout_secs: 5,
        };
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }
}
