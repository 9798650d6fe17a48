//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    agents::{Agent, OptimalAgent, RandomAgent},
    search::SearchConfig,
};

/// Which policy controls a side in `play`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Optimal,
    Random,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Optimal => "optimal",
            AgentKind::Random => "random",
        }
    }

    /// Build an agent of this kind. Random agents use `seed` when given.
    pub fn build(self, name: &str, search: SearchConfig, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (AgentKind::Optimal, _) => Box::new(OptimalAgent::with_config(name.to_string(), search)),
            (AgentKind::Random, Some(seed)) => {
                Box::new(RandomAgent::with_seed(name.to_string(), seed))
            }
            (AgentKind::Random, None) => Box::new(RandomAgent::new(name.to_string())),
        }
    }
}

/// Configuration for the `play` command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Number of games to play
    pub games: usize,

    /// Policy playing X
    pub x: AgentKind,

    /// Policy playing O
    pub o: AgentKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Search settings for optimal agents
    pub search: SearchConfig,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            x: AgentKind::Optimal,
            o: AgentKind::Random,
            seed: None,
            search: SearchConfig::default(),
            progress: true,
        }
    }
}

impl PlayConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PlayConfig = serde_json::from_str(r#"{"games": 5, "o": "optimal"}"#).unwrap();
        assert_eq!(config.games, 5);
        assert_eq!(config.x, AgentKind::Optimal);
        assert_eq!(config.o, AgentKind::Optimal);
        assert_eq!(config.search, SearchConfig::default());
        assert!(config.progress);
    }

    #[test]
    fn test_rejects_unknown_agent() {
        let result: Result<PlayConfig, _> = serde_json::from_str(r#"{"x": "alphabeta"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_names_agent() {
        let agent = AgentKind::Random.build("rng", SearchConfig::default(), Some(3));
        assert_eq!(agent.name(), "rng");
        assert_eq!(AgentKind::Random.as_str(), "random");
    }
}
