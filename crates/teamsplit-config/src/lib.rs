//! Configuration system for teamsplit.
//!
//! Load allocation settings (team count, composition rules, naming, seed)
//! from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamsplit_config::AllocationConfig;
//! use teamsplit_core::TeamComposition;
//!
//! let config = AllocationConfig::from_toml_str(r#"
//!     total_teams = 3
//!     random_seed = 7
//!
//!     [[rules]]
//!     id = "rule-1"
//!     composition = "a_only"
//!     team_count = 1
//!     members_per_team = 3
//! "#).unwrap();
//!
//! assert_eq!(config.total_teams, 3);
//! assert_eq!(config.team_name_prefix, "WIP");
//! assert_eq!(config.rules[0].composition, TeamComposition::AOnly);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamsplit_config::AllocationConfig;
//!
//! let config = AllocationConfig::load("allocation.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use teamsplit_core::{CompositionRule, TeamConfig};
use thiserror::Error;

/// Team count used when none is configured.
pub const DEFAULT_TOTAL_TEAMS: usize = 4;

/// Prefix for generated team names (`WIP 1`, `WIP 2`, ...).
pub const DEFAULT_TEAM_NAME_PREFIX: &str = "WIP";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main allocation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocationConfig {
    /// Total number of teams to produce.
    #[serde(default = "default_total_teams")]
    pub total_teams: usize,

    /// Composition rules, applied in order.
    #[serde(default)]
    pub rules: Vec<CompositionRule>,

    /// Prefix for team display names.
    #[serde(default = "default_team_name_prefix")]
    pub team_name_prefix: String,

    /// Random seed for reproducible allocations.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_total_teams() -> usize {
    DEFAULT_TOTAL_TEAMS
}

fn default_team_name_prefix() -> String {
    DEFAULT_TEAM_NAME_PREFIX.to_string()
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            total_teams: DEFAULT_TOTAL_TEAMS,
            rules: Vec::new(),
            team_name_prefix: default_team_name_prefix(),
            random_seed: None,
        }
    }
}

impl AllocationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.check()
    }

    /// Sets the total team count.
    pub fn with_total_teams(mut self, total_teams: usize) -> Self {
        self.total_teams = total_teams;
        self
    }

    /// Appends a composition rule.
    pub fn with_rule(mut self, rule: CompositionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the team name prefix.
    pub fn with_team_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.team_name_prefix = prefix.into();
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Returns the per-call team configuration.
    pub fn team_config(&self) -> TeamConfig {
        TeamConfig {
            total_teams: self.total_teams,
            rules: self.rules.clone(),
        }
    }

    // Structural checks only; feasibility against a roster is the engine's job.
    fn check(self) -> Result<Self, ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate rule id {}",
                    rule.id
                )));
            }
        }
        Ok(self)
    }
}

impl From<&AllocationConfig> for TeamConfig {
    fn from(config: &AllocationConfig) -> Self {
        config.team_config()
    }
}
