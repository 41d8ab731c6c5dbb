use crate::core::engine::ExchangeEngine;
use crate::core::matcher::MatchSettings;
use crate::utils::error::{ExchangeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Roster file, e.g.
///
/// ```toml
/// [settings]
/// core_families = ["Rice", "Harlan"]
///
/// [matching]
/// strategy = "sampling"
/// seed = 7
///
/// [[participants]]
/// first_name = "Mindy"
/// last_name = "Rice"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub settings: RosterSettings,
    #[serde(default)]
    pub matching: MatchSettings,
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    pub core_families: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub first_name: String,
    pub last_name: String,
    pub family_group: Option<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExchangeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ExchangeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Add every participant to the engine. Stops at the first duplicate.
    pub fn populate(&self, engine: &mut ExchangeEngine) -> Result<usize> {
        for participant in &self.participants {
            engine.add_validated_person(
                &participant.first_name,
                &participant.last_name,
                participant.family_group.as_deref(),
            )?;
        }
        Ok(self.participants.len())
    }
}

impl Validate for MatchSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("max_attempts", self.max_attempts, 1, 1_000_000)?;
        validation::validate_range("max_retries", self.max_retries, 1, 100)?;
        Ok(())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.matching.validate()?;

        for (index, participant) in self.participants.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("participants[{}].first_name", index),
                &participant.first_name,
            )?;
            validation::validate_non_empty_string(
                &format!("participants[{}].last_name", index),
                &participant.last_name,
            )?;
        }

        Ok(())
    }
}
