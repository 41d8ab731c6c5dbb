pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::matcher::{MatchSettings, MatchStrategy};
#[cfg(feature = "cli")]
use crate::utils::error::{ExchangeError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
    Mailto,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gift-exchange")]
#[command(about = "Draw gift exchange pairings that keep families apart")]
pub struct CliConfig {
    /// TOML roster file with participants and optional settings
    #[arg(long)]
    pub roster: Option<String>,

    /// Bulk names, e.g. "Mary Ann Smith [Smiths], John Doe"
    #[arg(long)]
    pub names: Option<String>,

    /// Comma separated core family last names (saved for later runs)
    #[arg(long)]
    pub core_families: Option<String>,

    #[arg(long, default_value = "./.gift-exchange")]
    pub settings_dir: String,

    #[arg(long, value_enum)]
    pub strategy: Option<MatchStrategy>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show the pools without drawing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line flags take precedence over the roster file.
    pub fn match_settings(&self, base: MatchSettings) -> MatchSettings {
        MatchSettings {
            strategy: self.strategy.unwrap_or(base.strategy),
            seed: self.seed.or(base.seed),
            ..base
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_settings_dir("settings_dir", &self.settings_dir)?;

        if let Some(roster) = &self.roster {
            validation::validate_roster_path("roster", roster)?;
        }

        if self.roster.is_none() && self.names.is_none() {
            return Err(ExchangeError::ConfigValidationError {
                field: "roster".to_string(),
                message: "Provide --roster or --names".to_string(),
            });
        }

        Ok(())
    }
}
