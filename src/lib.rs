pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::MemorySettingsStore;
pub use config::{cli::LocalSettingsStore, toml_config::RosterConfig};

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use crate::core::{
    engine::ExchangeEngine,
    families::CoreFamilies,
    matcher::{MatchSettings, MatchStrategy},
    session::ExchangeSession,
};
pub use domain::model::{Assignment, Participant, PoolKind};
pub use utils::error::{ExchangeError, Result};
