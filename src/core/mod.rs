pub mod engine;
pub mod export;
pub mod families;
pub mod import;
pub mod matcher;
pub mod session;

pub use crate::domain::model::{Assignment, Participant, PoolKind};
pub use crate::domain::ports::SettingsStore;
pub use crate::utils::error::Result;
