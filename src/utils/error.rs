use crate::domain::model::PoolKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("\"{first_name} {last_name}\" is already on the list.")]
    DuplicateName {
        first_name: String,
        last_name: String,
    },

    #[error("Please add at least 2 people.")]
    InsufficientParticipants { count: usize },

    #[error("{}", singleton_message(.pool, .core_families))]
    SingletonPool {
        pool: PoolKind,
        core_families: String,
    },

    #[error("{}", unmatchable_message(.pool))]
    UnmatchablePool { pool: PoolKind },

    #[error("Could not find valid assignments after {attempts} attempts. Try adding more people or checking constraints.")]
    AssignmentFailure { attempts: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Settings storage error: {message}")]
    StorageError { message: String },
}

fn singleton_message(pool: &PoolKind, core_families: &str) -> String {
    match pool {
        PoolKind::Core => format!(
            "Cannot match: Only 1 person in the Core families ({}).",
            core_families
        ),
        PoolKind::Other => format!("Cannot match: Only 1 person in the {} group.", pool),
    }
}

fn unmatchable_message(pool: &PoolKind) -> String {
    match pool {
        PoolKind::Core => "Cannot match Core families: All members are in the same family group. Please add people from different Core families.".to_string(),
        PoolKind::Other => format!(
            "Cannot match {} group: All members are in the same family group. Please add people from different families.",
            pool
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Roster,
    Matching,
    Configuration,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ExchangeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExchangeError::DuplicateName { .. }
            | ExchangeError::InsufficientParticipants { .. }
            | ExchangeError::ValidationError { .. } => ErrorCategory::Roster,
            ExchangeError::SingletonPool { .. }
            | ExchangeError::UnmatchablePool { .. }
            | ExchangeError::AssignmentFailure { .. } => ErrorCategory::Matching,
            ExchangeError::ConfigValidationError { .. }
            | ExchangeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ExchangeError::StorageError { .. } | ExchangeError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            ExchangeError::IoError(_) | ExchangeError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重試或調整名單後可能成功
            ExchangeError::AssignmentFailure { .. } | ExchangeError::StorageError { .. } => {
                ErrorSeverity::Medium
            }
            ExchangeError::DuplicateName { .. }
            | ExchangeError::InsufficientParticipants { .. }
            | ExchangeError::SingletonPool { .. }
            | ExchangeError::UnmatchablePool { .. }
            | ExchangeError::ValidationError { .. }
            | ExchangeError::ConfigValidationError { .. }
            | ExchangeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ExchangeError::IoError(_)
            | ExchangeError::SerializationError(_)
            | ExchangeError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ExchangeError::DuplicateName { .. } => {
                "Use a different first or last name for this person".to_string()
            }
            ExchangeError::InsufficientParticipants { .. } => {
                "Add at least two people before shuffling".to_string()
            }
            ExchangeError::SingletonPool { pool: PoolKind::Core, .. } => {
                "Add another person from a Core family or change the Core family list".to_string()
            }
            ExchangeError::SingletonPool { pool: PoolKind::Other, .. } => {
                "Add another non-Core person or include their family in the Core list".to_string()
            }
            ExchangeError::UnmatchablePool { .. } => {
                "Add people from a different family group to this pool".to_string()
            }
            ExchangeError::AssignmentFailure { .. } => {
                "Run the shuffle again, add more people, or use the constructive strategy"
                    .to_string()
            }
            ExchangeError::ConfigValidationError { field, .. }
            | ExchangeError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting", field)
            }
            ExchangeError::ValidationError { .. } => {
                "Enter both a first name and a last name".to_string()
            }
            ExchangeError::StorageError { .. } | ExchangeError::SerializationError(_) => {
                "Check the settings directory or delete the corrupted settings file".to_string()
            }
            ExchangeError::IoError(_) => "Check file paths and permissions".to_string(),
            ExchangeError::CsvError(_) => "Try a different export format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Roster | ErrorCategory::Matching => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Could not read or write settings: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
