use crate::utils::error::{ExchangeError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ExchangeError {
    ExchangeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Settings directory: must be non-empty and must not point at a regular file.
pub fn validate_settings_dir(field_name: &str, dir: &str) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(invalid(field_name, dir, "Directory cannot be empty"));
    }
    if Path::new(dir).is_file() {
        return Err(invalid(field_name, dir, "Expected a directory, found a file"));
    }
    Ok(())
}

/// Roster files are TOML documents.
pub fn validate_roster_path(field_name: &str, path: &str) -> Result<()> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        _ => Err(invalid(field_name, path, "Roster file must have a .toml extension")),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// 名單輸入檢查：名與姓都必須填寫
pub fn validate_person_name(first_name: &str, last_name: &str) -> Result<()> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(ExchangeError::ValidationError {
            message: "Please enter both First Name and Last Name.".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_retries", 10, 1, 100).is_ok());
        assert!(validate_range("max_retries", 0, 1, 100).is_err());
        assert!(validate_range("max_retries", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_person_name() {
        assert!(validate_person_name("John", "Doe").is_ok());
        assert!(validate_person_name("  ", "Doe").is_err());
        assert!(validate_person_name("John", "").is_err());
    }

    #[test]
    fn test_validate_settings_dir() {
        assert!(validate_settings_dir("settings_dir", "./settings").is_ok());
        assert!(validate_settings_dir("settings_dir", " ").is_err());

        let file = NamedTempFile::new().unwrap();
        assert!(validate_settings_dir("settings_dir", file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_roster_path() {
        assert!(validate_roster_path("roster", "family.toml").is_ok());
        assert!(validate_roster_path("roster", "family.TOML").is_ok());
        assert!(validate_roster_path("roster", "family.csv").is_err());
        assert!(validate_roster_path("roster", "family").is_err());
    }
}
