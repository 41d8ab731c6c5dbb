use crate::domain::ports::SettingsStore;
use crate::utils::error::{ExchangeError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";

/// Key-value settings kept as a JSON object in `<base_path>/settings.json`.
#[derive(Debug, Clone)]
pub struct LocalSettingsStore {
    base_path: String,
}

impl LocalSettingsStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(SETTINGS_FILE)
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.file_path();
        match tokio::fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data).map_err(|e| ExchangeError::StorageError {
                message: format!("{} is not a valid settings file: {}", path.display(), e),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let path = self.file_path();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(values)?;
        tokio::fs::write(path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for LocalSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}
