use crate::core::engine::ExchangeEngine;
use crate::core::families::CoreFamilies;
use crate::core::matcher::MatchSettings;
use crate::domain::ports::SettingsStore;
use crate::utils::error::Result;

pub const CORE_FAMILIES_KEY: &str = "giftExchange.coreFamilies";

/// An engine bound to a settings store that remembers the core family list
/// between runs.
pub struct ExchangeSession<S: SettingsStore> {
    store: S,
    engine: ExchangeEngine,
}

impl<S: SettingsStore> ExchangeSession<S> {
    pub async fn open(store: S, settings: MatchSettings) -> Result<Self> {
        let mut engine = ExchangeEngine::with_settings(Vec::<String>::new(), settings);

        // 讀取失敗時視為沒有儲存的設定
        match store.get(CORE_FAMILIES_KEY).await {
            Ok(Some(stored)) => {
                engine.set_core_families(CoreFamilies::parse(&stored).names());
                tracing::info!("Loaded core families: {}", engine.core_families_display());
            }
            Ok(None) => tracing::debug!("No stored core families"),
            Err(e) => tracing::warn!("Could not read stored core families: {}", e),
        }

        Ok(Self { store, engine })
    }

    /// Apply a comma separated core family list and persist the normalized form.
    /// An empty result removes the stored value. A store that cannot be written
    /// is logged and skipped; the families still apply to this session.
    pub async fn save_core_families(&mut self, raw: &str) -> Result<Vec<String>> {
        let families = CoreFamilies::parse(raw);
        let normalized = families.names();

        let persisted = if normalized.is_empty() {
            self.store.remove(CORE_FAMILIES_KEY).await
        } else {
            self.store
                .set(CORE_FAMILIES_KEY, &normalized.join(", "))
                .await
        };

        self.engine.set_core_families(&normalized);
        match persisted {
            Ok(()) => tracing::info!("Saved core families: {}", families.display()),
            Err(e) => tracing::warn!(
                "Core families set to {} but could not be saved: {}",
                families.display(),
                e
            ),
        }

        Ok(normalized)
    }

    pub fn engine(&self) -> &ExchangeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ExchangeEngine {
        &mut self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
