use anyhow::Result;
use gift_exchange::config::cli::SETTINGS_FILE;
use gift_exchange::core::session::CORE_FAMILIES_KEY;
use gift_exchange::core::{export, import};
use gift_exchange::domain::ports::SettingsStore;
use gift_exchange::{
    ExchangeSession, LocalSettingsStore, MatchSettings, MemorySettingsStore, RosterConfig,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_saved_core_families_are_loaded_next_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    let mut session =
        ExchangeSession::open(LocalSettingsStore::new(base.clone()), MatchSettings::default())
            .await?;
    let saved = session.save_core_families(" Rice, rice ,, Harlan").await?;
    assert_eq!(saved, vec!["Rice", "Harlan"]);
    assert_eq!(session.engine().core_families_display(), "Rice, Harlan");

    let reopened =
        ExchangeSession::open(LocalSettingsStore::new(base), MatchSettings::default()).await?;
    assert_eq!(reopened.engine().core_families(), vec!["Rice", "Harlan"]);
    assert!(reopened.engine().is_core_last_name("harlan"));
    Ok(())
}

#[tokio::test]
async fn test_empty_core_families_remove_stored_value() -> Result<()> {
    let store = MemorySettingsStore::new();
    store.set(CORE_FAMILIES_KEY, "Rice").await?;

    let mut session = ExchangeSession::open(store, MatchSettings::default()).await?;
    assert_eq!(session.engine().core_families(), vec!["Rice"]);

    let saved = session.save_core_families("  ,  ").await?;
    assert!(saved.is_empty());
    assert_eq!(session.engine().core_families_display(), "None");
    assert_eq!(session.store().get(CORE_FAMILIES_KEY).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_unreadable_settings_fall_back_to_none() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join(SETTINGS_FILE), "{ broken").await?;

    let store = LocalSettingsStore::new(temp_dir.path().to_str().unwrap().to_string());
    let session = ExchangeSession::open(store, MatchSettings::default()).await?;
    assert_eq!(session.engine().core_families_display(), "None");
    Ok(())
}

#[tokio::test]
async fn test_unwritable_settings_still_apply_core_families() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join(SETTINGS_FILE);
    tokio::fs::write(&settings_path, "{ broken").await?;

    let store = LocalSettingsStore::new(temp_dir.path().to_str().unwrap().to_string());
    let mut session = ExchangeSession::open(store, MatchSettings::default()).await?;

    let saved = session.save_core_families("Rice, Harlan").await?;
    assert_eq!(saved, vec!["Rice", "Harlan"]);
    assert_eq!(session.engine().core_families(), saved);
    assert!(session.engine().is_core_last_name("rice"));

    // 損壞的檔案保持原樣
    assert_eq!(tokio::fs::read_to_string(&settings_path).await?, "{ broken");
    Ok(())
}

#[tokio::test]
async fn test_roster_file_import_and_export_flow() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let roster_path = temp_dir.path().join("roster.toml");
    tokio::fs::write(
        &roster_path,
        r#"
[settings]
core_families = ["Rice", "Harlan"]

[matching]
strategy = "sampling"
seed = 11

[[participants]]
first_name = "Mindy"
last_name = "Rice"

[[participants]]
first_name = "Zac"
last_name = "Harlan"
"#,
    )
    .await?;

    let roster = RosterConfig::from_file(&roster_path)?;
    let mut session =
        ExchangeSession::open(MemorySettingsStore::new(), roster.matching.clone()).await?;
    if let Some(families) = &roster.settings.core_families {
        session.engine_mut().set_core_families(families);
    }

    let engine = session.engine_mut();
    roster.populate(engine)?;
    let summary = import::import_bulk(engine, "John Doe [Doe1], Jane Doe [Doe2], Zac Harlan")?;
    assert_eq!(summary.added, 2);
    assert_eq!(summary.skipped, 1);

    let assignments = engine.shuffle_and_assign()?;
    assert_eq!(assignments.len(), 4);

    let text = export::to_text(&assignments);
    assert!(text.contains("Mindy Rice -> Zac Harlan"));
    assert!(text.contains("John Doe -> Jane Doe"));

    let csv = export::to_csv(&assignments)?;
    assert!(csv.starts_with("giver,receiver\n"));
    assert_eq!(csv.lines().count(), 5);
    Ok(())
}
