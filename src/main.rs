use chrono::Utc;
use clap::Parser;
use gift_exchange::core::{export, import};
use gift_exchange::utils::error::ErrorSeverity;
use gift_exchange::utils::{logger, validation::Validate};
use gift_exchange::{
    CliConfig, ExchangeError, ExchangeSession, LocalSettingsStore, OutputFormat, RosterConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting gift-exchange CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "❌ Gift exchange failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<Option<String>, ExchangeError> {
    config.validate()?;

    let roster = match &config.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path);
            RosterConfig::from_file(path)?
        }
        None => RosterConfig::default(),
    };
    roster.validate()?;

    let settings = config.match_settings(roster.matching.clone());
    settings.validate()?;

    let store = LocalSettingsStore::new(config.settings_dir.clone());
    let mut session = ExchangeSession::open(store, settings).await?;

    if let Some(raw) = &config.core_families {
        session.save_core_families(raw).await?;
    } else if let Some(families) = &roster.settings.core_families {
        // 名單檔的設定只套用於本次執行
        session.engine_mut().set_core_families(families);
    }

    let engine = session.engine_mut();
    roster.populate(engine)?;
    if let Some(names) = &config.names {
        let summary = import::import_bulk(engine, names)?;
        if summary.added == 0 && engine.is_empty() {
            return Err(ExchangeError::ValidationError {
                message: "No valid names found to import.".to_string(),
            });
        }
    }

    if config.dry_run {
        let (core_pool, other_pool) = engine.pools();
        println!("📋 Roster Summary:");
        println!("  Core families: {}", engine.core_families_display());
        println!("  Strategy: {:?}", engine.settings().strategy);
        println!("  Core pool ({}):", core_pool.len());
        for person in &core_pool {
            println!("    {}", person);
        }
        println!("  Other pool ({}):", other_pool.len());
        for person in &other_pool {
            println!("    {}", person);
        }
        return Ok(None);
    }

    let assignments = engine.shuffle_and_assign()?;

    let output = match config.format {
        OutputFormat::Text => export::to_text(&assignments),
        OutputFormat::Csv => export::to_csv(&assignments)?,
        OutputFormat::Json => export::to_json(&assignments, Utc::now())?,
        OutputFormat::Mailto => export::mailto_link(&assignments).unwrap_or_default(),
    };

    Ok(Some(output))
}
