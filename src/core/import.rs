use crate::core::engine::ExchangeEngine;
use crate::utils::error::{ExchangeError, Result};
use regex::Regex;

/// One parsed entry of a bulk name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub first_name: String,
    pub last_name: String,
    pub family_group: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Parse `"Mary Ann Smith [Smiths], John Doe"` style text.
///
/// Entries are comma separated. An optional `[Group]` tag is removed from the
/// entry; the last remaining word is the last name and the rest the first
/// name. Entries with fewer than two words are dropped.
pub fn parse_bulk(text: &str) -> Result<Vec<ImportEntry>> {
    let group_tag = Regex::new(r"\[(.*?)\]").map_err(|e| ExchangeError::ConfigValidationError {
        field: "bulk_import".to_string(),
        message: format!("Invalid group pattern: {}", e),
    })?;

    let mut entries = Vec::new();

    for raw in text.split(',') {
        let mut entry = raw.trim().to_string();
        if entry.is_empty() {
            continue;
        }

        let mut family_group = None;
        if let Some(caps) = group_tag.captures(&entry) {
            let group = caps[1].trim().to_string();
            let tag = caps[0].to_string();
            if !group.is_empty() {
                family_group = Some(group);
            }
            entry = entry.replacen(&tag, "", 1).trim().to_string();
        }

        let mut words: Vec<&str> = entry.split_whitespace().collect();
        if words.len() < 2 {
            tracing::debug!("Skipping bulk entry without first and last name: {:?}", raw);
            continue;
        }

        let last_name = words.pop().unwrap_or_default().to_string();
        entries.push(ImportEntry {
            first_name: words.join(" "),
            last_name,
            family_group,
        });
    }

    Ok(entries)
}

/// Add every parsed entry to the roster, silently skipping duplicates.
pub fn import_bulk(engine: &mut ExchangeEngine, text: &str) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for entry in parse_bulk(text)? {
        match engine.add_person(
            &entry.first_name,
            &entry.last_name,
            entry.family_group.as_deref(),
        ) {
            Ok(_) => summary.added += 1,
            Err(ExchangeError::DuplicateName { .. }) => summary.skipped += 1,
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Imported {} names ({} duplicates skipped)",
        summary.added,
        summary.skipped
    );
    Ok(summary)
}
