use crate::domain::model::Assignment;
use crate::utils::error::{ExchangeError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EMAIL_SUBJECT: &str = "Gift Exchange Assignments";

#[derive(Debug, Serialize)]
pub struct AssignmentReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub assignments: &'a [Assignment],
}

/// `Giver -> Receiver`, one per line.
pub fn to_text(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(Assignment::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_csv(assignments: &[Assignment]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["giver", "receiver"])?;
    for assignment in assignments {
        writer.write_record([&assignment.giver, &assignment.receiver])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExchangeError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExchangeError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn to_json(assignments: &[Assignment], generated_at: DateTime<Utc>) -> Result<String> {
    let report = AssignmentReport {
        generated_at,
        assignments,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// A `mailto:` link carrying the assignments in the body. `None` when there is
/// nothing to send.
pub fn mailto_link(assignments: &[Assignment]) -> Option<String> {
    if assignments.is_empty() {
        return None;
    }

    let body = format!(
        "Here are the Gift Exchange assignments:\n\n{}\n\nGenerated by the Gift Exchange Helper.",
        to_text(assignments)
    );

    Some(format!(
        "mailto:?subject={}&body={}",
        encode_component(EMAIL_SUBJECT),
        encode_component(&body)
    ))
}

fn encode_component(value: &str) -> String {
    // form 編碼把空白轉成 '+'，郵件客戶端需要 %20；字面 '+' 已被編成 %2B
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
