//! CSV rendering of the report.

use crate::records::TeamRecord;
use chrono::{DateTime, SecondsFormat, Utc};

/// Header row, in [`TeamRecord`] field order.
pub const COLUMNS: [&str; 6] = [
    "Team Name",
    "Repository URL",
    "Status",
    "Created At",
    "Is Fork",
    "Latest Commit Date",
];

/// Renders records as CSV text with a header row and `\n` line endings.
///
/// Empty values are written as empty fields. Booleans are `True`/`False`.
pub fn render(records: &[TeamRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, COLUMNS.iter().map(|c| c.to_string()));

    for record in records {
        push_row(
            &mut out,
            [
                record.team_name.clone(),
                record.repository_url.clone(),
                record.status.to_string(),
                format_timestamp(record.created_at),
                format_bool(record.is_fork),
                format_timestamp(record.latest_commit_date),
            ],
        );
    }

    out
}

/// Formats a timestamp as RFC 3339 UTC, e.g. `2026-01-05T00:00:00Z`.
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .unwrap_or_default()
}

fn format_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "True".to_string(),
        Some(false) => "False".to_string(),
        None => String::new(),
    }
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(&field));
    }
    out.push('\n');
}

/// Quotes a field if it contains a delimiter, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
