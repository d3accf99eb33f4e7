//! Audit log entry format.
//!
//! An entry is a timestamp line, a body, and a blank separator line. Files
//! hold entries newest-first.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// `Sat Oct 17 14:05:09 2026`. Day and month names are fixed English.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// One record in a category log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: String,
    body: String,
}

impl LogEntry {
    /// Entry whose body is the pretty-printed provider response.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn metadata<Tz>(at: &DateTime<Tz>, response: &Value) -> Result<Self, serde_json::Error>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Ok(Self {
            timestamp: format_timestamp(at),
            body: to_pretty_json(response)?,
        })
    }

    /// Entry whose body is a bare message. Blank lines are dropped so the
    /// entry separator stays unambiguous.
    #[must_use]
    pub fn message<Tz>(at: &DateTime<Tz>, message: &str) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let body = message
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            timestamp: format_timestamp(at),
            body,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Text written to the file for this entry.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}\n\n", self.timestamp, self.body)
    }
}

#[must_use]
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Pretty JSON with four-space indentation. Object keys come out sorted
/// because `serde_json::Map` is ordered.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Split log file content back into entries, newest first.
#[must_use]
pub fn parse_entries(content: &str) -> Vec<LogEntry> {
    content
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            let chunk = chunk.trim_start_matches('\n');
            let (timestamp, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            LogEntry {
                timestamp: timestamp.to_string(),
                body: body.to_string(),
            }
        })
        .collect()
}
