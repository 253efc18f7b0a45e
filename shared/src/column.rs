//! Column model: how a record maps onto displayed cells.

use crate::error::ConsoleError;
use crate::record::{display_value, Record};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::fmt;

/// Turns a resolved raw value into display text.
pub type Formatter = fn(&Value) -> Result<String, FormatError>;

/// A formatter could not make sense of its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot format {value}: {reason}")]
pub struct FormatError {
    pub value: String,
    pub reason: String,
}

impl FormatError {
    pub fn new(value: &Value, reason: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// A single column: field path, header label and optional formatter.
#[derive(Clone)]
pub struct Column {
    key: String,
    header: String,
    formatter: Option<Formatter>,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            formatter: None,
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

// Columns are static configuration; two columns with the same path and label
// and the same formatter presence render identically for our purposes.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.formatter.is_some() == other.formatter.is_some()
    }
}

/// Resolve the display text for one cell. Never fails.
///
/// A missing path gives an empty cell. A formatter error falls back to the
/// raw value so the rest of the row still renders.
pub fn resolve_cell(record: &Record, column: &Column) -> String {
    let raw = match record.resolve(&column.key) {
        Some(Value::Null) | None => {
            log::debug!("{}", ConsoleError::FieldResolutionMiss(column.key.clone()));
            return String::new();
        }
        Some(raw) => raw,
    };

    match column.formatter {
        Some(formatter) => formatter(raw).unwrap_or_else(|e| {
            log::debug!(
                "{}",
                ConsoleError::FormatterFailure {
                    column: column.key.clone(),
                    reason: e.to_string(),
                }
            );
            display_value(raw)
        }),
        None => display_value(raw),
    }
}

/// Ordered, immutable set of columns. Order drives both headers and cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnModel {
    columns: Vec<Column>,
}

impl ColumnModel {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.clone()).collect()
    }

    /// All cells for one record, in column order.
    pub fn row(&self, record: &Record) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| resolve_cell(record, column))
            .collect()
    }
}

/// Format a timestamp as a short calendar date (`M/D/YYYY`).
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DDTHH:MM:SS[.f]` strings, plain
/// `YYYY-MM-DD` dates and millisecond epoch numbers.
pub fn format_date(value: &Value) -> Result<String, FormatError> {
    let date = match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.date_naive())
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
                })
                .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
                .map_err(|e| FormatError::new(value, e.to_string()))?
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| FormatError::new(value, "timestamp out of range"))?,
        _ => return Err(FormatError::new(value, "not a date")),
    };
    Ok(date.format("%-m/%-d/%Y").to_string())
}
