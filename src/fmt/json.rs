//! JSONL formatter, registered as `json`: one object per line, so `jq` and `grep`
//! work on the output directly.

use super::Formatter;
use crate::config::Config;
use crate::entry::Entry;

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use ulid::Ulid;

/// Keys the formatter owns. Entry fields with these names are written as `fields.<key>`.
const RESERVED: &[&str] = &["id", "ts", "level", "msg"];

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    ts: String,
    level: &'a str,
    msg: &'a str,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// strftime override for `ts`; RFC 3339 when unset.
    timestamp_format: Option<String>,
    /// Adds a time-sortable ULID `id` to every object.
    with_id: bool,
}

impl JsonFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options: `timestamp_format`, `with_id`.
    #[must_use]
    pub fn from_config(options: Option<&Config>) -> Self {
        let Some(options) = options else {
            return Self::new();
        };
        let format = options.get_string("timestamp_format", "");
        Self {
            timestamp_format: (!format.is_empty()).then_some(format),
            with_id: options.get_bool("with_id", false),
        }
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub const fn with_id(mut self, enabled: bool) -> Self {
        self.with_id = enabled;
        self
    }

    fn timestamp(&self, entry: &Entry) -> Result<String, crate::Error> {
        let Some(format) = &self.timestamp_format else {
            return Ok(entry.time.to_rfc3339());
        };
        let mut ts = String::new();
        write!(ts, "{}", entry.time.format(format))
            .map_err(|_| crate::Error::Format(format!("bad timestamp format: {format}")))?;
        Ok(ts)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, crate::Error> {
        let mut fields = Map::new();
        for (key, value) in &entry.fields {
            let key = if RESERVED.contains(&key.as_str()) {
                format!("fields.{key}")
            } else {
                key.clone()
            };
            fields.insert(key, Value::String(value.clone()));
        }

        let record = JsonEntry {
            id: self.with_id.then(|| Ulid::new().to_string()),
            ts: self.timestamp(entry)?,
            level: entry.level.as_str(),
            msg: &entry.message,
            fields,
        };

        let mut line = serde_json::to_vec(&record)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;
        line.push(b'\n');
        Ok(line)
    }
}
