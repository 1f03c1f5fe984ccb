//! The unit of work handed to hooks and formatters.

use crate::level::Level;
use chrono::{DateTime, Local};

/// One log event. Built by the logger after the level check, so entries below the
/// threshold never pay for the timestamp.
#[derive(Debug, Clone)]
pub struct Entry {
    pub level: Level,
    pub time: DateTime<Local>,
    pub message: String,
    /// Extra key/value context in insertion order.
    pub fields: Vec<(String, String)>,
}

impl Entry {
    /// Stamps the entry with the current local time.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            time: Local::now(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Appends one field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}
