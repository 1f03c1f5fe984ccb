//! Human-readable single-line formatter, registered as `text`.

use super::{FormatTemplate, FormatValues, Formatter};
use crate::config::Config;
use crate::entry::Entry;
use std::fmt::Write as _;

/// Renders entries through a [`FormatTemplate`].
#[derive(Debug, Clone)]
pub struct TextFormatter {
    template: FormatTemplate,
    timestamp_format: String,
    uppercase_level: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    pub const DEFAULT_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    #[must_use]
    pub fn new() -> Self {
        Self {
            template: FormatTemplate::default(),
            timestamp_format: Self::DEFAULT_TIMESTAMP_FORMAT.to_string(),
            uppercase_level: false,
        }
    }

    /// Options: `template`, `timestamp_format`, `uppercase_level`.
    #[must_use]
    pub fn from_config(options: Option<&Config>) -> Self {
        let Some(options) = options else {
            return Self::new();
        };
        Self::new()
            .template(&options.get_string("template", FormatTemplate::DEFAULT))
            .timestamp_format(options.get_string("timestamp_format", Self::DEFAULT_TIMESTAMP_FORMAT))
            .uppercase_level(options.get_bool("uppercase_level", false))
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    /// strftime syntax, as understood by `chrono`.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn uppercase_level(mut self, enabled: bool) -> Self {
        self.uppercase_level = enabled;
        self
    }

    /// Renders without the trailing newline.
    ///
    /// # Errors
    /// [`crate::Error::Format`] when the timestamp format string is malformed.
    pub fn render(&self, entry: &Entry) -> Result<String, crate::Error> {
        let level = if self.uppercase_level {
            entry.level.as_str().to_uppercase()
        } else {
            entry.level.as_str().to_string()
        };

        let mut fields = String::new();
        for (key, value) in &entry.fields {
            let _ = write!(fields, " {key}={value}");
        }

        let mut timestamp = String::new();
        write!(timestamp, "{}", entry.time.format(&self.timestamp_format)).map_err(|_| {
            crate::Error::Format(format!("bad timestamp format: {}", self.timestamp_format))
        })?;

        let values = FormatValues::new()
            .timestamp(timestamp)
            .level(level)
            .msg(entry.message.as_str())
            .fields(fields);

        Ok(self.template.render(&values))
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, crate::Error> {
        let mut line = self.render(entry)?;
        line.push('\n');
        Ok(line.into_bytes())
    }
}
