//! Mirrors selected levels into a separate file, e.g. errors into `errors.log`.

use super::Hook;
use crate::Error;
use crate::config::Config;
use crate::entry::Entry;
use crate::fmt::{Formatter, TextFormatter};
use crate::level::Level;
use crate::output::{FileOutput, Output};
use crate::registry::Providers;
use std::sync::Arc;

/// Registered as `file`. Options:
///
/// ```toml
/// [default.hooks.file]
/// path = "~/.local/state/app/errors.log"
/// levels = ["error", "fatal", "panic"]   # default: every level
/// formatter = { name = "json" }          # any registered formatter; default: text
/// ```
pub struct FileHook {
    levels: Vec<Level>,
    formatter: Arc<dyn Formatter>,
    sink: FileOutput,
}

impl FileHook {
    #[must_use]
    pub fn new(path: impl AsRef<std::path::Path>, levels: Vec<Level>) -> Self {
        Self {
            levels,
            formatter: Arc::new(TextFormatter::new()),
            sink: FileOutput::new(path),
        }
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// # Errors
    /// [`Error::InvalidLevel`] for an unknown entry in `levels`,
    /// [`Error::UnknownProvider`] or [`Error::Provider`] when the formatter does not resolve.
    pub fn from_config(options: &Config, providers: &Providers) -> Result<Self, Error> {
        let levels = match options.get_string_list("levels") {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<Level>())
                .collect::<Result<Vec<_>, _>>()?,
            None => Level::all().to_vec(),
        };

        let (name, formatter_options) = match options.get_config("formatter") {
            Some(conf) => (conf.get_string("name", "text"), conf.get_config("options")),
            None => ("text".to_string(), None),
        };
        let formatter = providers.resolve_formatter(&name, formatter_options.as_ref())?;

        Ok(Self {
            levels,
            formatter,
            sink: FileOutput::from_config(Some(options)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.sink.path()
    }
}

impl Hook for FileHook {
    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &Entry) -> Result<(), Error> {
        let line = self.formatter.format(entry)?;
        self.sink.write(&line)?;
        self.sink.flush()
    }
}
