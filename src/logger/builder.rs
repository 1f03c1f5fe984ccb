//! Programmatic wiring. The assembler uses the same builder, so hand-built and
//! config-built loggers share one set of defaults.

use super::{Logger, LoggerState};
use crate::fmt::{Formatter, TextFormatter};
use crate::hook::Hook;
use crate::level::Level;
use crate::output::{Output, StreamOutput};
use std::sync::Arc;

/// Unset parts fall back to level `info`, `stdout` and `text` at build time.
#[derive(Default)]
pub struct LoggerBuilder {
    level: Level,
    output: Option<Arc<dyn Output>>,
    formatter: Option<Arc<dyn Formatter>>,
    hooks: Vec<Arc<dyn Hook>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn output(mut self, output: Arc<dyn Output>) -> Self {
        self.output = Some(output);
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Appends one hook; hooks fire in the order they were added.
    #[must_use]
    pub fn hook(mut self, hook: Arc<dyn Hook>) -> Self {
        self.hooks.push(hook);
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: impl IntoIterator<Item = Arc<dyn Hook>>) -> Self {
        self.hooks.extend(hooks);
        self
    }

    pub(crate) fn build_state(self) -> LoggerState {
        LoggerState {
            level: self.level,
            output: self
                .output
                .unwrap_or_else(|| Arc::new(StreamOutput::stdout())),
            formatter: self
                .formatter
                .unwrap_or_else(|| Arc::new(TextFormatter::new())),
            hooks: self.hooks,
        }
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::from_state(self.build_state())
    }
}
