//! The logging facility. A [`Logger`] holds its wiring (level, output, formatter, hooks)
//! in one [`LoggerState`] bundle that is swapped atomically, so reassembly never exposes
//! a half-updated logger to threads that are logging through it.

mod assemble;
mod builder;
mod from_config;

pub use assemble::{DEFAULT_FORMATTER, DEFAULT_LEVEL, DEFAULT_OUTPUT, assemble};
pub use builder::LoggerBuilder;
pub use from_config::{hijack, new_logger};

use crate::entry::Entry;
use crate::fmt::Formatter;
use crate::hook::Hook;
use crate::internal;
use crate::level::Level;
use crate::output::Output;
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// Everything a logger needs to dispatch an entry. Immutable once published.
#[derive(Clone)]
pub struct LoggerState {
    level: Level,
    output: Arc<dyn Output>,
    formatter: Arc<dyn Formatter>,
    hooks: Vec<Arc<dyn Hook>>,
}

impl LoggerState {
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn output(&self) -> &Arc<dyn Output> {
        &self.output
    }

    #[must_use]
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Hooks in the order they fire.
    #[must_use]
    pub fn hooks(&self) -> &[Arc<dyn Hook>] {
        &self.hooks
    }
}

impl fmt::Debug for LoggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerState")
            .field("level", &self.level)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

/// Shared handle; wrap in `Arc` to hand it to several owners.
pub struct Logger {
    state: ArcSwap<LoggerState>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("state", &*self.state.load())
            .finish()
    }
}

impl Logger {
    /// Level `info`, output `stdout`, formatter `text`, no hooks.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_state(state: LoggerState) -> Self {
        Self {
            state: ArcSwap::from_pointee(state),
        }
    }

    /// Replaces the whole wiring in one store.
    pub(crate) fn publish(&self, state: LoggerState) {
        self.state.store(Arc::new(state));
    }

    /// Snapshot of the current wiring.
    #[must_use]
    pub fn state(&self) -> Arc<LoggerState> {
        self.state.load_full()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.state.load().level
    }

    /// Republishes the current wiring with a new threshold.
    pub fn set_level(&self, level: Level) {
        self.state.rcu(|current| LoggerState {
            level,
            ..LoggerState::clone(current)
        });
    }

    #[must_use]
    pub fn output(&self) -> Arc<dyn Output> {
        Arc::clone(&self.state.load().output)
    }

    #[must_use]
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.state.load().formatter)
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.state.load().hooks.len()
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn log(&self, level: Level, msg: &str) {
        self.log_with_fields(level, msg, &[]);
    }

    /// Entries below the threshold are dropped before any work is done.
    pub fn log_with_fields(&self, level: Level, msg: &str, fields: &[(&str, &str)]) {
        let state = self.state.load_full();
        if level < state.level {
            return;
        }

        let mut entry = Entry::new(level, msg);
        entry
            .fields
            .extend(fields.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));

        dispatch(&state, &entry);
    }

    pub fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Logs at `fatal`. The process keeps running; exiting is the caller's decision.
    pub fn fatal(&self, msg: &str) {
        self.log(Level::Fatal, msg);
    }

    /// Logs at `panic`. Does not unwind.
    pub fn panic(&self, msg: &str) {
        self.log(Level::Panic, msg);
    }

    /// # Errors
    /// The output's flush error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.state.load().output.flush()
    }
}

/// Hooks first, in order, then format and write. Failures are reported, never raised.
fn dispatch(state: &LoggerState, entry: &Entry) {
    for hook in &state.hooks {
        if hook.levels().contains(&entry.level)
            && let Err(e) = hook.fire(entry)
        {
            internal::warn("HOOK", &format!("Failed to fire hook: {e}"));
        }
    }

    match state.formatter.format(entry) {
        Ok(bytes) => {
            if let Err(e) = state.output.write(&bytes) {
                internal::error("OUTPUT", &format!("Failed to write entry: {e}"));
            }
        }
        Err(e) => internal::error("FORMAT", &format!("Failed to format entry: {e}")),
    }
}
