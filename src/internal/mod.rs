//! logmate's own diagnostic channel: assembly decisions, swallowed errors, skipped
//! config keys and failed writes are reported here.
//!
//! Nothing is emitted until the application installs a logger with [`init`]. The
//! slot is a `OnceLock`, so only the first installation takes effect.

use crate::level::Level;
use crate::logger::Logger;
use std::cell::Cell;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

thread_local! {
    /// Set while a diagnostic is being dispatched. If the diagnostic logger's own output
    /// fails, the resulting report is dropped instead of recursing.
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Installs the diagnostic logger. Returns `false` if one was already installed.
pub fn init(logger: Logger) -> bool {
    let installed = INTERNAL_LOGGER.set(logger).is_ok();
    if installed {
        debug("INTERNAL", "Internal logger ready");
    }
    installed
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if DISPATCHING.with(Cell::get) {
        return;
    }
    DISPATCHING.with(|flag| flag.set(true));
    logger.log_with_fields(level, msg, &[("scope", scope)]);
    DISPATCHING.with(|flag| flag.set(false));
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
