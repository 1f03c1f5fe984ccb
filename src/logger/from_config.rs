//! One-off construction without a Mate: build a config from options and assemble it.

use super::{Logger, assemble};
use crate::config::{Config, ConfigOption};
use crate::registry::Providers;
use crate::{Error, internal};

/// Builds a fresh logger from `options`. No options give the defaults.
///
/// # Errors
/// Config loading errors and anything [`assemble`] reports.
pub fn new_logger(providers: &Providers, options: &[ConfigOption]) -> Result<Logger, Error> {
    let logger = Logger::new();
    hijack(providers, &logger, options)?;
    Ok(logger)
}

/// Re-wires an existing logger from `options`.
///
/// # Errors
/// Config loading errors and anything [`assemble`] reports.
pub fn hijack(providers: &Providers, target: &Logger, options: &[ConfigOption]) -> Result<(), Error> {
    internal::debug("LOGGER", &format!("Hijacking logger from {} option(s)", options.len()));
    let conf = Config::from_options(options)?;
    assemble(Some(&conf), providers, target)
}
