//! Registry of named loggers.
//!
//! A [`Mate`] reads a root configuration whose top-level tables are logger profiles
//! (`[default]`, `[audit]`, ...). [`Mate::logger`] assembles a profile on first use and
//! hands every later caller the same `Arc`. [`Mate::hijack`] re-wires a caller-owned
//! logger from a profile without touching that cache.

use crate::config::{Config, ConfigOption};
use crate::logger::{Logger, assemble};
use crate::registry::Providers;
use crate::{Error, internal};
use dashmap::DashMap;
use std::sync::Arc;

/// Profile used when no name (or a blank one) is given.
pub const DEFAULT_LOGGER: &str = "default";

#[derive(Debug)]
pub struct Mate {
    providers: Arc<Providers>,
    configs: DashMap<String, Config>,
    loggers: DashMap<String, Arc<Logger>>,
}

impl Mate {
    /// Builds a Mate over the built-in providers.
    ///
    /// # Errors
    /// Config loading errors. An empty configuration is not an error.
    pub fn new(options: &[ConfigOption]) -> Result<Self, Error> {
        Self::with_providers(Providers::builtin(), options)
    }

    /// Builds a Mate over a custom provider table.
    ///
    /// # Errors
    /// Config loading errors. An empty configuration is not an error.
    pub fn with_providers(
        providers: impl Into<Arc<Providers>>,
        options: &[ConfigOption],
    ) -> Result<Self, Error> {
        let conf = Config::from_options(options)?;
        let mate = Self {
            providers: providers.into(),
            configs: DashMap::new(),
            loggers: DashMap::new(),
        };

        if conf.is_empty() {
            internal::debug("MATE", "No logger profiles configured");
            return Ok(mate);
        }

        for name in conf.keys() {
            match conf.child(&name) {
                Some(profile) => {
                    mate.configs.entry(name).or_insert(profile);
                }
                None => internal::warn(
                    "MATE",
                    &format!("Skipping top-level key '{name}': not a logger table"),
                ),
            }
        }

        internal::debug(
            "MATE",
            &format!("Loaded {} logger profile(s)", mate.configs.len()),
        );
        Ok(mate)
    }

    #[must_use]
    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    /// Assembles profile `name` onto `target`. Extra `options` are layered *under* the
    /// stored profile: they only fill keys the profile leaves unset, and the stored
    /// profile is not modified.
    ///
    /// # Errors
    /// [`Error::LoggerNotFound`] for an unknown name; otherwise whatever loading the
    /// options or [`assemble`] reports.
    pub fn hijack(
        &self,
        target: &Logger,
        name: &str,
        options: &[ConfigOption],
    ) -> Result<(), Error> {
        let conf = self
            .configs
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::LoggerNotFound(name.to_string()))?;

        if options.is_empty() {
            return assemble(Some(&conf), &self.providers, target);
        }

        let extra = Config::from_options(options)?;
        assemble(Some(&conf.with_fallback(&extra)), &self.providers, target)
    }

    /// Cached logger for `name` (`"default"` when `None` or blank).
    ///
    /// `None` covers both "no such profile" and "profile failed to assemble"; the latter
    /// is reported through the internal diagnostics. Use [`Mate::try_logger`] to tell
    /// them apart.
    #[must_use]
    pub fn logger(&self, name: Option<&str>) -> Option<Arc<Logger>> {
        match self.try_logger(name) {
            Ok(logger) => Some(logger),
            Err(Error::LoggerNotFound(_)) => None,
            Err(e) => {
                internal::warn(
                    "MATE",
                    &format!("Logger '{}' failed to assemble: {e}", normalize(name)),
                );
                None
            }
        }
    }

    /// Like [`Mate::logger`], but reports why no logger could be returned.
    ///
    /// Concurrent first calls may each assemble a candidate; exactly one is published
    /// and returned to all of them.
    ///
    /// # Errors
    /// [`Error::LoggerNotFound`] for an unknown name, or the assembly error.
    pub fn try_logger(&self, name: Option<&str>) -> Result<Arc<Logger>, Error> {
        let name = normalize(name);

        if let Some(cached) = self.loggers.get(name) {
            return Ok(Arc::clone(cached.value()));
        }

        let conf = self
            .configs
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::LoggerNotFound(name.to_string()))?;

        let fresh = Logger::new();
        assemble(Some(&conf), &self.providers, &fresh)?;

        let canonical = Arc::clone(
            self.loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(fresh))
                .value(),
        );
        internal::debug("MATE", &format!("Logger '{name}' ready"));
        Ok(canonical)
    }

    /// Every configured profile name, in no particular order.
    #[must_use]
    pub fn logger_names(&self) -> Vec<String> {
        self.configs.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Stored profile for `name`, if any.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<Config> {
        self.configs.get(name).map(|entry| entry.value().clone())
    }
}

fn normalize(name: Option<&str>) -> &str {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_LOGGER)
}
