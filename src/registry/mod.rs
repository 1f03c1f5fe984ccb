//! Name → factory tables for outputs, formatters and hooks.
//!
//! Configuration refers to components by name (`out.name = "file"`); the assembler looks
//! those names up here. Concrete providers register themselves in [`Providers::builtin`],
//! and applications add their own with the `register_*` methods before sharing the table.

use crate::Error;
use crate::config::Config;
use crate::fmt::{Formatter, JsonFormatter, TextFormatter};
use crate::hook::{FileHook, Hook};
use crate::output::{FileOutput, NullOutput, Output, StreamOutput};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Error type factories may return; wrapped into [`Error::Provider`] on the way out.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Builds one component from its (optional) options subtree. The provider table is passed
/// along so a component can resolve the parts it is made of (a hook's formatter, say).
pub type Factory<T> =
    Arc<dyn Fn(Option<&Config>, &Providers) -> Result<T, BoxError> + Send + Sync>;

/// Which of the three tables an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Output,
    Formatter,
    Hook,
}

impl ProviderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Output => "output",
            Self::Formatter => "formatter",
            Self::Hook => "hook",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One name → factory table.
pub struct Registry<T> {
    kind: ProviderKind,
    factories: HashMap<String, Factory<T>>,
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            factories: self.factories.clone(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("names", &self.names())
            .finish()
    }
}

impl<T> Registry<T> {
    #[must_use]
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            factories: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Adds a factory, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Option<&Config>, &Providers) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the component registered under `name`, handing `providers` to its factory.
    ///
    /// # Errors
    /// [`Error::UnknownProvider`] when nothing is registered under `name`,
    /// [`Error::Provider`] when the factory fails.
    pub fn resolve(
        &self,
        name: &str,
        options: Option<&Config>,
        providers: &Providers,
    ) -> Result<T, Error> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::UnknownProvider {
                kind: self.kind,
                name: name.to_string(),
            })?;

        factory(options, providers).map_err(|source| Error::Provider {
            kind: self.kind,
            name: name.to_string(),
            source,
        })
    }
}

/// The three tables the assembler resolves against.
#[derive(Clone, Debug)]
pub struct Providers {
    outputs: Registry<Arc<dyn Output>>,
    formatters: Registry<Arc<dyn Formatter>>,
    hooks: Registry<Arc<dyn Hook>>,
}

impl Default for Providers {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Providers {
    /// Empty tables; even `stdout` and `text` must be registered by hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            outputs: Registry::new(ProviderKind::Output),
            formatters: Registry::new(ProviderKind::Formatter),
            hooks: Registry::new(ProviderKind::Hook),
        }
    }

    /// Tables pre-filled with the crate's own providers:
    /// outputs `stdout`, `stderr`, `null`, `file`; formatters `text`, `json`; hook `file`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut providers = Self::new();

        providers.register_output("stdout", |_| Ok(StreamOutput::stdout()));
        providers.register_output("stderr", |_| Ok(StreamOutput::stderr()));
        providers.register_output("null", |_| Ok(NullOutput));
        providers.register_output("file", |options| Ok(FileOutput::from_config(options)));

        providers.register_formatter("text", |options| Ok(TextFormatter::from_config(options)));
        providers.register_formatter("json", |options| Ok(JsonFormatter::from_config(options)));

        providers.register_hook_with("file", |options, providers| {
            let empty = Config::empty();
            Ok(FileHook::from_config(options.unwrap_or(&empty), providers)?)
        });

        providers
    }

    pub fn register_output<O, F>(&mut self, name: impl Into<String>, factory: F)
    where
        O: Output + 'static,
        F: Fn(Option<&Config>) -> Result<O, BoxError> + Send + Sync + 'static,
    {
        self.outputs.register(name, move |options, _| {
            factory(options).map(|output| Arc::new(output) as Arc<dyn Output>)
        });
    }

    pub fn register_formatter<T, F>(&mut self, name: impl Into<String>, factory: F)
    where
        T: Formatter + 'static,
        F: Fn(Option<&Config>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.formatters.register(name, move |options, _| {
            factory(options).map(|formatter| Arc::new(formatter) as Arc<dyn Formatter>)
        });
    }

    pub fn register_hook<H, F>(&mut self, name: impl Into<String>, factory: F)
    where
        H: Hook + 'static,
        F: Fn(Option<&Config>) -> Result<H, BoxError> + Send + Sync + 'static,
    {
        self.register_hook_with(name, move |options, _| factory(options));
    }

    /// Like [`Providers::register_hook`], for hooks that build parts of themselves
    /// (formatters, outputs) from the same table they are resolved from.
    pub fn register_hook_with<H, F>(&mut self, name: impl Into<String>, factory: F)
    where
        H: Hook + 'static,
        F: Fn(Option<&Config>, &Self) -> Result<H, BoxError> + Send + Sync + 'static,
    {
        self.hooks.register(name, move |options, providers| {
            factory(options, providers).map(|hook| Arc::new(hook) as Arc<dyn Hook>)
        });
    }

    #[must_use]
    pub const fn outputs(&self) -> &Registry<Arc<dyn Output>> {
        &self.outputs
    }

    #[must_use]
    pub const fn formatters(&self) -> &Registry<Arc<dyn Formatter>> {
        &self.formatters
    }

    #[must_use]
    pub const fn hooks(&self) -> &Registry<Arc<dyn Hook>> {
        &self.hooks
    }

    /// # Errors
    /// See [`Registry::resolve`].
    pub fn resolve_output(
        &self,
        name: &str,
        options: Option<&Config>,
    ) -> Result<Arc<dyn Output>, Error> {
        self.outputs.resolve(name, options, self)
    }

    /// # Errors
    /// See [`Registry::resolve`].
    pub fn resolve_formatter(
        &self,
        name: &str,
        options: Option<&Config>,
    ) -> Result<Arc<dyn Formatter>, Error> {
        self.formatters.resolve(name, options, self)
    }

    /// # Errors
    /// See [`Registry::resolve`].
    pub fn resolve_hook(&self, name: &str, options: &Config) -> Result<Arc<dyn Hook>, Error> {
        self.hooks.resolve(name, Some(options), self)
    }
}
