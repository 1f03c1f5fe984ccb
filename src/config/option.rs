//! Sources that feed a root [`Config`]: inline TOML, files with `source = "..."`
//! includes, or an already-built tree.

use super::Config;
use crate::{Error, internal};
use std::fs;
use std::path::{Path, PathBuf};

/// One configuration source. A list of options composes in order, each later
/// option overriding the earlier ones key by key.
#[derive(Debug, Clone)]
pub enum ConfigOption {
    /// Inline TOML text.
    Toml(String),
    /// A TOML file. `~` is expanded and top-level `source = "..."` lines pull in further files.
    File(PathBuf),
    /// A tree built elsewhere.
    Tree(Config),
}

impl ConfigOption {
    #[must_use]
    pub fn toml(text: impl Into<String>) -> Self {
        Self::Toml(text.into())
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    #[must_use]
    pub const fn tree(config: Config) -> Self {
        Self::Tree(config)
    }

    /// Reads this source into a tree.
    ///
    /// # Errors
    /// I/O failures, TOML syntax errors, and include cycles.
    pub fn load(&self) -> Result<Config, Error> {
        match self {
            Self::Toml(text) => Config::parse(text),
            Self::File(path) => load_file(&expand(&path.to_string_lossy()), &mut Vec::new()),
            Self::Tree(config) => Ok(config.clone()),
        }
    }
}

impl Config {
    /// Composes options into one tree; later options take precedence over earlier ones.
    /// No options yield an empty tree.
    ///
    /// # Errors
    /// The first error any option reports while loading.
    pub fn from_options(options: &[ConfigOption]) -> Result<Self, Error> {
        options.iter().try_fold(Self::empty(), |acc, option| {
            Ok(option.load()?.with_fallback(&acc))
        })
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Loads a file and its includes. `stack` holds the include chain currently being
/// expanded, so a file reached twice through different branches is not a cycle.
fn load_file(path: &Path, stack: &mut Vec<PathBuf>) -> Result<Config, Error> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    if stack.contains(&canonical) {
        internal::warn(
            "CONFIG",
            &format!("Cyclic include detected: {}", canonical.display()),
        );
        return Err(Error::CyclicInclude(canonical));
    }

    let content = fs::read_to_string(path)?;
    let (sources, body) = extract_sources(&content);
    let mut config = Config::parse(&body)?;

    stack.push(canonical);
    for source in sources {
        internal::debug("CONFIG", &format!("Processing source: {source}"));
        let mut include = expand(&source);
        if include.is_relative()
            && let Some(dir) = path.parent()
        {
            include = dir.join(include);
        }

        if include.exists() {
            let included = load_file(&include, stack)?;
            config = config.with_fallback(&included);
        } else {
            internal::warn("CONFIG", &format!("Source file not found: {source}"));
        }
    }
    stack.pop();

    Ok(config)
}

/// Splits `source = "..."` directives from the TOML body. Only lines before the first
/// table header count, so a `source` option inside a section is left alone.
fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();
    let mut at_root = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            at_root = false;
        }

        if at_root
            && let Some((key, value)) = trimmed.split_once('=')
            && key.trim() == "source"
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
            continue;
        }

        remaining.push_str(line);
        remaining.push('\n');
    }

    (sources, remaining)
}
