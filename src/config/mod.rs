//! Hierarchical configuration tree consumed by the assembler and the Mate.
//!
//! A [`Config`] is a read-only view over one or more TOML tables ("layers"). The first
//! layer is the primary source; later layers are fallbacks consulted only for keys the
//! earlier ones lack. Subtree reads keep the layering, so a fallback can fill a single
//! nested key without replacing the whole section.
//!
//! Key order follows the source documents (`toml` is built with `preserve_order`), which
//! makes hook enumeration order part of the configuration text.

mod option;

pub use option::ConfigOption;

use crate::Error;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use toml::{Table, Value};

/// Layered, immutable view over TOML tables. Cloning only bumps reference counts.
#[derive(Debug, Clone, Default)]
pub struct Config {
    layers: Vec<Arc<Table>>,
}

impl Config {
    /// A tree with no keys at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps an already-parsed table as a single-layer tree.
    #[must_use]
    pub fn from_table(table: Table) -> Self {
        Self {
            layers: vec![Arc::new(table)],
        }
    }

    /// Parses TOML text into a single-layer tree.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] on TOML syntax errors.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let table: Table = toml::from_str(text)?;
        Ok(Self::from_table(table))
    }

    /// Subtree at a dotted path (`"out.options"`), or `None` when no layer holds a table there.
    #[must_use]
    pub fn get_config(&self, path: &str) -> Option<Self> {
        self.subtree(|layer| resolve(layer, path))
    }

    /// Subtree under a single key, taken literally (dots are not path separators here).
    #[must_use]
    pub fn child(&self, key: &str) -> Option<Self> {
        self.subtree(|layer| layer.get(key).map_or(Lookup::Missing, Lookup::Found))
    }

    fn subtree<'a>(&'a self, find: impl Fn(&'a Table) -> Lookup<'a>) -> Option<Self> {
        let mut layers = Vec::new();
        for layer in &self.layers {
            match find(layer) {
                Lookup::Found(Value::Table(table)) => layers.push(Arc::new(table.clone())),
                // A scalar in a higher-priority layer hides tables further down.
                Lookup::Found(_) | Lookup::Shadowed => break,
                Lookup::Missing => {}
            }
        }
        (!layers.is_empty()).then_some(Self { layers })
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        for layer in &self.layers {
            match resolve(layer, path) {
                Lookup::Found(value) => return Some(value),
                Lookup::Shadowed => return None,
                Lookup::Missing => {}
            }
        }
        None
    }

    /// Scalar read with a default. Numbers, booleans and datetimes are rendered as text;
    /// tables and arrays count as absent.
    #[must_use]
    pub fn get_string(&self, path: &str, default: &str) -> String {
        match self.lookup(path) {
            Some(Value::String(s)) => s.clone(),
            Some(
                v @ (Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_)),
            ) => v.to_string(),
            _ => default.to_string(),
        }
    }

    /// Boolean read with a default. Accepts `"true"`/`"false"` strings as well.
    #[must_use]
    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        match self.lookup(path) {
            Some(Value::Boolean(b)) => *b,
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// List read. A bare string counts as a one-element list.
    #[must_use]
    pub fn get_string_list(&self, path: &str) -> Option<Vec<String>> {
        match self.lookup(path)? {
            Value::String(s) => Some(vec![s.clone()]),
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Immediate keys in document order: the primary layer's keys first, then any
    /// keys only the fallbacks define.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for layer in &self.layers {
            for key in layer.keys() {
                if seen.insert(key.as_str()) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }

    /// Layered view where `self` wins and `other` fills gaps. Neither input is modified.
    #[must_use]
    pub fn with_fallback(&self, other: &Self) -> Self {
        let mut layers = Vec::with_capacity(self.layers.len() + other.layers.len());
        layers.extend(self.layers.iter().cloned());
        layers.extend(other.layers.iter().cloned());
        Self { layers }
    }

    /// True when no layer holds any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Outcome of walking a dotted path through one layer.
enum Lookup<'a> {
    Found(&'a Value),
    /// The layer does not mention the path; lower layers may.
    Missing,
    /// A prefix of the path is a scalar here, which hides every lower layer.
    Shadowed,
}

fn resolve<'a>(table: &'a Table, path: &str) -> Lookup<'a> {
    let mut current = table;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let Some(value) = current.get(segment) else {
            return Lookup::Missing;
        };
        if segments.peek().is_none() {
            return Lookup::Found(value);
        }
        match value.as_table() {
            Some(table) => current = table,
            None => return Lookup::Shadowed,
        }
    }
    Lookup::Missing
}
