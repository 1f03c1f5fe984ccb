//! `logmate` - declarative logger assembly.
//!
//! Logger profiles are described in TOML instead of setup code. A [`Mate`] reads
//! the profiles, resolves each one's output, formatter and hooks by name through a
//! [`Providers`] table, and caches one logger per profile name.
//!
//! # Example
//!
//! ```
//! use logmate::{ConfigOption, Level, Mate};
//!
//! let mate = Mate::new(&[ConfigOption::toml(
//!     r#"
//!     [default]
//!     level = "debug"
//!     out = { name = "null" }
//!
//!     [audit]
//!     level = "warn"
//!     formatter = { name = "json" }
//!     out = { name = "null" }
//!     "#,
//! )])?;
//!
//! let logger = mate.logger(None).expect("default profile");
//! assert_eq!(logger.level(), Level::Debug);
//! logger.info("Application started");
//!
//! let audit = mate.logger(Some("audit")).expect("audit profile");
//! assert!(std::sync::Arc::ptr_eq(&audit, &mate.logger(Some("audit")).unwrap()));
//! # Ok::<(), logmate::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `logmate` binary for inspecting configuration files

pub mod config;
pub mod entry;
mod error;
pub mod fmt;
pub mod hook;
pub mod internal;
pub mod level;
pub mod logger;
pub mod mate;
pub mod output;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, ConfigOption};
pub use entry::Entry;
pub use error::Error;
pub use fmt::{Formatter, JsonFormatter, TextFormatter};
pub use hook::{FileHook, Hook};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder, LoggerState, assemble, hijack, new_logger};
pub use mate::{DEFAULT_LOGGER, Mate};
pub use output::{FileOutput, NullOutput, Output, StreamOutput};
pub use registry::{BoxError, ProviderKind, Providers, Registry};
