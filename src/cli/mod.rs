//! Command-line front-end for inspecting and exercising a logmate configuration file.

mod commands;

pub use commands::{cmd_check, cmd_log, cmd_names, cmd_providers};

use crate::level::Level;
use crate::logger::Logger;
use crate::mate::Mate;
use crate::output::StreamOutput;
use crate::{ConfigOption, internal};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// logmate - inspect and exercise logger profiles.
#[derive(Debug, Parser)]
#[command(name = "logmate", version, about = "Inspect and exercise logger profiles")]
pub struct Cli {
    /// TOML file holding the logger profiles
    pub config: PathBuf,
    /// Print logmate's own diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List configured logger names.
    Names,
    /// Assemble every profile and report failures.
    Check,
    /// Log one message through a profile.
    Log {
        /// Profile name
        name: String,
        /// Log level
        level: Level,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// List registered output, formatter and hook providers.
    Providers,
}

/// Runs a parsed command line.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    if cli.verbose {
        internal::init(
            Logger::builder()
                .level(Level::Debug)
                .output(Arc::new(StreamOutput::stderr()))
                .build(),
        );
    }

    let mate = match Mate::new(&[ConfigOption::file(&cli.config)]) {
        Ok(mate) => mate,
        Err(e) => {
            eprintln!("Error loading {}: {e}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Names => cmd_names(&mate),
        Command::Check => cmd_check(&mate),
        Command::Log {
            name,
            level,
            message,
        } => cmd_log(&mate, &name, level, &message.join(" ")),
        Command::Providers => cmd_providers(&mate),
    }
}
