//! Usage:
//!   logmate <CONFIG> names                          List profile names
//!   logmate <CONFIG> check                          Assemble every profile
//!   logmate <CONFIG> log <NAME> <LEVEL> <MSG>...    Log through a profile
//!   logmate <CONFIG> providers                      List registered providers

use clap::Parser;
use logmate::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
