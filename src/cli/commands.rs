//! One handler per subcommand. Each prints its own results and picks the exit code.

use crate::level::Level;
use crate::mate::Mate;
use std::process::ExitCode;

#[must_use]
pub fn cmd_names(mate: &Mate) -> ExitCode {
    let mut names = mate.logger_names();
    names.sort();
    for name in names {
        println!("{name}");
    }
    ExitCode::SUCCESS
}

/// Fails if any profile fails to assemble.
#[must_use]
pub fn cmd_check(mate: &Mate) -> ExitCode {
    let mut names = mate.logger_names();
    names.sort();

    let mut failed = 0usize;
    for name in &names {
        match mate.try_logger(Some(name)) {
            Ok(_) => println!("{name}: ok"),
            Err(e) => {
                failed += 1;
                println!("{name}: {e}");
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failed} of {} profile(s) failed", names.len());
        ExitCode::FAILURE
    }
}

#[must_use]
pub fn cmd_log(mate: &Mate, name: &str, level: Level, message: &str) -> ExitCode {
    let logger = match mate.try_logger(Some(name)) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logger.log(level, message);
    if let Err(e) = logger.flush() {
        eprintln!("Error flushing output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_providers(mate: &Mate) -> ExitCode {
    let providers = mate.providers();
    println!("outputs:    {}", providers.outputs().names().join(", "));
    println!("formatters: {}", providers.formatters().names().join(", "));
    println!("hooks:      {}", providers.hooks().names().join(", "));
    ExitCode::SUCCESS
}
