//! Standard stream sinks. `stdout` is the default output when a profile names none.

use super::Output;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes to the process's stdout or stderr. Each entry is written under the stream
/// lock, so lines from concurrent loggers never interleave mid-entry.
#[derive(Debug, Clone, Copy)]
pub struct StreamOutput {
    stream: Stream,
}

impl StreamOutput {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    /// Provider name this sink is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

impl Default for StreamOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Output for StreamOutput {
    fn write(&self, buf: &[u8]) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(buf)?,
            Stream::Stderr => io::stderr().lock().write_all(buf)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
