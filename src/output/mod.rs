//! Output sinks. A logger writes each formatted entry to exactly one [`Output`];
//! the registry resolves which one from the `out.name` config key.
//!
//! Built-in sinks do no I/O when constructed. The file sink opens its file on the
//! first write, so an assembled-then-discarded logger leaves no trace behind.

mod file;
mod stream;

pub use file::FileOutput;
pub use stream::StreamOutput;

/// `Send + Sync` bounds let one sink serve every thread holding the logger.
pub trait Output: Send + Sync {
    /// Writes one already-formatted entry.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, buf: &[u8]) -> Result<(), crate::Error>;

    /// Pushes buffered bytes to the sink.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Discards everything. Registered as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl Output for NullOutput {
    fn write(&self, _buf: &[u8]) -> Result<(), crate::Error> {
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
