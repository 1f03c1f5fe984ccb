//! Formatters turn an [`Entry`] into the bytes an output writes. `text` is the
//! default; `json` emits one object per line.

mod format;
mod json;
mod text;

pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::entry::Entry;

/// `Send + Sync` so one formatter instance serves every thread holding the logger.
pub trait Formatter: Send + Sync {
    /// Renders one entry, trailing newline included.
    ///
    /// # Errors
    /// Serialization failures.
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, crate::Error>;
}
