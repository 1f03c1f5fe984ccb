//! Hooks observe entries at selected levels before they are formatted and written.
//! Each key under a profile's `hooks` table names one hook provider; the key's
//! table is that hook's options.

mod file;

pub use file::FileHook;

use crate::entry::Entry;
use crate::level::Level;

pub trait Hook: Send + Sync {
    /// Levels this hook fires for.
    fn levels(&self) -> &[Level];

    /// Reacts to one entry. Failures are reported but never stop the entry from being logged.
    ///
    /// # Errors
    /// Whatever the hook's side effect can fail with.
    fn fire(&self, entry: &Entry) -> Result<(), crate::Error>;
}
