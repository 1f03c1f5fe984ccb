//! Append-only file sink.

use super::Output;
use crate::config::Config;
use crate::internal;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Appends entries to one file. The file is opened on the first write and kept open.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl FileOutput {
    /// `~` in the path is expanded here; nothing touches the filesystem yet.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&raw);
        Self {
            path: PathBuf::from(expanded.as_ref()),
            file: Mutex::new(None),
        }
    }

    /// Reads `path` from the provider options, falling back to [`Self::default_path`].
    #[must_use]
    pub fn from_config(options: Option<&Config>) -> Self {
        match options.map(|o| o.get_string("path", "")) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// XDG state directory when the platform has one, `logmate.log` in the working directory otherwise.
    #[must_use]
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "logmate").map_or_else(
            || PathBuf::from("logmate.log"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logmate.log")
            },
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File, crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }
        Ok(OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?)
    }
}

impl Output for FileOutput {
    fn write(&self, buf: &[u8]) -> Result<(), crate::Error> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some(self.open()?);
        }
        if let Some(file) = guard.as_mut() {
            file.write_all(buf)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = guard.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
