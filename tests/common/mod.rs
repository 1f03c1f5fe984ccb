//! Shared test doubles: an in-memory output and hooks that record what they saw.

#![allow(dead_code)]

use logmate::{Config, Entry, Hook, Level, Output, Providers};
use std::sync::{Arc, Mutex};

/// Collects everything written to it; clones share the buffer.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }
}

impl Output for MemoryOutput {
    fn write(&self, buf: &[u8]) -> Result<(), logmate::Error> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&self) -> Result<(), logmate::Error> {
        Ok(())
    }
}

/// Appends `"<name>:<message>"` to a shared journal whenever it fires.
pub struct RecordingHook {
    name: String,
    levels: Vec<Level>,
    journal: Arc<Mutex<Vec<String>>>,
}

impl Hook for RecordingHook {
    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &Entry) -> Result<(), logmate::Error> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, entry.message));
        Ok(())
    }
}

/// Registers a recording hook under `name`. The hook's `levels` option (if any) narrows
/// which levels it fires for.
pub fn register_recording_hook(
    providers: &mut Providers,
    name: &str,
    journal: &Arc<Mutex<Vec<String>>>,
) {
    let hook_name = name.to_string();
    let journal = Arc::clone(journal);
    providers.register_hook(name, move |options: Option<&Config>| {
        let levels = match options.and_then(|o| o.get_string_list("levels")) {
            Some(names) => names
                .iter()
                .map(|n| n.parse::<Level>())
                .collect::<Result<Vec<_>, _>>()?,
            None => Level::all().to_vec(),
        };
        Ok(RecordingHook {
            name: hook_name.clone(),
            levels,
            journal: Arc::clone(&journal),
        })
    });
}

/// Built-in providers plus a `memory` output writing into `memory`.
pub fn providers_with_memory(memory: &MemoryOutput) -> Providers {
    let mut providers = Providers::builtin();
    let memory = memory.clone();
    providers.register_output("memory", move |_| Ok(memory.clone()));
    providers
}
