//! Non-volatile storage for the three persisted mode selectors (base
//! layout, kana layout, OS mode).

use anyhow::Context;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// One persisted selector byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Base = 0,
    Kana = 1,
    Os = 2,
}

pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Byte-granular persistent store. Writes are synchronous; a write
/// interrupted by power loss corrupts at most the one byte being written.
pub trait Storage: Send {
    fn read(&mut self, slot: Slot) -> Result<u8, StorageError>;
    fn write(&mut self, slot: Slot, value: u8) -> Result<(), StorageError>;
}

/// Writes a selector byte, optionally skipping the write when the stored
/// value already matches. Failures are logged and swallowed; the engine
/// keeps running on its in-memory state.
pub fn persist(storage: &mut dyn Storage, slot: Slot, value: u8, dedup: bool) {
    if dedup {
        if let Ok(previous) = storage.read(slot) {
            if previous == value {
                return;
            }
        }
    }
    if let Err(err) = storage.write(slot, value) {
        warn!(?slot, %err, "failed to persist mode selector");
    }
}

/// Volatile stand-in used by tests and by the default engine instance.
#[derive(Debug, Default)]
pub struct MemStore {
    bytes: [u8; SLOT_COUNT],
}

impl MemStore {
    pub fn with_bytes(bytes: [u8; SLOT_COUNT]) -> Self {
        Self { bytes }
    }
}

impl Storage for MemStore {
    fn read(&mut self, slot: Slot) -> Result<u8, StorageError> {
        Ok(self.bytes[slot as usize])
    }

    fn write(&mut self, slot: Slot, value: u8) -> Result<(), StorageError> {
        self.bytes[slot as usize] = value;
        Ok(())
    }
}

/// File-backed store holding the three selector bytes. Reads are served
/// from a cached copy; every write rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    bytes: [u8; SLOT_COUNT],
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut bytes = [0u8; SLOT_COUNT];
        if path.exists() {
            let raw = std::fs::read(&path)
                .with_context(|| format!("reading mode store {}", path.display()))?;
            for (slot, value) in bytes.iter_mut().zip(raw.iter()) {
                *slot = *value;
            }
        }
        Ok(Self { path, bytes })
    }
}

impl Storage for FileStore {
    fn read(&mut self, slot: Slot) -> Result<u8, StorageError> {
        Ok(self.bytes[slot as usize])
    }

    fn write(&mut self, slot: Slot, value: u8) -> Result<(), StorageError> {
        self.bytes[slot as usize] = value;
        std::fs::write(&self.path, self.bytes)?;
        Ok(())
    }
}
