//! Persistence backends
//!
//! The store keeps everything in memory and mirrors the full project map into
//! a single serialized slot after each mutation. The slot is the only
//! persistence surface; backends differ only in where the slot lives.

use std::path::PathBuf;

use crate::error::StoreError;

/// A single read/write slot holding the serialized project map
pub trait StorageBackend {
    /// Read the slot contents, `None` when the slot has never been written
    ///
    /// # Errors
    ///
    /// Returns an error when the slot exists but cannot be read.
    fn read_slot(&self) -> Result<Option<String>, StoreError>;

    /// Replace the slot contents
    ///
    /// # Errors
    ///
    /// Returns an error when the slot cannot be written.
    fn write_slot(&mut self, payload: &str) -> Result<(), StoreError>;

    /// Check that the slot is reachable without mutating it
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn probe(&self) -> Result<(), StoreError>;
}

/// In-memory slot for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Option<String>,
    unavailable: bool,
}

impl MemoryBackend {
    /// Empty, healthy backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-loaded with slot contents
    #[must_use]
    pub fn with_slot(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
            unavailable: false,
        }
    }

    /// Flip the backend into an unavailable state, for probe tests
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }
}

impl StorageBackend for MemoryBackend {
    fn read_slot(&self) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::BackendUnavailable("memory slot disabled".to_string()));
        }
        Ok(self.slot.clone())
    }

    fn write_slot(&mut self, payload: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::BackendUnavailable("memory slot disabled".to_string()));
        }
        self.slot = Some(payload.to_string());
        Ok(())
    }

    fn probe(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::BackendUnavailable("memory slot disabled".to_string()));
        }
        Ok(())
    }
}

/// One JSON file on disk
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend over the given file path; the file need not exist yet
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the slot file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read_slot(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn write_slot(&mut self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn probe(&self) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| std::path::Path::new("."));
        if dir.as_os_str().is_empty() || dir.exists() {
            Ok(())
        } else {
            Err(StoreError::BackendUnavailable(format!(
                "slot directory {} does not exist",
                dir.display()
            )))
        }
    }
}
