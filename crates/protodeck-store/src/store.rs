//! The project store
//!
//! An insertion-ordered map of projects keyed by id, mirrored wholesale into a
//! persistence slot after every mutation. Loading is forgiving by contract: an
//! absent or corrupt slot falls back to the built-in defaults with a warning,
//! and write failures are logged rather than surfaced, so the session always
//! keeps a working in-memory set.

use std::path::{Path, PathBuf};

use chrono::Utc;
use indexmap::IndexMap;
use protodeck_model::{PlatformConfig, Project};
use serde::{Deserialize, Serialize};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::seed;

/// Envelope wrapping a single exported project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedProject {
    pub version: String,
    pub exported_at: String,
    pub project: Project,
}

/// Envelope wrapping a full-store backup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedBundle {
    pub version: String,
    pub exported_at: String,
    pub projects: Vec<Project>,
}

/// Keyed project map over a storage backend
pub struct ProjectStore {
    backend: Box<dyn StorageBackend>,
    projects: IndexMap<String, Project>,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ProjectStore {
    /// Open a store over the given backend, loading the slot immediately
    ///
    /// An empty or unreadable slot falls back to `defaults`.
    pub fn open(backend: Box<dyn StorageBackend>, defaults: IndexMap<String, Project>) -> Self {
        let projects = match Self::load_slot(backend.as_ref()) {
            Some(loaded) => loaded,
            None => defaults,
        };
        Self { backend, projects }
    }

    /// Open a store seeded with the built-in default projects
    pub fn open_with_defaults(backend: Box<dyn StorageBackend>) -> Self {
        Self::open(backend, seed::default_projects())
    }

    fn load_slot(backend: &dyn StorageBackend) -> Option<IndexMap<String, Project>> {
        let raw = match backend.read_slot() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read storage slot, using defaults");
                return None;
            }
        };
        match serde_json::from_str::<ExportedBundle>(&raw) {
            Ok(bundle) => {
                let mut projects = IndexMap::new();
                for project in bundle.projects {
                    if projects.contains_key(&project.id) {
                        tracing::warn!(id = %project.id, "duplicate project id in slot, keeping last");
                    }
                    projects.insert(project.id.clone(), project);
                }
                tracing::debug!(count = projects.len(), "projects loaded from slot");
                Some(projects)
            }
            Err(err) => {
                tracing::warn!(error = %err, "corrupt storage slot, using defaults");
                None
            }
        }
    }

    fn persist(&mut self) {
        let payload = match self.export_all() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize projects");
                return;
            }
        };
        if let Err(err) = self.backend.write_slot(&payload) {
            tracing::error!(error = %err, "failed to write storage slot");
        }
    }

    /// Every project, in insertion order
    #[inline]
    #[must_use]
    pub fn all_projects(&self) -> &IndexMap<String, Project> {
        &self.projects
    }

    /// Look up a project by id
    #[inline]
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Insert or replace a project, keyed by its own id, and persist
    pub fn save_project(&mut self, project: Project) {
        self.projects.insert(project.id.clone(), project);
        self.persist();
    }

    /// Remove a project and persist; removing an unknown id is a no-op write
    pub fn delete_project(&mut self, id: &str) {
        self.projects.shift_remove(id);
        self.persist();
    }

    /// Number of stored projects
    #[inline]
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Check that the persistence slot is reachable
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the slot is unavailable.
    pub fn probe_backend(&self) -> Result<(), StoreError> {
        self.backend.probe()
    }

    /// Serialize one project into the export envelope
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFile`] when serialization fails.
    pub fn export_project(project: &Project) -> Result<String, StoreError> {
        let envelope = ExportedProject {
            version: PlatformConfig::export_version().to_string(),
            exported_at: Utc::now().to_rfc3339(),
            project: project.clone(),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Serialize the whole store into the backup envelope
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFile`] when serialization fails.
    pub fn export_all(&self) -> Result<String, StoreError> {
        let envelope = ExportedBundle {
            version: PlatformConfig::export_version().to_string(),
            exported_at: Utc::now().to_rfc3339(),
            projects: self.projects.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Parse an export envelope and hand back its payload
    ///
    /// The payload is returned as parsed, without validation; the health
    /// scanner is responsible for flagging shape problems after a save. A
    /// version mismatch only warns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFile`] when the envelope does not parse.
    pub fn import_project(json: &str) -> Result<Project, StoreError> {
        let envelope: ExportedProject = serde_json::from_str(json)?;
        if envelope.version != PlatformConfig::export_version() {
            tracing::warn!(
                found = %envelope.version,
                expected = %PlatformConfig::export_version(),
                "export version mismatch"
            );
        }
        Ok(envelope.project)
    }

    /// Write one project's export envelope to a file in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn download_project(
        project: &Project,
        dir: &Path,
        filename: Option<&str>,
    ) -> Result<PathBuf, StoreError> {
        let name = match filename {
            Some(name) => name.to_string(),
            None => format!("{}-export.json", project.id),
        };
        let path = dir.join(name);
        std::fs::write(&path, Self::export_project(project)?)?;
        tracing::info!(path = %path.display(), "project exported");
        Ok(path)
    }

    /// Write the full-store backup to a timestamped file in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn download_all(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        let path = dir.join(format!("platform-backup-{}.json", Utc::now().timestamp_millis()));
        std::fs::write(&path, self.export_all()?)?;
        tracing::info!(path = %path.display(), "backup exported");
        Ok(path)
    }

    /// Read a project file from disk and import it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileRead`] when the file cannot be read and
    /// [`StoreError::InvalidFile`] when it does not parse.
    pub fn upload_project_file(path: &Path) -> Result<Project, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::import_project(&json)
    }

    /// Generate a fresh project id in the `project-{millis}-{suffix}` shape
    #[must_use]
    pub fn generate_project_id() -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("project-{}-{}", Utc::now().timestamp_millis(), &suffix[..9])
    }
}
