//! Protodeck Store - project persistence
//!
//! The keyed project map backing the platform:
//! - [`ProjectStore`] over a pluggable [`StorageBackend`] slot
//! - JSON export/import with a versioned envelope
//! - File download/upload helpers
//! - The built-in default project set
//!
//! Loading is forgiving: a missing or corrupt slot falls back to the defaults
//! so a session always starts with something to show.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod backend;
pub mod error;
pub mod seed;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use seed::{default_projects, DEMO_DELIVERABLE_ID, DEMO_PROJECT_ID};
pub use store::{ExportedBundle, ExportedProject, ProjectStore};
