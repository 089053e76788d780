//! Protodeck Health - platform diagnostics
//!
//! An ordered suite of health checks over the project store and the rendered
//! document manifest:
//! - data-shape, citation, template, and URL validation
//! - a storage-availability probe
//! - design-system, accessibility, and performance lints
//! - deterministic issue ids, per-issue and fix-all repairs, a 0-100 score
//!
//! Checks are read-only; repairs are the only thing that mutates the store.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod fix;
pub mod issue;
pub mod manifest;
pub mod scanner;

pub use fix::{reassign_duplicate_ids, FixAction};
pub use issue::{Category, HealthReport, Issue, Severity};
pub use manifest::{DocumentManifest, ImageInfo, NodeManifest};
pub use scanner::{
    Scanner, FORBIDDEN_FONT_CLASSES, INLINE_STYLE_THRESHOLD, LARGE_DOM_THRESHOLD,
};
