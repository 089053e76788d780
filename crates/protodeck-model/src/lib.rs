//! Protodeck Model - shared domain types
//!
//! The entity layer shared by every Protodeck crate:
//! - Project records with deliverables, flows, and research citations
//! - The closed set of prototype page identifiers
//! - Static registries of research topics and prototype templates
//! - Platform configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use protodeck_model::{PageId, Project};
//!
//! let project: Project = serde_json::from_str(raw)?;
//! if let Some((deliverable, flow)) = project.find_flow("flow-a", None) {
//!     println!("{} starts at {}", flow.name, flow.start_page);
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod page;
pub mod project;
pub mod registry;

// Re-exports for convenience
pub use config::PlatformConfig;
pub use page::{PageId, PageIdError};
pub use project::{
    Deliverable, DeliverableType, FidelityTier, Flow, FlowDraft, JourneyStep, Project,
    ProjectAuthor, ProjectStatus, RequirementsDoc, ResearchItem, ResearchSource, ShareSettings,
    TaskLink, Usage, UsageKind,
};
pub use registry::{
    prototype_template, research_topic, DesignThinkingStage, FidelityInfo, PrototypeTemplate,
    ResearchTopic, StageInfo, TopicCategory, DESIGN_THINKING_STAGES, FIDELITY_LEVELS,
    PROTOTYPE_TEMPLATES, RESEARCH_TOPICS,
};
