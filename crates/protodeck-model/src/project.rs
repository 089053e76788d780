//! Project records and their embedded entities
//!
//! A [`Project`] owns its deliverables, which own their flows; research items
//! live in a per-project library referenced by id from flows. Every field
//! tolerates absence during deserialization: imported payloads are trusted
//! as-is at write time, and the health scanner (not the parser) is what flags
//! missing or dangling pieces afterwards.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    InReview,
    Approved,
    Development,
    Complete,
}

impl ProjectStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::InReview => "In Review",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Development => "Development",
            ProjectStatus::Complete => "Complete",
        }
    }
}

/// Who authored a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProjectAuthor {
    /// Author backfilled by the repair path when one is missing
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "You".to_string(),
            role: Some("Designer".to_string()),
            email: Some("designer@example.com".to_string()),
            avatar: None,
        }
    }
}

/// Link to an external tracking ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub url: String,
}

/// Link to the project's requirements document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsDoc {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
}

/// Where a research item is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageKind {
    Project,
    Deliverable,
    Flow,
}

/// Reference from a research item to the entity it informs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(rename = "type")]
    pub kind: UsageKind,
    pub id: String,
}

/// Origin of a research item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchSource {
    Baymard,
    Custom,
}

/// One entry in a project's research library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchItem {
    pub id: String,
    pub title: String,
    pub source: ResearchSource,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub used_in: Vec<Usage>,
}

/// Visibility settings for a shared flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSettings {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub show_research: bool,
    #[serde(default)]
    pub show_dev_notes: bool,
}

/// An ordered, named walkthrough of screens
///
/// `start_page` is kept as a raw string on purpose: referential integrity with
/// the page set is not enforced at write time, and an invalid value falls
/// through to the default page when the flow starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_design_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub research_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_settings: Option<ShareSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_notes: Option<String>,
}

/// A step in a user-journey deliverable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub research_keys: Vec<String>,
}

/// Kind of deliverable inside a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliverableType {
    Prototype,
    UserJourney,
}

/// Prototype fidelity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FidelityTier {
    Wireframe,
    Standard,
    Polished,
}

/// A named grouping of flows (or journey steps) within a project
///
/// Owned exclusively by its parent project; there is no independent lifecycle
/// and no separate index, so deleting the project drops everything embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeliverableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fidelity_level: Option<FidelityTier>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub referenced_deliverables: Vec<String>,
    #[serde(default)]
    pub flows: Vec<Flow>,
    #[serde(default)]
    pub journey_steps: Vec<JourneyStep>,
}

impl Deliverable {
    /// Look up a flow by id within this deliverable
    #[inline]
    #[must_use]
    pub fn flow(&self, flow_id: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.id == flow_id)
    }
}

/// Flat flow record produced by the creation wizard
///
/// Drafts are promoted into deliverable flows later; until then they carry
/// their own fidelity/device/status attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDraft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fidelity: DraftFidelity,
    #[serde(default)]
    pub device: DraftDevice,
    #[serde(default)]
    pub status: DraftStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_updated: String,
}

/// Draft fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftFidelity {
    Low,
    #[default]
    Mid,
    High,
}

/// Target device for a draft flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftDevice {
    #[default]
    Desktop,
    Mobile,
    Tablet,
    Responsive,
}

/// Draft flow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftStatus {
    #[default]
    Draft,
    Ready,
    Published,
}

/// A saved prototype definition
///
/// Identity is `id`, unique within the store. Uniqueness, timestamp presence,
/// and citation validity are intended invariants, enforced only after the fact
/// by the health scanner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<ProjectAuthor>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_link: Option<TaskLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements_doc: Option<RequirementsDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_citations: Option<Vec<String>>,
    #[serde(default)]
    pub research_library: Vec<ResearchItem>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flows: Option<Vec<FlowDraft>>,
}

impl Project {
    /// Look up a deliverable by id
    #[inline]
    #[must_use]
    pub fn deliverable(&self, id: &str) -> Option<&Deliverable> {
        self.deliverables.iter().find(|d| d.id == id)
    }

    /// First deliverable, if any (the default target for flow lookups)
    #[inline]
    #[must_use]
    pub fn first_deliverable(&self) -> Option<&Deliverable> {
        self.deliverables.first()
    }

    /// Find a flow by id, searching within one deliverable or defaulting to
    /// the first
    #[must_use]
    pub fn find_flow(
        &self,
        flow_id: &str,
        deliverable_id: Option<&str>,
    ) -> Option<(&Deliverable, &Flow)> {
        let deliverable = match deliverable_id {
            Some(id) => self.deliverable(id)?,
            None => self.first_deliverable()?,
        };
        deliverable.flow(flow_id).map(|f| (deliverable, f))
    }

    /// Find a flow by id across every deliverable
    #[must_use]
    pub fn flow_anywhere(&self, flow_id: &str) -> Option<&Flow> {
        self.deliverables.iter().find_map(|d| d.flow(flow_id))
    }

    /// Research items applied to a given flow
    #[must_use]
    pub fn research_for_flow(&self, flow_id: &str) -> Vec<&ResearchItem> {
        self.research_library
            .iter()
            .filter(|item| item.used_in.iter().any(|u| u.id == flow_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_project() -> Project {
        serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Sample",
            "status": "in-review",
            "tags": ["demo"],
            "deliverables": [
                {
                    "id": "d1",
                    "name": "Prototype",
                    "type": "prototype",
                    "flows": [
                        { "id": "f1", "name": "First", "startPage": "dashboard" },
                        { "id": "f2", "name": "Second", "startPage": "cart" }
                    ]
                },
                {
                    "id": "d2",
                    "name": "Journey",
                    "type": "user-journey",
                    "flows": [
                        { "id": "f3", "name": "Third", "startPage": "checkout" }
                    ]
                }
            ],
            "researchLibrary": [
                {
                    "id": "r1",
                    "title": "Cart study",
                    "source": "baymard",
                    "usedIn": [ { "type": "flow", "id": "f2" } ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn minimal_payload_deserializes_with_defaults() {
        let project: Project = serde_json::from_str("{\"name\":\"bare\"}").unwrap();
        assert_eq!(project.id, "");
        assert_eq!(project.name, "bare");
        assert!(project.status.is_none());
        assert!(project.tags.is_none());
        assert!(project.deliverables.is_empty());
    }

    #[test]
    fn find_flow_defaults_to_first_deliverable() {
        let project = sample_project();
        let (d, f) = project.find_flow("f2", None).unwrap();
        assert_eq!(d.id, "d1");
        assert_eq!(f.start_page, "cart");
        // f3 lives in d2, so the default lookup misses it
        assert!(project.find_flow("f3", None).is_none());
        assert!(project.find_flow("f3", Some("d2")).is_some());
    }

    #[test]
    fn flow_anywhere_searches_all_deliverables() {
        let project = sample_project();
        assert_eq!(project.flow_anywhere("f3").unwrap().start_page, "checkout");
        assert!(project.flow_anywhere("missing").is_none());
    }

    #[test]
    fn research_for_flow_filters_by_usage() {
        let project = sample_project();
        assert_eq!(project.research_for_flow("f2").len(), 1);
        assert!(project.research_for_flow("f1").is_empty());
    }

    #[test]
    fn status_round_trips_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InReview).unwrap();
        assert_eq!(json, "\"in-review\"");
    }
}
