//! Auto-fix repairs
//!
//! Each repair re-reads the affected project from the store at application
//! time rather than capturing the copy the scan saw, so a fix applied after
//! later edits never clobbers them with stale data.

use chrono::Utc;
use protodeck_model::{Project, ProjectAuthor, ProjectStatus};
use protodeck_store::ProjectStore;

/// A repair the scanner can apply to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixAction {
    /// Give a project with a blank id a generated one, re-keying it
    AssignGeneratedId { current_id: String },
    /// Backfill the placeholder author
    BackfillAuthor { project_id: String },
    /// Fill absent created/last-updated timestamps with now
    BackfillTimestamps { project_id: String },
    /// Default an absent status to draft
    DefaultStatus { project_id: String },
    /// Materialize the tags array
    EmptyTags { project_id: String },
    /// Materialize the wizard flows array
    EmptyFlows { project_id: String },
    /// Drop research citations that point at no registered topic
    StripInvalidCitations { project_id: String },
    /// Re-key every project so ids are unique
    ReassignDuplicateIds,
}

impl FixAction {
    /// Apply the repair against the current store contents
    pub fn apply(&self, store: &mut ProjectStore) {
        match self {
            Self::AssignGeneratedId { current_id } => {
                let Some(mut project) = store.project(current_id).cloned() else {
                    return;
                };
                store.delete_project(current_id);
                project.id = ProjectStore::generate_project_id();
                store.save_project(project);
            }
            Self::BackfillAuthor { project_id } => {
                Self::update(store, project_id, |p| p.author = Some(ProjectAuthor::placeholder()));
            }
            Self::BackfillTimestamps { project_id } => {
                Self::update(store, project_id, |p| {
                    let now = Utc::now().to_rfc3339();
                    if p.created.is_empty() {
                        p.created = now.clone();
                    }
                    if p.last_updated.is_empty() {
                        p.last_updated = now;
                    }
                });
            }
            Self::DefaultStatus { project_id } => {
                Self::update(store, project_id, |p| p.status = Some(ProjectStatus::Draft));
            }
            Self::EmptyTags { project_id } => {
                Self::update(store, project_id, |p| {
                    if p.tags.is_none() {
                        p.tags = Some(Vec::new());
                    }
                });
            }
            Self::EmptyFlows { project_id } => {
                Self::update(store, project_id, |p| {
                    if p.flows.is_none() {
                        p.flows = Some(Vec::new());
                    }
                });
            }
            Self::StripInvalidCitations { project_id } => {
                Self::update(store, project_id, |p| {
                    if let Some(citations) = p.research_citations.take() {
                        p.research_citations = Some(
                            citations
                                .into_iter()
                                .filter(|c| protodeck_model::research_topic(c).is_some())
                                .collect(),
                        );
                    }
                });
            }
            Self::ReassignDuplicateIds => {
                let projects: Vec<Project> = store.all_projects().values().cloned().collect();
                let repaired = reassign_duplicate_ids(projects);
                let stale: Vec<String> = store.all_projects().keys().cloned().collect();
                for id in stale {
                    store.delete_project(&id);
                }
                for project in repaired {
                    store.save_project(project);
                }
            }
        }
    }

    fn update(store: &mut ProjectStore, project_id: &str, mutate: impl FnOnce(&mut Project)) {
        // Fresh read so the repair composes with edits made since the scan
        let Some(mut project) = store.project(project_id).cloned() else {
            return;
        };
        mutate(&mut project);
        store.save_project(project);
    }
}

/// Give every project with a blank or already-seen id a fresh generated one
///
/// After this, all ids in the returned list are unique and non-empty.
#[must_use]
pub fn reassign_duplicate_ids(projects: Vec<Project>) -> Vec<Project> {
    let millis = Utc::now().timestamp_millis();
    let mut seen = std::collections::HashSet::new();
    projects
        .into_iter()
        .enumerate()
        .map(|(index, mut project)| {
            if project.id.is_empty() || !seen.insert(project.id.clone()) {
                project.id = format!("project-{millis}-{index}");
                seen.insert(project.id.clone());
                tracing::info!(id = %project.id, "re-keyed project with duplicate id");
            }
            project
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use protodeck_store::MemoryBackend;

    fn project(id: &str) -> Project {
        serde_json::from_value(serde_json::json!({ "id": id, "name": id })).unwrap()
    }

    fn store_with(projects: Vec<Project>) -> ProjectStore {
        let mut store = ProjectStore::open(Box::new(MemoryBackend::new()), Default::default());
        for p in projects {
            store.save_project(p);
        }
        store
    }

    #[test]
    fn reassign_makes_ids_unique() {
        let mut dupes = vec![project("a"), project("a"), project(""), project("b")];
        dupes[1].name = "second a".to_string();
        let repaired = reassign_duplicate_ids(dupes);

        let ids: std::collections::HashSet<&str> =
            repaired.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(""));
        // First occurrence keeps its id, later ones are re-keyed
        assert_eq!(repaired[0].id, "a");
        assert_ne!(repaired[1].id, "a");
        assert_eq!(repaired[3].id, "b");
    }

    #[test]
    fn reassign_is_stable_when_ids_are_already_unique() {
        let input = vec![project("a"), project("b")];
        let repaired = reassign_duplicate_ids(input.clone());
        assert_eq!(repaired, input);
    }

    #[test]
    fn backfill_author_reads_the_current_project() {
        let mut store = store_with(vec![project("p1")]);

        // Simulate an edit after the scan captured the project
        let mut renamed = store.project("p1").cloned().unwrap();
        renamed.name = "renamed".to_string();
        store.save_project(renamed);

        FixAction::BackfillAuthor { project_id: "p1".to_string() }.apply(&mut store);
        let fixed = store.project("p1").unwrap();
        assert_eq!(fixed.name, "renamed");
        assert_eq!(fixed.author.as_ref().unwrap().name, "You");
    }

    #[test]
    fn backfill_timestamps_preserves_existing_values() {
        let mut p = project("p1");
        p.created = "2024-01-01".to_string();
        let mut store = store_with(vec![p]);

        FixAction::BackfillTimestamps { project_id: "p1".to_string() }.apply(&mut store);
        let fixed = store.project("p1").unwrap();
        assert_eq!(fixed.created, "2024-01-01");
        assert!(!fixed.last_updated.is_empty());
    }

    #[test]
    fn strip_invalid_citations_keeps_registered_topics() {
        let mut p = project("p1");
        p.research_citations =
            Some(vec!["cart-abandonment".to_string(), "made-up-topic".to_string()]);
        let mut store = store_with(vec![p]);

        FixAction::StripInvalidCitations { project_id: "p1".to_string() }.apply(&mut store);
        assert_eq!(
            store.project("p1").unwrap().research_citations,
            Some(vec!["cart-abandonment".to_string()])
        );
    }

    #[test]
    fn assign_generated_id_rekeys_the_entry() {
        let mut store = store_with(vec![project("")]);
        FixAction::AssignGeneratedId { current_id: String::new() }.apply(&mut store);
        assert!(store.project("").is_none());
        assert_eq!(store.project_count(), 1);
        let (id, _) = store.all_projects().first().unwrap();
        assert!(id.starts_with("project-"));
    }

    #[test]
    fn fix_against_a_deleted_project_is_a_no_op() {
        let mut store = store_with(vec![]);
        FixAction::DefaultStatus { project_id: "gone".to_string() }.apply(&mut store);
        assert_eq!(store.project_count(), 0);
    }
}
