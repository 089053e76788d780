//! The project creation wizard
//!
//! Seven linear steps accumulate into a [`WizardState`]; `build` assembles a
//! draft [`Project`] ready for `save_project`. Steps only gate forward
//! movement, so going back never loses entered data.

use chrono::Utc;
use protodeck_model::{
    DesignThinkingStage, FidelityTier, FlowDraft, Project, ProjectAuthor, ProjectStatus,
    RequirementsDoc, TaskLink,
};
use protodeck_store::ProjectStore;
use serde::{Deserialize, Serialize};

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    DesignThinking,
    Template,
    Basics,
    Research,
    Documentation,
    Flows,
    Review,
}

impl WizardStep {
    /// All steps in wizard order
    pub const ALL: [WizardStep; 7] = [
        Self::DesignThinking,
        Self::Template,
        Self::Basics,
        Self::Research,
        Self::Documentation,
        Self::Flows,
        Self::Review,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Accumulated wizard input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: WizardStep,
    pub stage: DesignThinkingStage,
    pub fidelity: FidelityTier,
    pub template: Option<String>,
    pub name: String,
    pub description: String,
    pub ticket_url: String,
    pub research: Vec<String>,
    pub documentation_url: String,
    pub research_notes: String,
    pub flows: Vec<FlowDraft>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::DesignThinking,
            stage: DesignThinkingStage::default(),
            fidelity: FidelityTier::Standard,
            template: None,
            name: String::new(),
            description: String::new(),
            ticket_url: String::new(),
            research: Vec::new(),
            documentation_url: String::new(),
            research_notes: String::new(),
            flows: Vec::new(),
        }
    }
}

impl WizardState {
    /// Whether the current step's requirements are met
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Template => self.template.is_some(),
            WizardStep::Basics => {
                !self.name.trim().is_empty() && !self.description.trim().is_empty()
            }
            WizardStep::Research => !self.research.is_empty(),
            _ => true,
        }
    }

    /// Advance one step when allowed; on the last step this is a no-op
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        let next = self.step.index() + 1;
        match WizardStep::ALL.get(next) {
            Some(step) => {
                self.step = *step;
                true
            }
            None => false,
        }
    }

    /// Go back one step; data entered so far is kept
    pub fn back(&mut self) {
        let index = self.step.index();
        if index > 0 {
            self.step = WizardStep::ALL[index - 1];
        }
    }

    /// Assemble the draft project from everything entered
    #[must_use]
    pub fn build(&self) -> Project {
        let now = Utc::now().to_rfc3339();
        let millis = Utc::now().timestamp_millis();

        let flows: Vec<FlowDraft> = self
            .flows
            .iter()
            .map(|draft| {
                let slug: String = draft
                    .name
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-");
                FlowDraft {
                    id: format!("flow-{millis}-{slug}"),
                    created_at: now.clone(),
                    last_updated: now.clone(),
                    ..draft.clone()
                }
            })
            .collect();

        let task_link = (!self.ticket_url.trim().is_empty()).then(|| TaskLink {
            platform: Some("Jira".to_string()),
            url: self.ticket_url.clone(),
        });
        let requirements_doc = (!self.documentation_url.trim().is_empty()).then(|| {
            RequirementsDoc {
                author: ProjectAuthor::placeholder().name,
                url: self.documentation_url.clone(),
            }
        });

        Project {
            id: ProjectStore::generate_project_id(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: Some(ProjectStatus::Draft),
            tags: Some(Vec::new()),
            author: Some(ProjectAuthor::placeholder()),
            created: now.clone(),
            last_updated: now,
            task_link,
            requirements_doc,
            template: self.template.clone(),
            research_citations: Some(self.research.clone()),
            flows: Some(flows),
            ..Project::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_wizard() -> WizardState {
        WizardState {
            template: Some("dashboard".to_string()),
            name: "New Study".to_string(),
            description: "A reorder study".to_string(),
            research: vec!["account-dashboards".to_string()],
            ..WizardState::default()
        }
    }

    #[test]
    fn steps_advance_in_order() {
        let mut wizard = filled_wizard();
        let mut visited = vec![wizard.step];
        while wizard.next() {
            visited.push(wizard.step);
        }
        assert_eq!(visited, WizardStep::ALL.to_vec());
    }

    #[test]
    fn gated_steps_block_until_filled() {
        let mut wizard = WizardState::default();
        assert!(wizard.next()); // design-thinking is always passable
        assert_eq!(wizard.step, WizardStep::Template);
        assert!(!wizard.next());

        wizard.template = Some("cart-checkout".to_string());
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Basics);
        wizard.name = "  ".to_string();
        wizard.description = "desc".to_string();
        assert!(!wizard.next());

        wizard.name = "Named".to_string();
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Research);
        assert!(!wizard.next());
    }

    #[test]
    fn back_keeps_entered_data() {
        let mut wizard = filled_wizard();
        assert!(wizard.next());
        assert!(wizard.next());
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Template);
        assert_eq!(wizard.template.as_deref(), Some("dashboard"));

        // Back from the first step stays put
        let mut first = WizardState::default();
        first.back();
        assert_eq!(first.step, WizardStep::DesignThinking);
    }

    #[test]
    fn build_assembles_a_draft_project() {
        let mut wizard = filled_wizard();
        wizard.ticket_url = "https://example.atlassian.net/browse/X-1".to_string();
        wizard.flows.push(FlowDraft {
            id: "temp".to_string(),
            name: "Quick Reorder".to_string(),
            ..FlowDraft::default()
        });

        let project = wizard.build();
        assert!(project.id.starts_with("project-"));
        assert_eq!(project.status, Some(ProjectStatus::Draft));
        assert_eq!(project.author.as_ref().unwrap().name, "You");
        assert_eq!(project.template.as_deref(), Some("dashboard"));
        assert_eq!(
            project.research_citations,
            Some(vec!["account-dashboards".to_string()])
        );
        assert!(!project.created.is_empty());
        assert_eq!(project.task_link.as_ref().unwrap().platform.as_deref(), Some("Jira"));
        assert!(project.requirements_doc.is_none());

        let flows = project.flows.as_ref().unwrap();
        assert_eq!(flows.len(), 1);
        assert!(flows[0].id.ends_with("quick-reorder"));
        assert!(!flows[0].created_at.is_empty());
    }
}
