//! Built-in default projects
//!
//! The store falls back to this set whenever the persistence slot is empty or
//! unreadable. One reviewed project ships by default: the team-builder
//! dashboard and reorder study, with its research library and the five demo
//! flows the share links point at.

use indexmap::IndexMap;
use protodeck_model::{
    Deliverable, DeliverableType, FidelityTier, Flow, Project, ProjectStatus, RequirementsDoc,
    ResearchItem, ResearchSource, ShareSettings, TaskLink, Usage, UsageKind,
};

/// Id of the built-in demo project
pub const DEMO_PROJECT_ID: &str = "pmor-44";

/// Id of the demo project's prototype deliverable
pub const DEMO_DELIVERABLE_ID: &str = "deliverable-1";

fn research_item(
    id: &str,
    title: &str,
    url: &str,
    summary: &str,
    tags: &[&str],
    flows: &[&str],
) -> ResearchItem {
    ResearchItem {
        id: id.to_string(),
        title: title.to_string(),
        source: ResearchSource::Baymard,
        url: url.to_string(),
        summary: Some(summary.to_string()),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        used_in: flows
            .iter()
            .map(|f| Usage {
                kind: UsageKind::Flow,
                id: (*f).to_string(),
            })
            .collect(),
    }
}

fn shared() -> Option<ShareSettings> {
    Some(ShareSettings {
        enabled: true,
        password: None,
        show_research: true,
        show_dev_notes: true,
    })
}

#[allow(clippy::too_many_lines)]
fn demo_project() -> Project {
    let research_library = vec![
        research_item(
            "baymard-checkout-flow",
            "Checkout Flow & Cart Usability",
            "https://baymard.com/blog/checkout-flow-average-form-fields",
            "69% of users abandon their cart due to complex checkout flows. \
             Reduce form fields, show clear progress indicators, and provide \
             guest checkout. The team-builder cart should minimize steps while \
             showing roster details clearly.",
            &["checkout", "cart", "conversion", "usability"],
            &["flow-a", "flow-c"],
        ),
        research_item(
            "baymard-product-page",
            "Product Page Design & Imagery Best Practices",
            "https://baymard.com/blog/product-page-design",
            "Users need high-quality imagery, clear specifications, and \
             contextual information. Displaying job name, roster details, and \
             design source helps users make confident ordering decisions.",
            &["product-page", "imagery", "details", "information-architecture"],
            &["flow-a"],
        ),
        research_item(
            "baymard-reorder-flow",
            "Reorder & Repeat Purchase Optimization",
            "https://baymard.com/blog/reorder-repeat-purchase",
            "42% of e-commerce users make repeat purchases. One-click actions, \
             clear order history, and preserved configurations significantly \
             improve conversion.",
            &["reorder", "repeat-purchase", "order-history", "efficiency"],
            &["flow-b", "flow-d"],
        ),
        research_item(
            "baymard-bulk-actions",
            "Bulk Selection & Multi-Item Actions",
            "https://baymard.com/blog/bulk-actions-checkboxes",
            "Bulk action patterns must provide clear feedback on selected \
             items, easy select/deselect all, and visible action buttons with \
             confirmation before adding to cart.",
            &["bulk-actions", "selection", "multi-select", "patterns"],
            &["flow-c"],
        ),
        research_item(
            "baymard-order-history",
            "Order History & Account Management UX",
            "https://baymard.com/blog/order-history-reorder",
            "67% of users expect to easily find and reorder from past \
             purchases. Order history should clearly distinguish team orders \
             with roster information and provide direct reorder paths.",
            &["order-history", "account", "reorder", "B2B"],
            &["flow-d"],
        ),
        research_item(
            "baymard-cross-system-navigation",
            "Cross-System Navigation & Wayfinding",
            "https://baymard.com/blog/cross-system-navigation",
            "54% of users abandon tasks when they lose context during system \
             transitions. Breadcrumbs, consistent headers, and explicit edit \
             links maintain user confidence across system boundaries.",
            &["navigation", "cross-system", "wayfinding", "context"],
            &["flow-a", "flow-c"],
        ),
    ];

    let flows = vec![
        Flow {
            id: "flow-a".to_string(),
            name: "New team-builder job from designer to checkout".to_string(),
            description: "Show how a new team-builder job appears, is reviewed, and becomes an order.".to_string(),
            start_page: "easyview-enhanced".to_string(),
            start_design_id: None,
            start_job_id: None,
            icon: Some("Package".to_string()),
            color: None,
            estimated_minutes: Some(5),
            research_keys: vec![
                "baymard-checkout-flow".to_string(),
                "baymard-product-page".to_string(),
            ],
            share_settings: shared(),
            dev_notes: Some(
                "## Flow A: New Team-Builder Job\n\n\
                 - The external editor is the source of truth for roster and design edits\n\
                 - Submitting a session creates individual design records\n\
                 - Each design keeps its parent job id for grouping\n\
                 - The cart renders team-builder line items as a roster matrix"
                    .to_string(),
            ),
        },
        Flow {
            id: "flow-b".to_string(),
            name: "Reorder from dashboard tile".to_string(),
            description: "Show quick repeat ordering from the team-builder art tab.".to_string(),
            start_page: "dashboard".to_string(),
            start_design_id: None,
            start_job_id: None,
            icon: Some("ShoppingCart".to_string()),
            color: None,
            estimated_minutes: Some(3),
            research_keys: vec!["baymard-reorder-flow".to_string()],
            share_settings: shared(),
            dev_notes: Some(
                "## Flow B: Quick Reorder from Dashboard\n\n\
                 - Surface job and roster metadata on individual tiles\n\
                 - Quick reorder duplicates the design and adds it to the cart\n\
                 - Default quantity stays 1 for quick reorders"
                    .to_string(),
            ),
        },
        Flow {
            id: "flow-c".to_string(),
            name: "Reorder from job details".to_string(),
            description: "Show how grouped jobs and rosters support reordering all players or a single row.".to_string(),
            start_page: "dashboard".to_string(),
            start_design_id: None,
            start_job_id: None,
            icon: Some("Users".to_string()),
            color: None,
            estimated_minutes: Some(4),
            research_keys: vec!["baymard-bulk-actions".to_string()],
            share_settings: shared(),
            dev_notes: Some(
                "## Flow C: Reorder from Job Details\n\n\
                 - Job details shows the roster table with every player\n\
                 - Multi-select supports a batch order action\n\
                 - Ordering all players adds the entire roster as one line item"
                    .to_string(),
            ),
        },
        Flow {
            id: "flow-d".to_string(),
            name: "Reorder from order history".to_string(),
            description: "Show how a decorator can quickly repeat a past team order.".to_string(),
            start_page: "order-history".to_string(),
            start_design_id: None,
            start_job_id: None,
            icon: Some("FileCheck".to_string()),
            color: None,
            estimated_minutes: Some(3),
            research_keys: vec!["baymard-order-history".to_string()],
            share_settings: shared(),
            dev_notes: Some(
                "## Flow D: Reorder from Order History\n\n\
                 - Past orders identify team-builder line items clearly\n\
                 - Reorder reconstructs the roster matrix in the cart\n\
                 - Original design specifications are preserved"
                    .to_string(),
            ),
        },
        Flow {
            id: "flow-e".to_string(),
            name: "Editor and dashboard boundaries".to_string(),
            description: "Show how editing stays in the external editor while the dashboard focuses on order flows.".to_string(),
            start_page: "job-details".to_string(),
            start_design_id: None,
            start_job_id: Some("TB001".to_string()),
            icon: Some("Presentation".to_string()),
            color: None,
            estimated_minutes: Some(4),
            research_keys: vec!["baymard-cross-system-navigation".to_string()],
            share_settings: shared(),
            dev_notes: Some(
                "## Flow E: System Boundaries\n\n\
                 - Add/edit player routes to the external editor, never the dashboard\n\
                 - Deep links pass the parent job id and roster id\n\
                 - The editor offers a return path after edits"
                    .to_string(),
            ),
        },
    ];

    Project {
        id: DEMO_PROJECT_ID.to_string(),
        name: "Team Builder Dashboard & Reorder UX".to_string(),
        description: "Updated artwork management experience with job/roster \
                      grouping, enhanced detail views, and streamlined reorder \
                      flows for team-builder designs."
            .to_string(),
        status: Some(ProjectStatus::InReview),
        tags: Some(
            ["Team Builder", "Dashboard", "Reorder"]
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        ),
        author: None,
        created: "2024-12-01".to_string(),
        last_updated: "2024-12-04".to_string(),
        task_link: Some(TaskLink {
            platform: Some("Jira".to_string()),
            url: "https://example.atlassian.net/browse/PMOR-44".to_string(),
        }),
        requirements_doc: Some(RequirementsDoc {
            author: "Rick Smith".to_string(),
            url: "https://notion.so/workspace/PMOR-44".to_string(),
        }),
        template: None,
        research_citations: None,
        research_library,
        deliverables: vec![Deliverable {
            id: DEMO_DELIVERABLE_ID.to_string(),
            name: "Interactive Prototype".to_string(),
            kind: DeliverableType::Prototype,
            fidelity_level: Some(FidelityTier::Standard),
            created: "2024-12-01".to_string(),
            last_updated: "2024-12-04".to_string(),
            description: Some(
                "Fully interactive prototype demonstrating all 5 user flows \
                 for the team-builder dashboard and reorder experience."
                    .to_string(),
            ),
            referenced_deliverables: Vec::new(),
            flows,
            journey_steps: Vec::new(),
        }],
        flows: None,
    }
}

/// The default project map the store falls back to
#[must_use]
pub fn default_projects() -> IndexMap<String, Project> {
    let mut projects = IndexMap::new();
    let demo = demo_project();
    projects.insert(demo.id.clone(), demo);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_project_shape() {
        let projects = default_projects();
        let demo = projects.get(DEMO_PROJECT_ID).unwrap();
        assert_eq!(demo.research_library.len(), 6);
        assert_eq!(demo.deliverables.len(), 1);

        let deliverable = demo.deliverable(DEMO_DELIVERABLE_ID).unwrap();
        let flow_ids: Vec<&str> = deliverable.flows.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(flow_ids, vec!["flow-a", "flow-b", "flow-c", "flow-d", "flow-e"]);
    }

    #[test]
    fn demo_flow_start_pages() {
        let projects = default_projects();
        let demo = projects.get(DEMO_PROJECT_ID).unwrap();
        let pages: Vec<&str> = demo.deliverables[0]
            .flows
            .iter()
            .map(|f| f.start_page.as_str())
            .collect();
        assert_eq!(
            pages,
            vec!["easyview-enhanced", "dashboard", "dashboard", "order-history", "job-details"]
        );
        let flow_e = demo.flow_anywhere("flow-e").unwrap();
        assert_eq!(flow_e.start_job_id.as_deref(), Some("TB001"));
    }

    #[test]
    fn research_usage_links_resolve() {
        let projects = default_projects();
        let demo = projects.get(DEMO_PROJECT_ID).unwrap();
        for item in &demo.research_library {
            for usage in &item.used_in {
                assert!(demo.flow_anywhere(&usage.id).is_some(), "dangling usage {}", usage.id);
            }
        }
        assert_eq!(demo.research_for_flow("flow-a").len(), 3);
    }
}
