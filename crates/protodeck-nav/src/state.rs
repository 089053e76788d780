//! Application state and the navigation reducer
//!
//! All session state lives in one [`AppState`] value; every transition is a
//! pure function of the previous state, an [`Event`], and the current store.
//! Selections are sticky: navigating without a design or job id keeps the
//! previous selection so detail pages stay populated across hops.

use protodeck_model::PageId;
use protodeck_store::{ProjectStore, DEMO_DELIVERABLE_ID, DEMO_PROJECT_ID};
use serde::{Deserialize, Serialize};

use crate::cart::{CartItem, CartState};

/// Where an external-editor stub should return to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnContext {
    #[default]
    Dashboard,
    DesignDetails,
    JobDetails,
}

/// Full navigation and session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_page: PageId,
    pub current_project: Option<String>,
    pub current_deliverable: Option<String>,
    pub current_flow: Option<String>,
    pub selected_design_id: Option<String>,
    pub selected_job_id: Option<String>,
    pub return_context: ReturnContext,
    pub show_research_panel: bool,
    pub share_mode: bool,
    pub loading_share: bool,
    pub cart: CartState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: PageId::PlatformHome,
            current_project: None,
            current_deliverable: None,
            current_flow: None,
            selected_design_id: None,
            selected_job_id: None,
            return_context: ReturnContext::default(),
            show_research_panel: true,
            share_mode: false,
            loading_share: false,
            cart: CartState::default(),
        }
    }
}

/// A navigation or session event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Go to a page, optionally updating selections and the active flow
    NavigateTo {
        page: PageId,
        design_id: Option<String>,
        job_id: Option<String>,
        flow: Option<String>,
    },
    /// Open a project's admin view
    SelectProject { project_id: String },
    /// Start a flow at its recorded start page
    ViewFlow {
        flow_id: String,
        deliverable_id: Option<String>,
    },
    /// Enter the demo project and start one of its flows
    StartDemoFlow { flow_id: String },
    /// Leave the project context entirely
    BackToPlatform,
    /// Leave the running flow, back to the project admin view
    BackToProjectAdmin,
    /// Add an item and jump to the cart
    AddToCart { item: CartItem },
}

impl Event {
    /// Plain page change with no selection updates
    #[must_use]
    pub fn goto(page: PageId) -> Self {
        Self::NavigateTo { page, design_id: None, job_id: None, flow: None }
    }
}

/// Apply one event to the state
#[must_use]
pub fn reduce(state: AppState, event: Event, store: &ProjectStore) -> AppState {
    match event {
        Event::NavigateTo { page, design_id, job_id, flow } => {
            navigate_to(state, page, design_id, job_id, flow)
        }
        Event::SelectProject { project_id } => AppState {
            current_project: Some(project_id),
            current_page: PageId::ProjectAdmin,
            ..state
        },
        Event::ViewFlow { flow_id, deliverable_id } => {
            view_flow(state, store, &flow_id, deliverable_id.as_deref())
        }
        Event::StartDemoFlow { flow_id } => {
            let state = AppState {
                current_project: Some(DEMO_PROJECT_ID.to_string()),
                share_mode: true,
                ..state
            };
            view_flow(state, store, &flow_id, Some(DEMO_DELIVERABLE_ID))
        }
        Event::BackToPlatform => AppState {
            current_project: None,
            current_page: PageId::PlatformHome,
            ..state
        },
        Event::BackToProjectAdmin => AppState {
            current_page: PageId::ProjectAdmin,
            current_flow: None,
            ..state
        },
        Event::AddToCart { item } => {
            let mut state = state;
            state.cart.add_item(item);
            navigate_to(state, PageId::Cart, None, None, None)
        }
    }
}

fn navigate_to(
    state: AppState,
    page: PageId,
    design_id: Option<String>,
    job_id: Option<String>,
    flow: Option<String>,
) -> AppState {
    // The editor stubs need to know which detail page launched them
    let return_context = if page.is_external_editor() {
        match state.current_page {
            PageId::DesignDetails => ReturnContext::DesignDetails,
            PageId::JobDetails => ReturnContext::JobDetails,
            _ => ReturnContext::Dashboard,
        }
    } else {
        state.return_context
    };

    AppState {
        current_page: page,
        selected_design_id: design_id.or(state.selected_design_id),
        selected_job_id: job_id.or(state.selected_job_id),
        current_flow: flow.or(state.current_flow),
        return_context,
        ..state
    }
}

fn view_flow(
    state: AppState,
    store: &ProjectStore,
    flow_id: &str,
    deliverable_id: Option<&str>,
) -> AppState {
    let project_id = state.current_project.as_deref().unwrap_or(DEMO_PROJECT_ID);

    let found = store
        .project(project_id)
        .and_then(|p| p.find_flow(flow_id, deliverable_id))
        .map(|(deliverable, flow)| {
            (
                deliverable.id.clone(),
                flow.start_page.parse::<PageId>(),
                flow.start_design_id.clone(),
                flow.start_job_id.clone(),
            )
        });

    match found {
        Some((deliverable, start_page, design_id, job_id)) => AppState {
            current_deliverable: Some(deliverable),
            current_flow: Some(flow_id.to_string()),
            // An unknown start page falls through to the prototype home
            current_page: start_page.unwrap_or(PageId::PrototypeHome),
            selected_design_id: design_id.or(state.selected_design_id),
            selected_job_id: job_id.or(state.selected_job_id),
            ..state
        },
        None => {
            tracing::warn!(flow_id, project_id, "flow not found, falling back to prototype home");
            AppState {
                current_flow: Some(flow_id.to_string()),
                current_page: PageId::PrototypeHome,
                ..state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use protodeck_store::MemoryBackend;

    use super::*;

    fn demo_store() -> ProjectStore {
        ProjectStore::open_with_defaults(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn selections_are_sticky_across_navigation() {
        let store = demo_store();
        let state = reduce(
            AppState::default(),
            Event::NavigateTo {
                page: PageId::DesignDetails,
                design_id: Some("D001".to_string()),
                job_id: None,
                flow: None,
            },
            &store,
        );
        assert_eq!(state.selected_design_id.as_deref(), Some("D001"));

        let state = reduce(state, Event::goto(PageId::Dashboard), &store);
        assert_eq!(state.selected_design_id.as_deref(), Some("D001"));
    }

    #[test]
    fn editor_stubs_record_their_return_context() {
        let store = demo_store();
        let state = reduce(AppState::default(), Event::goto(PageId::JobDetails), &store);
        let state = reduce(state, Event::goto(PageId::EasyviewRoster), &store);
        assert_eq!(state.return_context, ReturnContext::JobDetails);

        // From anywhere else the context falls back to the dashboard
        let state = reduce(state, Event::goto(PageId::Dashboard), &store);
        let state = reduce(state, Event::goto(PageId::EasyviewEnhanced), &store);
        assert_eq!(state.return_context, ReturnContext::Dashboard);

        // Non-editor pages never touch the context
        let state = reduce(state, Event::goto(PageId::Checkout), &store);
        assert_eq!(state.return_context, ReturnContext::Dashboard);
    }

    #[test]
    fn view_flow_seeds_page_and_selection() {
        let store = demo_store();
        let state = AppState {
            current_project: Some("pmor-44".to_string()),
            ..AppState::default()
        };
        let state = reduce(
            state,
            Event::ViewFlow { flow_id: "flow-e".to_string(), deliverable_id: None },
            &store,
        );
        assert_eq!(state.current_page, PageId::JobDetails);
        assert_eq!(state.current_deliverable.as_deref(), Some("deliverable-1"));
        assert_eq!(state.current_flow.as_deref(), Some("flow-e"));
        assert_eq!(state.selected_job_id.as_deref(), Some("TB001"));
    }

    #[test]
    fn view_flow_without_project_uses_the_demo_project() {
        let store = demo_store();
        let state = reduce(
            AppState::default(),
            Event::ViewFlow { flow_id: "flow-a".to_string(), deliverable_id: None },
            &store,
        );
        assert_eq!(state.current_page, PageId::EasyviewEnhanced);
    }

    #[test]
    fn unknown_flow_falls_back_but_records_the_id() {
        let store = demo_store();
        let state = reduce(
            AppState::default(),
            Event::ViewFlow { flow_id: "flow-z".to_string(), deliverable_id: None },
            &store,
        );
        assert_eq!(state.current_page, PageId::PrototypeHome);
        assert_eq!(state.current_flow.as_deref(), Some("flow-z"));
        assert!(state.current_deliverable.is_none());
    }

    #[test]
    fn start_demo_flow_enters_share_mode() {
        let store = demo_store();
        let state = reduce(
            AppState::default(),
            Event::StartDemoFlow { flow_id: "flow-b".to_string() },
            &store,
        );
        assert!(state.share_mode);
        assert_eq!(state.current_project.as_deref(), Some("pmor-44"));
        assert_eq!(state.current_page, PageId::Dashboard);
    }

    #[test]
    fn back_events_reset_the_right_pieces() {
        let store = demo_store();
        let state = AppState {
            current_project: Some("pmor-44".to_string()),
            current_flow: Some("flow-a".to_string()),
            current_page: PageId::Cart,
            ..AppState::default()
        };

        let admin = reduce(state.clone(), Event::BackToProjectAdmin, &store);
        assert_eq!(admin.current_page, PageId::ProjectAdmin);
        assert!(admin.current_flow.is_none());
        assert_eq!(admin.current_project.as_deref(), Some("pmor-44"));

        let platform = reduce(state, Event::BackToPlatform, &store);
        assert_eq!(platform.current_page, PageId::PlatformHome);
        assert!(platform.current_project.is_none());
    }

    #[test]
    fn add_to_cart_jumps_to_the_cart_page() {
        let store = demo_store();
        let item = CartItem {
            item_id: "item-1".to_string(),
            job_name: "Eagles - 2026".to_string(),
            tb_parent_id: Some("TB001".to_string()),
            roster_name: None,
            service_type: "DTF".to_string(),
            players: vec![],
        };
        let state = reduce(AppState::default(), Event::AddToCart { item }, &store);
        assert_eq!(state.current_page, PageId::Cart);
        assert_eq!(state.cart.items.len(), 1);
    }
}
