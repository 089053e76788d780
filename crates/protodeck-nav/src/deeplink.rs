//! Share-link parsing and resolution
//!
//! Two link shapes exist: `#/demo` opens the demo landing page, and
//! `#/share/{project}/{deliverable}/{flow}` drops straight into a running
//! flow. A `research=false` query hides the research panel for reviewers who
//! only want the screens.

use once_cell::sync::Lazy;
use protodeck_model::PageId;
use protodeck_store::{ProjectStore, DEMO_PROJECT_ID};
use regex::Regex;

use crate::state::AppState;

static SHARE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#/share/([^/]+)/([^/]+)/([^/?]+)")
        .unwrap_or_else(|_| unreachable!("static pattern"))
});

/// A parsed deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// `#/demo`
    Demo,
    /// `#/share/{project}/{deliverable}/{flow}`
    Share {
        project_id: String,
        deliverable_id: String,
        flow_id: String,
        show_research: bool,
    },
}

/// Parse a location hash and query string into a deep link
///
/// Returns `None` for an empty or unrecognized hash.
#[must_use]
pub fn parse_deep_link(hash: &str, query: &str) -> Option<DeepLink> {
    if hash.is_empty() {
        return None;
    }
    if hash == "#/demo" {
        return Some(DeepLink::Demo);
    }
    let captures = SHARE_PATTERN.captures(hash)?;
    let show_research = !query
        .split('&')
        .any(|pair| pair == "research=false");
    Some(DeepLink::Share {
        project_id: captures[1].to_string(),
        deliverable_id: captures[2].to_string(),
        flow_id: captures[3].to_string(),
        show_research,
    })
}

/// Apply a deep link to the state in one shot
#[must_use]
pub fn resolve(state: AppState, link: &DeepLink, store: &ProjectStore) -> AppState {
    match link {
        DeepLink::Demo => AppState {
            current_page: PageId::DemoLanding,
            current_project: Some(DEMO_PROJECT_ID.to_string()),
            share_mode: true,
            ..state
        },
        DeepLink::Share { project_id, deliverable_id, flow_id, show_research } => {
            let found = store
                .project(project_id)
                .and_then(|p| p.find_flow(flow_id, Some(deliverable_id)))
                .map(|(_, flow)| {
                    (
                        flow.start_page.parse::<PageId>(),
                        flow.start_design_id.clone(),
                        flow.start_job_id.clone(),
                    )
                });

            match found {
                Some((start_page, design_id, job_id)) => AppState {
                    current_project: Some(project_id.clone()),
                    current_deliverable: Some(deliverable_id.clone()),
                    current_flow: Some(flow_id.clone()),
                    current_page: start_page.unwrap_or(PageId::PrototypeHome),
                    selected_design_id: design_id.or(state.selected_design_id),
                    selected_job_id: job_id.or(state.selected_job_id),
                    show_research_panel: *show_research,
                    share_mode: true,
                    loading_share: false,
                    ..state
                },
                None => {
                    tracing::error!(project_id, flow_id, "share link did not resolve");
                    AppState {
                        show_research_panel: *show_research,
                        loading_share: false,
                        ..state
                    }
                }
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
    fn demo_hash_parses() {
        assert_eq!(parse_deep_link("#/demo", ""), Some(DeepLink::Demo));
        assert_eq!(parse_deep_link("", ""), None);
        assert_eq!(parse_deep_link("#/other", ""), None);
    }

    #[test]
    fn share_hash_parses_with_query() {
        let link = parse_deep_link("#/share/pmor-44/deliverable-1/flow-a", "research=false");
        assert_eq!(
            link,
            Some(DeepLink::Share {
                project_id: "pmor-44".to_string(),
                deliverable_id: "deliverable-1".to_string(),
                flow_id: "flow-a".to_string(),
                show_research: false,
            })
        );

        // Trailing segments after the flow id are ignored
        let link = parse_deep_link("#/share/p/d/f?x=1", "");
        assert!(matches!(link, Some(DeepLink::Share { flow_id, .. }) if flow_id == "f"));
    }

    #[test]
    fn demo_link_lands_on_the_landing_page() {
        let store = demo_store();
        let state = resolve(AppState::default(), &DeepLink::Demo, &store);
        assert_eq!(state.current_page, PageId::DemoLanding);
        assert_eq!(state.current_project.as_deref(), Some("pmor-44"));
        assert!(state.share_mode);
    }

    #[test]
    fn share_link_scenario_resolves_to_the_flow_start() {
        let store = demo_store();
        let link = parse_deep_link("#/share/pmor-44/deliverable-1/flow-a", "").unwrap();
        let state = resolve(AppState::default(), &link, &store);

        assert_eq!(state.current_page, PageId::EasyviewEnhanced);
        assert_eq!(state.current_project.as_deref(), Some("pmor-44"));
        assert_eq!(state.current_deliverable.as_deref(), Some("deliverable-1"));
        assert_eq!(state.current_flow.as_deref(), Some("flow-a"));
        assert!(state.share_mode);
        assert!(state.show_research_panel);
        assert!(!state.loading_share);
    }

    #[test]
    fn research_flag_hides_the_panel() {
        let store = demo_store();
        let link = parse_deep_link("#/share/pmor-44/deliverable-1/flow-b", "research=false").unwrap();
        let state = resolve(AppState::default(), &link, &store);
        assert!(!state.show_research_panel);
        assert_eq!(state.current_page, PageId::Dashboard);
    }

    #[test]
    fn unresolvable_share_link_only_clears_loading() {
        let store = demo_store();
        let link = parse_deep_link("#/share/no-such/deliverable-1/flow-a", "").unwrap();
        let before = AppState { loading_share: true, ..AppState::default() };
        let state = resolve(before, &link, &store);

        assert!(!state.loading_share);
        assert!(!state.share_mode);
        assert_eq!(state.current_page, PageId::PlatformHome);
        assert!(state.current_project.is_none());
    }
}
