//! Static flow step tables
//!
//! Each demo flow has a fixed, ordered list of steps used by the prototype
//! navigation bar: where the walkthrough currently is, what the page shows,
//! and the hint for getting to the next step. Pages outside a flow's table
//! simply have no highlighted step and no hint.

use protodeck_model::PageId;

/// One step of a flow walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub page: PageId,
    pub label: &'static str,
    pub description: &'static str,
    pub next_action: Option<&'static str>,
}

const FLOW_A: &[FlowStep] = &[
    FlowStep {
        page: PageId::EasyviewEnhanced,
        label: "Create Session",
        description: "External editor - create a team-builder session",
        next_action: Some("Switch to the review tab, then submit the session"),
    },
    FlowStep {
        page: PageId::Dashboard,
        label: "View Designs",
        description: "Dashboard - view team-builder designs",
        next_action: Some("Click any design tile from the new job"),
    },
    FlowStep {
        page: PageId::DesignDetails,
        label: "Design Details",
        description: "Review an individual design",
        next_action: Some("Click \"Order Now\" to add it to the cart"),
    },
    FlowStep {
        page: PageId::Cart,
        label: "Review Cart",
        description: "Cart - team-builder line item",
        next_action: Some("Review the roster details, then click \"Checkout\""),
    },
    FlowStep {
        page: PageId::Checkout,
        label: "Checkout",
        description: "Complete the order",
        next_action: Some("Flow complete! Return to start or explore other flows"),
    },
];

const FLOW_B: &[FlowStep] = &[
    FlowStep {
        page: PageId::Dashboard,
        label: "Dashboard",
        description: "Individual designs view",
        next_action: Some("Click \"Quick Reorder\" on any design tile"),
    },
    FlowStep {
        page: PageId::Cart,
        label: "Cart",
        description: "Quick reorder",
        next_action: Some("Review the cart, then click \"Checkout\""),
    },
    FlowStep {
        page: PageId::Checkout,
        label: "Checkout",
        description: "Complete the reorder",
        next_action: Some("Flow complete!"),
    },
];

const FLOW_C: &[FlowStep] = &[
    FlowStep {
        page: PageId::Dashboard,
        label: "Dashboard",
        description: "Grouped by job name",
        next_action: Some("Switch the view to job name, then open job details"),
    },
    FlowStep {
        page: PageId::JobDetails,
        label: "Job Details",
        description: "View all players in the roster",
        next_action: Some("Click \"Order All Players\" or select individuals"),
    },
    FlowStep {
        page: PageId::Cart,
        label: "Cart",
        description: "Order players",
        next_action: Some("Review the roster, then click \"Checkout\""),
    },
    FlowStep {
        page: PageId::Checkout,
        label: "Checkout",
        description: "Complete the order",
        next_action: Some("Flow complete!"),
    },
];

const FLOW_D: &[FlowStep] = &[
    FlowStep {
        page: PageId::OrderHistory,
        label: "Order History",
        description: "View past orders",
        next_action: Some("Click \"Reorder\" on any team order"),
    },
    FlowStep {
        page: PageId::Cart,
        label: "Cart",
        description: "Reorder from history",
        next_action: Some("Review the cart, then click \"Checkout\""),
    },
    FlowStep {
        page: PageId::Checkout,
        label: "Checkout",
        description: "Complete the reorder",
        next_action: Some("Flow complete!"),
    },
];

const FLOW_E: &[FlowStep] = &[
    FlowStep {
        page: PageId::JobDetails,
        label: "Job Details",
        description: "View the roster",
        next_action: Some("Click \"Edit Roster\" to manage players"),
    },
    FlowStep {
        page: PageId::EasyviewRoster,
        label: "Edit Roster",
        description: "External editor - roster management",
        next_action: Some("Add or edit players, then return to job details"),
    },
    FlowStep {
        page: PageId::JobDetails,
        label: "Review Changes",
        description: "Job details - updated roster",
        next_action: Some("Click \"Order All Players\" to proceed"),
    },
    FlowStep {
        page: PageId::Cart,
        label: "Cart",
        description: "Order with the updated roster",
        next_action: Some("Review and checkout"),
    },
];

/// Step table for a flow; unknown flows have no steps
#[must_use]
pub fn flow_steps(flow_id: &str) -> &'static [FlowStep] {
    match flow_id {
        "flow-a" => FLOW_A,
        "flow-b" => FLOW_B,
        "flow-c" => FLOW_C,
        "flow-d" => FLOW_D,
        "flow-e" => FLOW_E,
        _ => &[],
    }
}

/// Index of the step matching the current page, by first linear match
#[must_use]
pub fn current_step_index(flow_id: &str, page: PageId) -> Option<usize> {
    flow_steps(flow_id).iter().position(|step| step.page == page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flow_has_steps() {
        for flow in ["flow-a", "flow-b", "flow-c", "flow-d", "flow-e"] {
            assert!(!flow_steps(flow).is_empty(), "{flow} has no steps");
        }
        assert!(flow_steps("flow-z").is_empty());
    }

    #[test]
    fn step_index_tracks_the_current_page() {
        assert_eq!(current_step_index("flow-a", PageId::Cart), Some(3));
        assert_eq!(current_step_index("flow-a", PageId::OrderHistory), None);
        // flow-e revisits job-details; the first occurrence wins
        assert_eq!(current_step_index("flow-e", PageId::JobDetails), Some(0));
    }

    #[test]
    fn flows_end_with_a_completion_hint() {
        for flow in ["flow-a", "flow-b", "flow-c", "flow-d"] {
            let last = flow_steps(flow).last().unwrap();
            assert_eq!(last.page, PageId::Checkout);
            assert!(last.next_action.unwrap().contains("complete"));
        }
    }
}
