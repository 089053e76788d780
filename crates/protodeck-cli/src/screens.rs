//! Text screen renderers
//!
//! Each page renders to plain text plus a [`DocumentManifest`] describing the
//! elements it produced. The manifest is what the health scanner's
//! presentation checks run over, so renderers record their class lists and
//! image metadata alongside the visible text.

use protodeck_catalog::{design_by_id, grouped_jobs, job_by_parent_id, players_for_job, DESIGNS};
use protodeck_health::{DocumentManifest, ImageInfo, NodeManifest};
use protodeck_model::PageId;
use protodeck_nav::AppState;
use protodeck_store::ProjectStore;

/// A rendered screen
#[derive(Debug, Clone)]
pub(crate) struct Screen {
    pub(crate) text: String,
    pub(crate) manifest: DocumentManifest,
}

struct ScreenBuilder {
    text: String,
    manifest: DocumentManifest,
}

impl ScreenBuilder {
    fn new(component: &str) -> Self {
        Self {
            text: String::new(),
            manifest: DocumentManifest {
                nodes: vec![NodeManifest {
                    component: Some(component.to_string()),
                    classes: vec!["flex".to_string(), "flex-col".to_string(), "gap-4".to_string()],
                    ..NodeManifest::default()
                }],
                body_text: String::new(),
            },
        }
    }

    fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        self.text.push_str(line);
        self.text.push('\n');
        if !line.trim().is_empty() {
            if !self.manifest.body_text.is_empty() {
                self.manifest.body_text.push('\n');
            }
            self.manifest.body_text.push_str(line.trim());
        }
    }

    fn node(&mut self, classes: &[&str]) {
        self.manifest.nodes.push(NodeManifest::with_classes(classes.iter().copied()));
    }

    fn image(&mut self, src: &str, alt: &str) {
        self.manifest.nodes.push(NodeManifest {
            classes: vec!["rounded-lg".to_string(), "object-cover".to_string()],
            image: Some(ImageInfo {
                src: src.to_string(),
                alt: Some(alt.to_string()),
            }),
            ..NodeManifest::default()
        });
    }

    fn finish(self) -> Screen {
        Screen {
            text: self.text,
            manifest: self.manifest,
        }
    }
}

/// Render one page against the current session state
#[must_use]
pub(crate) fn render(page: PageId, state: &AppState, store: &ProjectStore) -> Screen {
    match page {
        PageId::PlatformHome => platform_home(store),
        PageId::ProjectAdmin => project_admin(state, store),
        PageId::DemoLanding => demo_landing(store),
        PageId::PrototypeHome => prototype_home(state, store),
        PageId::Dashboard => dashboard(),
        PageId::DesignDetails => design_details(state),
        PageId::JobDetails => job_details(state),
        PageId::Cart => cart(state),
        PageId::Checkout => checkout(state),
        PageId::OrderHistory => order_history(),
        PageId::EasyviewDesigner | PageId::EasyviewEnhanced | PageId::EasyviewRoster => {
            editor_stub(page, state)
        }
    }
}

/// Manifest for the full reachable screen set, for whole-document scans
#[must_use]
pub(crate) fn full_manifest(state: &AppState, store: &ProjectStore) -> DocumentManifest {
    let mut manifest = DocumentManifest::default();
    for page in PageId::ALL {
        manifest.extend(render(page, state, store).manifest);
    }
    manifest
}

fn platform_home(store: &ProjectStore) -> Screen {
    let mut screen = ScreenBuilder::new("PlatformHome");
    screen.line("Prototype Review Platform");
    screen.line(format!("{} project(s)", store.project_count()));
    screen.line("");
    screen.node(&["grid", "grid-cols-2", "gap-4"]);
    for project in store.all_projects().values() {
        let status = project.status.map_or("no status", |status| status.label());
        screen.node(&["bg-card", "border", "rounded-lg", "p-4"]);
        screen.line(format!("  {} [{}] - {}", project.id, status, project.name));
    }
    screen.finish()
}

fn project_admin(state: &AppState, store: &ProjectStore) -> Screen {
    let mut screen = ScreenBuilder::new("ProjectAdmin");
    let Some(project) = state
        .current_project
        .as_deref()
        .and_then(|id| store.project(id))
    else {
        screen.line("Project Admin");
        screen.line("No project selected.");
        return screen.finish();
    };
    screen.line(format!("Project Admin - {}", project.name));
    screen.line(project.description.clone());
    screen.line(format!(
        "{} deliverable(s), {} research item(s)",
        project.deliverables.len(),
        project.research_library.len()
    ));
    for deliverable in &project.deliverables {
        screen.node(&["bg-card", "border", "rounded-lg", "p-4"]);
        screen.line(format!("  {} ({} flows)", deliverable.name, deliverable.flows.len()));
        for flow in &deliverable.flows {
            screen.line(format!("    {} -> starts at {}", flow.name, flow.start_page));
        }
    }
    screen.finish()
}

fn demo_landing(store: &ProjectStore) -> Screen {
    let mut screen = ScreenBuilder::new("DemoLanding");
    screen.line("Guided Demo");
    screen.line("Pick a flow to walk through the ordering prototype.");
    screen.node(&["grid", "grid-cols-2", "gap-4"]);
    let flows = store
        .project(protodeck_store::DEMO_PROJECT_ID)
        .and_then(protodeck_model::Project::first_deliverable)
        .map(|d| d.flows.as_slice())
        .unwrap_or_default();
    for flow in flows {
        screen.node(&["bg-card", "border", "rounded-lg", "p-4", "hover:bg-accent"]);
        screen.line(format!("  {} - {}", flow.name, flow.description));
    }
    screen.finish()
}

fn prototype_home(state: &AppState, store: &ProjectStore) -> Screen {
    let mut screen = ScreenBuilder::new("PrototypeHome");
    let Some(project) = state
        .current_project
        .as_deref()
        .and_then(|id| store.project(id))
    else {
        screen.line("Prototype Home");
        screen.line("No project selected.");
        return screen.finish();
    };
    screen.line(format!("Prototype Home - {}", project.name));
    for deliverable in &project.deliverables {
        for flow in &deliverable.flows {
            screen.node(&["bg-card", "border", "rounded-lg", "p-4"]);
            screen.line(format!("  [{}] {}", flow.id, flow.name));
        }
    }
    screen.finish()
}

fn dashboard() -> Screen {
    let mut screen = ScreenBuilder::new("Dashboard");
    let jobs = grouped_jobs();
    screen.line("Design Library");
    screen.line(format!("{} job(s)", jobs.len()));
    screen.node(&["grid", "grid-cols-3", "gap-4"]);
    for job in &jobs {
        screen.node(&["bg-card", "border", "rounded-lg", "p-4"]);
        for thumbnail in &job.thumbnails {
            screen.image(thumbnail, "Design thumbnail");
        }
        screen.line(format!(
            "  {} ({}) - {} design(s), updated {}",
            job.job_name, job.job_status, job.design_count, job.date_group_updated
        ));
    }
    screen.finish()
}

fn design_details(state: &AppState) -> Screen {
    let mut screen = ScreenBuilder::new("DesignDetails");
    let Some(design) = state.selected_design_id.as_deref().and_then(design_by_id) else {
        screen.line("Design Details");
        screen.line("Design not found.");
        return screen.finish();
    };
    screen.line(format!("Design {}", design.design_id));
    screen.image(design.thumbnail, "Design preview");
    screen.node(&["flex", "items-center", "gap-2", "text-sm", "text-muted-foreground"]);
    screen.line(format!("  Status: {}", design.status.as_str()));
    screen.line(format!("  Size: {}", design.size));
    screen.line(format!("  Service: {}", design.service_type));
    if let Some(price) = design.price {
        screen.line(format!("  Price: {price}"));
    }
    screen.node(&["bg-primary", "text-primary-foreground", "rounded-md", "px-4", "py-2"]);
    screen.line("  [Order Now]");
    screen.finish()
}

fn job_details(state: &AppState) -> Screen {
    let mut screen = ScreenBuilder::new("JobDetails");
    let Some(job) = state.selected_job_id.as_deref().and_then(job_by_parent_id) else {
        screen.line("Job Details");
        screen.line("Job not found.");
        return screen.finish();
    };
    screen.line(format!("Job {} ({})", job.job_name, job.tb_parent_id));
    screen.line(format!("Status: {}", job.job_status));
    if let Some(roster) = &job.primary_roster_name {
        screen.line(format!("Roster: {roster}"));
    }
    screen.node(&["w-full", "border", "rounded-lg"]);
    for player in players_for_job(&job.tb_parent_id) {
        screen.node(&["flex", "items-center", "gap-4", "border-b", "p-2"]);
        screen.image(&player.thumbnail, "Player design thumbnail");
        screen.line(format!(
            "  #{} {} - {} x{} @ ${:.2}",
            player.player_number,
            player.player_name,
            player.design_id,
            player.quantity,
            player.item_price
        ));
    }
    screen.finish()
}

fn cart(state: &AppState) -> Screen {
    let mut screen = ScreenBuilder::new("Cart");
    screen.line("Shopping Cart");
    if state.cart.is_empty() {
        screen.line("Your cart is empty.");
        return screen.finish();
    }
    for item in &state.cart.items {
        screen.node(&["bg-card", "border", "rounded-lg", "p-4"]);
        screen.line(format!(
            "  {} ({}) - {} player(s), subtotal ${:.2}",
            item.job_name,
            item.service_type,
            item.players.len(),
            state.cart.item_total(item)
        ));
        for player in &item.players {
            let quantity = state.cart.quantity(&item.item_id, &player.design_id);
            screen.line(format!(
                "    {} x{} @ ${:.2}",
                player.design_id, quantity, player.item_price
            ));
        }
    }
    screen.node(&["flex", "justify-between", "text-lg"]);
    screen.line(format!("Total: ${:.2}", state.cart.cart_total()));
    screen.finish()
}

fn checkout(state: &AppState) -> Screen {
    let mut screen = ScreenBuilder::new("Checkout");
    screen.line("Checkout");
    screen.line(format!(
        "{} item(s), total ${:.2}",
        state.cart.items.len(),
        state.cart.cart_total()
    ));
    screen.node(&["bg-primary", "text-primary-foreground", "rounded-md", "px-4", "py-2"]);
    screen.line("Order placed. Thank you!");
    screen.finish()
}

fn order_history() -> Screen {
    let mut screen = ScreenBuilder::new("OrderHistory");
    screen.line("Order History");
    let ordered: Vec<_> = DESIGNS
        .iter()
        .filter(|design| design.status == protodeck_catalog::DesignStatus::ReadyToOrder)
        .collect();
    screen.line(format!("{} past item(s)", ordered.len()));
    for design in ordered {
        screen.node(&["flex", "items-center", "gap-4", "border-b", "p-2"]);
        screen.line(format!(
            "  {} - {} submitted {}",
            design.design_id,
            design.job_name.unwrap_or("Single design"),
            design.date_submitted
        ));
    }
    screen.node(&["bg-secondary", "rounded-md", "px-4", "py-2"]);
    screen.line("[Reorder]");
    screen.finish()
}

fn editor_stub(page: PageId, state: &AppState) -> Screen {
    let mut screen = ScreenBuilder::new(page.label());
    screen.line(format!("{} (external editor)", page.label()));
    screen.line("This screen stands in for the embedded editor.");
    screen.line(format!("Returns to: {:?}", state.return_context));
    screen.node(&["bg-secondary", "rounded-md", "px-4", "py-2"]);
    screen.line("[Back to platform]");
    screen.finish()
}

#[cfg(test)]
mod tests {
    use protodeck_store::MemoryBackend;

    use super::*;

    fn demo_store() -> ProjectStore {
        ProjectStore::open_with_defaults(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn every_page_renders_some_text() {
        let store = demo_store();
        let state = AppState::default();
        for page in PageId::ALL {
            let screen = render(page, &state, &store);
            assert!(!screen.text.is_empty(), "{page} rendered nothing");
            assert!(!screen.manifest.nodes.is_empty(), "{page} emitted no nodes");
        }
    }

    #[test]
    fn dashboard_shows_every_grouped_job() {
        let screen = dashboard();
        for job in grouped_jobs() {
            assert!(screen.text.contains(&job.job_name));
        }
    }

    #[test]
    fn missing_design_selection_recovers_inline() {
        let state = AppState {
            selected_design_id: Some("D999".to_string()),
            ..AppState::default()
        };
        let screen = design_details(&state);
        assert!(screen.text.contains("not found"));
    }

    #[test]
    fn full_manifest_passes_presentation_checks() {
        let store = demo_store();
        let manifest = full_manifest(&AppState::default(), &store);
        let report = protodeck_health::Scanner::new().run(&store, &manifest);
        let presentation_issues: Vec<_> = report
            .issues
            .iter()
            .filter(|issue| {
                issue.id.starts_with("hardcoded-")
                    || issue.id.starts_with("large-dom")
                    || issue.id.starts_with("missing-alt-text")
                    || issue.id.starts_with("excessive-inline-styles")
            })
            .collect();
        assert!(presentation_issues.is_empty(), "{presentation_issues:?}");
    }
}
