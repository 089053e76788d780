//! The health scanner
//!
//! One synchronous pass over the project store and the rendered-document
//! manifest. Checks run in a fixed order; each contributes one unit to the
//! score regardless of how many issues it raises. Issues carry deterministic
//! ids so a fix applied in this session suppresses the finding across
//! re-scans.

use std::collections::HashSet;

use chrono::Utc;
use once_cell::sync::Lazy;
use protodeck_store::ProjectStore;
use regex::Regex;

use crate::fix::FixAction;
use crate::issue::{Category, HealthReport, Issue, Severity};
use crate::manifest::DocumentManifest;

/// Typography classes the design system forbids in favor of CSS variables
pub const FORBIDDEN_FONT_CLASSES: &[&str] = &[
    "text-3xl",
    "text-4xl",
    "text-5xl",
    "text-6xl",
    "font-thin",
    "font-extralight",
    "font-light",
    "font-normal",
    "font-medium",
    "font-semibold",
    "font-bold",
    "font-extrabold",
    "font-black",
    "leading-none",
    "leading-tight",
    "leading-snug",
    "leading-normal",
    "leading-relaxed",
    "leading-loose",
];

/// Hardcoded palette classes that should be design-system tokens
static FORBIDDEN_COLOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const FAMILIES: &str = "red|blue|green|yellow|purple|pink|indigo|gray|slate|zinc|neutral|stone";
    ["text", "bg", "border"]
        .iter()
        .map(|prefix| {
            Regex::new(&format!(r"^{prefix}-(?:{FAMILIES})-\d+$"))
                .unwrap_or_else(|_| unreachable!("static pattern"))
        })
        .collect()
});

/// Nodes beyond this count flag the document as oversized
pub const LARGE_DOM_THRESHOLD: usize = 1500;

/// Inline-style count beyond this flags a code-quality issue
pub const INLINE_STYLE_THRESHOLD: usize = 10;

/// Runs scans and tracks which issues this session already fixed
#[derive(Debug, Default)]
pub struct Scanner {
    fixed_ids: HashSet<String>,
}

struct ScanPass {
    issues: Vec<Issue>,
    total_checks: usize,
    passed_checks: usize,
}

impl ScanPass {
    fn new() -> Self {
        Self { issues: Vec::new(), total_checks: 0, passed_checks: 0 }
    }

    /// Record a check outcome: any issues raised mean the check failed
    fn record(&mut self, issues: Vec<Issue>) {
        self.total_checks += 1;
        if issues.is_empty() {
            self.passed_checks += 1;
        }
        self.issues.extend(issues);
    }

    /// Record a pass/fail-only check that raises no issue
    fn record_silent(&mut self, passed: bool) {
        self.total_checks += 1;
        if passed {
            self.passed_checks += 1;
        }
    }
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of issues fixed during this session
    #[must_use]
    pub fn fixed_ids(&self) -> &HashSet<String> {
        &self.fixed_ids
    }

    /// Run every check once and report
    #[must_use]
    pub fn run(&self, store: &ProjectStore, manifest: &DocumentManifest) -> HealthReport {
        let mut pass = ScanPass::new();

        pass.record(check_project_shapes(store));
        pass.record(check_research_citations(store));
        pass.record(check_templates(store));
        pass.record(check_requirements_urls(store));
        pass.record(check_storage(store));
        pass.record_silent(!body_has_console_markers(manifest));
        pass.record(check_font_classes(manifest));
        pass.record(check_color_classes(manifest));
        pass.record(check_dom_size(manifest));
        pass.record(check_image_alt(manifest));
        pass.record(check_inline_styles(manifest));
        pass.record(check_duplicate_ids(store));

        let score = HealthReport::compute_score(pass.passed_checks, pass.total_checks);
        tracing::debug!(
            score,
            issues = pass.issues.len(),
            passed = pass.passed_checks,
            total = pass.total_checks,
            "health scan complete"
        );

        HealthReport {
            score,
            issues: pass.issues,
            total_checks: pass.total_checks,
            passed_checks: pass.passed_checks,
            last_run: Utc::now().to_rfc3339(),
        }
    }

    /// Issues from a report not yet fixed this session
    #[must_use]
    pub fn active_issues<'a>(&self, report: &'a HealthReport) -> Vec<&'a Issue> {
        report.issues.iter().filter(|i| !self.fixed_ids.contains(&i.id)).collect()
    }

    /// Apply one issue's repair and remember its id
    ///
    /// Returns false when the issue carries no repair.
    pub fn fix_issue(&mut self, store: &mut ProjectStore, issue: &Issue) -> bool {
        let Some(fix) = &issue.fix else {
            return false;
        };
        fix.apply(store);
        self.fixed_ids.insert(issue.id.clone());
        tracing::info!(id = %issue.id, "issue fixed");
        true
    }

    /// Apply every not-yet-fixed auto-fixable issue, then re-scan
    pub fn fix_all(
        &mut self,
        store: &mut ProjectStore,
        report: &HealthReport,
        manifest: &DocumentManifest,
    ) -> HealthReport {
        let fixable: Vec<&Issue> = report
            .issues
            .iter()
            .filter(|i| i.auto_fixable && !self.fixed_ids.contains(&i.id))
            .collect();
        for issue in fixable {
            if let Some(fix) = &issue.fix {
                fix.apply(store);
            }
            self.fixed_ids.insert(issue.id.clone());
        }
        self.run(store, manifest)
    }
}

fn check_project_shapes(store: &ProjectStore) -> Vec<Issue> {
    let mut issues = Vec::new();
    for project in store.all_projects().values() {
        if project.id.is_empty() {
            issues.push(Issue {
                id: Issue::make_id("project-missing-id", None),
                severity: Severity::Error,
                category: Category::Data,
                title: "Project missing ID".to_string(),
                description: format!(
                    "Project \"{}\" does not have an ID field. This can cause rendering issues.",
                    project.name
                ),
                auto_fixable: true,
                fix: Some(FixAction::AssignGeneratedId { current_id: project.id.clone() }),
                location: Some("Project Data".to_string()),
                recommendation: None,
                code_snippet: None,
            });
        }
        if project.author.as_ref().map_or(true, |a| a.name.is_empty()) {
            issues.push(Issue {
                id: Issue::make_id("project-missing-author", Some(&project.id)),
                severity: Severity::Warning,
                category: Category::Data,
                title: "Project missing author information".to_string(),
                description: format!(
                    "Project \"{}\" is missing author data. This may cause display errors.",
                    project.name
                ),
                auto_fixable: true,
                fix: Some(FixAction::BackfillAuthor { project_id: project.id.clone() }),
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
        if project.created.is_empty() || project.last_updated.is_empty() {
            issues.push(Issue {
                id: Issue::make_id("project-missing-timestamps", Some(&project.id)),
                severity: Severity::Warning,
                category: Category::Data,
                title: "Project missing timestamps".to_string(),
                description: format!(
                    "Project \"{}\" is missing created or lastUpdated timestamps.",
                    project.name
                ),
                auto_fixable: true,
                fix: Some(FixAction::BackfillTimestamps { project_id: project.id.clone() }),
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
        if project.status.is_none() {
            issues.push(Issue {
                id: Issue::make_id("project-missing-status", Some(&project.id)),
                severity: Severity::Info,
                category: Category::Data,
                title: "Project missing status".to_string(),
                description: format!("Project \"{}\" does not have a status field.", project.name),
                auto_fixable: true,
                fix: Some(FixAction::DefaultStatus { project_id: project.id.clone() }),
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
        if project.tags.is_none() {
            issues.push(Issue {
                id: Issue::make_id("project-missing-tags", Some(&project.id)),
                severity: Severity::Info,
                category: Category::Structure,
                title: "Project missing tags array".to_string(),
                description: format!("Project \"{}\" is missing the tags array.", project.name),
                auto_fixable: true,
                fix: Some(FixAction::EmptyTags { project_id: project.id.clone() }),
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
        if project.flows.is_none() {
            issues.push(Issue {
                id: Issue::make_id("project-missing-flows", Some(&project.id)),
                severity: Severity::Info,
                category: Category::Structure,
                title: "Project missing flows array".to_string(),
                description: format!("Project \"{}\" is missing the flows array.", project.name),
                auto_fixable: true,
                fix: Some(FixAction::EmptyFlows { project_id: project.id.clone() }),
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
    }
    issues
}

fn check_research_citations(store: &ProjectStore) -> Vec<Issue> {
    let mut issues = Vec::new();
    for project in store.all_projects().values() {
        let Some(citations) = &project.research_citations else {
            continue;
        };
        for topic_id in citations {
            if protodeck_model::research_topic(topic_id).is_none() {
                issues.push(Issue {
                    id: Issue::make_id("invalid-research", Some(&project.id)),
                    severity: Severity::Warning,
                    category: Category::Data,
                    title: "Invalid research citation".to_string(),
                    description: format!(
                        "Project \"{}\" references research topic \"{}\" which doesn't exist.",
                        project.name, topic_id
                    ),
                    auto_fixable: true,
                    fix: Some(FixAction::StripInvalidCitations {
                        project_id: project.id.clone(),
                    }),
                    location: Some(format!("Project: {}", project.name)),
                    recommendation: None,
                    code_snippet: None,
                });
            }
        }
    }
    issues
}

fn check_templates(store: &ProjectStore) -> Vec<Issue> {
    let mut issues = Vec::new();
    for project in store.all_projects().values() {
        let Some(template) = &project.template else {
            continue;
        };
        if protodeck_model::prototype_template(template).is_none() {
            issues.push(Issue {
                id: Issue::make_id("invalid-template", Some(&project.id)),
                severity: Severity::Error,
                category: Category::Data,
                title: "Invalid template reference".to_string(),
                description: format!(
                    "Project \"{}\" references template \"{}\" which doesn't exist.",
                    project.name, template
                ),
                auto_fixable: false,
                fix: None,
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
    }
    issues
}

fn check_requirements_urls(store: &ProjectStore) -> Vec<Issue> {
    let mut issues = Vec::new();
    for project in store.all_projects().values() {
        let Some(doc) = &project.requirements_doc else {
            continue;
        };
        if url::Url::parse(&doc.url).is_err() {
            issues.push(Issue {
                id: Issue::make_id("invalid-url", Some(&project.id)),
                severity: Severity::Warning,
                category: Category::Data,
                title: "Invalid Requirements Doc URL".to_string(),
                description: format!(
                    "Project \"{}\" has an invalid requirements document URL format.",
                    project.name
                ),
                auto_fixable: false,
                fix: None,
                location: Some(format!("Project: {}", project.name)),
                recommendation: None,
                code_snippet: None,
            });
        }
    }
    issues
}

fn check_storage(store: &ProjectStore) -> Vec<Issue> {
    match store.probe_backend() {
        Ok(()) => Vec::new(),
        Err(err) => vec![Issue {
            id: Issue::make_id("storage-error", None),
            severity: Severity::Error,
            category: Category::Performance,
            title: "Storage unavailable".to_string(),
            description: format!(
                "Cannot access the persistence slot ({err}). Data persistence may not work."
            ),
            auto_fixable: false,
            fix: None,
            location: Some("Storage Backend".to_string()),
            recommendation: None,
            code_snippet: None,
        }],
    }
}

fn body_has_console_markers(manifest: &DocumentManifest) -> bool {
    manifest.body_text.contains("Warning:") || manifest.body_text.contains("Error:")
}

fn check_font_classes(manifest: &DocumentManifest) -> Vec<Issue> {
    let mut violations: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for node in &manifest.nodes {
        for class in &node.classes {
            if FORBIDDEN_FONT_CLASSES.contains(&class.as_str()) && seen.insert(class.clone()) {
                violations.push(format!("Element with class \"{class}\""));
            }
        }
    }
    if violations.is_empty() {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("hardcoded-font-classes", None),
        severity: Severity::Warning,
        category: Category::DesignSystem,
        title: "Hardcoded typography classes detected".to_string(),
        description: format!(
            "Found {} instance(s) of hardcoded font-weight or line-height classes. \
             Use CSS variables instead.",
            violations.len()
        ),
        auto_fixable: false,
        fix: None,
        location: Some("Multiple Components".to_string()),
        recommendation: Some(
            "Replace hardcoded font-weight classes like \"font-bold\" with design \
             system typography variables."
                .to_string(),
        ),
        code_snippet: Some(violations.iter().take(3).cloned().collect::<Vec<_>>().join(", ")),
    }]
}

fn check_color_classes(manifest: &DocumentManifest) -> Vec<Issue> {
    let mut violations: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for node in &manifest.nodes {
        for class in &node.classes {
            if FORBIDDEN_COLOR_PATTERNS.iter().any(|p| p.is_match(class))
                && seen.insert(class.clone())
            {
                violations.push(class.clone());
            }
        }
    }
    if violations.is_empty() {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("hardcoded-color-classes", None),
        severity: Severity::Warning,
        category: Category::DesignSystem,
        title: "Hardcoded color classes detected".to_string(),
        description: format!(
            "Found {} hardcoded color class(es). These should use design system \
             color variables instead.",
            violations.len()
        ),
        auto_fixable: false,
        fix: None,
        location: Some("Multiple Components".to_string()),
        recommendation: Some(
            "Replace hardcoded colors like \"bg-blue-500\" with design system \
             tokens like \"bg-primary\" or \"bg-muted\"."
                .to_string(),
        ),
        code_snippet: Some(violations.iter().take(5).cloned().collect::<Vec<_>>().join(", ")),
    }]
}

fn check_dom_size(manifest: &DocumentManifest) -> Vec<Issue> {
    let total = manifest.nodes.len();
    if total <= LARGE_DOM_THRESHOLD {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("large-dom", None),
        severity: Severity::Info,
        category: Category::Performance,
        title: "Large document size detected".to_string(),
        description: format!(
            "The document has {total} elements. Large documents can impact performance."
        ),
        auto_fixable: false,
        fix: None,
        location: Some("Application".to_string()),
        recommendation: Some(
            "Consider virtualization for long lists or splitting into smaller components."
                .to_string(),
        ),
        code_snippet: None,
    }]
}

fn check_image_alt(manifest: &DocumentManifest) -> Vec<Issue> {
    let missing: Vec<String> = manifest
        .nodes
        .iter()
        .filter_map(|n| n.image.as_ref())
        .enumerate()
        .filter(|(_, img)| img.alt.as_deref().unwrap_or("").is_empty())
        .map(|(index, img)| {
            let src: String = img.src.chars().take(50).collect();
            let shown = if src.is_empty() { "unknown source" } else { src.as_str() };
            format!("Image {}: {shown}", index + 1)
        })
        .collect();
    if missing.is_empty() {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("missing-alt-text", None),
        severity: Severity::Warning,
        category: Category::Accessibility,
        title: "Images missing alt text".to_string(),
        description: format!(
            "Found {} image(s) without alt attributes. This impacts accessibility \
             for screen readers.",
            missing.len()
        ),
        auto_fixable: false,
        fix: None,
        location: Some("Multiple Components".to_string()),
        recommendation: Some(
            "Add descriptive alt text to all images. Use alt=\"\" for decorative images only."
                .to_string(),
        ),
        code_snippet: Some(missing.iter().take(3).cloned().collect::<Vec<_>>().join(", ")),
    }]
}

fn check_inline_styles(manifest: &DocumentManifest) -> Vec<Issue> {
    let count = manifest.nodes.iter().filter(|n| n.inline_style).count();
    if count <= INLINE_STYLE_THRESHOLD {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("excessive-inline-styles", None),
        severity: Severity::Info,
        category: Category::CodeQuality,
        title: "Excessive inline styles detected".to_string(),
        description: format!(
            "Found {count} elements with inline styles. Consider using utility \
             classes or CSS variables instead."
        ),
        auto_fixable: false,
        fix: None,
        location: Some("Multiple Components".to_string()),
        recommendation: Some(
            "Replace inline styles with utility classes for better maintainability.".to_string(),
        ),
        code_snippet: None,
    }]
}

fn check_duplicate_ids(store: &ProjectStore) -> Vec<Issue> {
    // The map is keyed by id, so duplicates can only enter through a blank id
    // or a hand-edited slot; the check stays for both.
    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = store
        .all_projects()
        .values()
        .map(|p| p.id.as_str())
        .filter(|id| id.is_empty() || !seen.insert(*id))
        .collect();
    if duplicates.is_empty() {
        return Vec::new();
    }
    vec![Issue {
        id: Issue::make_id("duplicate-project-ids", None),
        severity: Severity::Error,
        category: Category::Structure,
        title: "Duplicate project IDs detected".to_string(),
        description: format!(
            "Found {} duplicate or blank project ID(s). This will cause rendering issues.",
            duplicates.len()
        ),
        auto_fixable: true,
        fix: Some(FixAction::ReassignDuplicateIds),
        location: Some("All Projects".to_string()),
        recommendation: None,
        code_snippet: None,
    }]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use protodeck_model::Project;
    use protodeck_store::MemoryBackend;

    use super::*;
    use crate::manifest::NodeManifest;

    fn store_from(projects: Vec<Project>) -> ProjectStore {
        let mut store = ProjectStore::open(Box::new(MemoryBackend::new()), Default::default());
        for p in projects {
            store.save_project(p);
        }
        store
    }

    fn project_json(value: serde_json::Value) -> Project {
        serde_json::from_value(value).unwrap()
    }

    fn healthy_project() -> Project {
        project_json(serde_json::json!({
            "id": "p1",
            "name": "Healthy",
            "status": "draft",
            "tags": [],
            "flows": [],
            "author": { "name": "You" },
            "created": "2024-01-01",
            "lastUpdated": "2024-01-02"
        }))
    }

    #[test]
    fn clean_store_scores_100() {
        let store = store_from(vec![healthy_project()]);
        let report = Scanner::new().run(&store, &DocumentManifest::default());
        assert_eq!(report.score, 100);
        assert_eq!(report.total_checks, 12);
        assert_eq!(report.passed_checks, 12);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn bare_project_raises_shape_issues() {
        let store = store_from(vec![project_json(serde_json::json!({
            "id": "bare",
            "name": "Bare"
        }))]);
        let report = Scanner::new().run(&store, &DocumentManifest::default());

        let ids: Vec<&str> = report.issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "project-missing-author-bare",
                "project-missing-timestamps-bare",
                "project-missing-status-bare",
                "project-missing-tags-bare",
                "project-missing-flows-bare",
            ]
        );
        // All shape findings come from one check, so exactly one unit is lost
        assert_eq!(report.passed_checks, 11);
        assert_eq!(report.score, 92);
    }

    #[test]
    fn scan_is_idempotent_without_mutation() {
        let store = store_from(vec![project_json(serde_json::json!({
            "id": "p1",
            "name": "P",
            "template": "no-such-template"
        }))]);
        let scanner = Scanner::new();
        let manifest = DocumentManifest::default();

        let first = scanner.run(&store, &manifest);
        let second = scanner.run(&store, &manifest);
        assert_eq!(first.score, second.score);
        let first_ids: Vec<&String> = first.issues.iter().map(|i| &i.id).collect();
        let second_ids: Vec<&String> = second.issues.iter().map(|i| &i.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn fix_all_converges_on_fixable_issues() {
        let mut store = store_from(vec![project_json(serde_json::json!({
            "id": "p1",
            "name": "P"
        }))]);
        let mut scanner = Scanner::new();
        let manifest = DocumentManifest::default();

        let before = scanner.run(&store, &manifest);
        assert!(before.score < 100);

        let after = scanner.fix_all(&mut store, &before, &manifest);
        assert_eq!(after.score, 100);
        assert!(after.issues.is_empty());

        let fixed = store.project("p1").unwrap();
        assert_eq!(fixed.status, Some(protodeck_model::ProjectStatus::Draft));
        assert_eq!(fixed.tags, Some(vec![]));
        assert!(fixed.author.is_some());
        assert!(!fixed.created.is_empty());
    }

    #[test]
    fn fixed_issues_are_filtered_from_active_list() {
        let mut store = store_from(vec![project_json(serde_json::json!({
            "id": "p1",
            "name": "P",
            "status": "draft",
            "tags": [],
            "flows": [],
            "created": "2024-01-01",
            "lastUpdated": "2024-01-01"
        }))]);
        let mut scanner = Scanner::new();
        let manifest = DocumentManifest::default();

        let report = scanner.run(&store, &manifest);
        assert_eq!(scanner.active_issues(&report).len(), 1);

        let issue = report.issues[0].clone();
        assert!(scanner.fix_issue(&mut store, &issue));
        assert!(scanner.active_issues(&report).is_empty());
    }

    #[test]
    fn unfixable_issue_is_reported_as_such() {
        let store = store_from(vec![project_json(serde_json::json!({
            "id": "p1",
            "name": "P",
            "status": "draft",
            "tags": [],
            "flows": [],
            "author": { "name": "You" },
            "created": "2024-01-01",
            "lastUpdated": "2024-01-01",
            "template": "missing-template"
        }))]);
        let mut scanner = Scanner::new();
        let report = scanner.run(&store, &DocumentManifest::default());

        assert_eq!(report.issues.len(), 1);
        let issue = report.issues[0].clone();
        assert_eq!(issue.id, "invalid-template-p1");
        assert!(!issue.auto_fixable);

        let mut store = store;
        assert!(!scanner.fix_issue(&mut store, &issue));
    }

    #[test]
    fn dangling_citation_is_stripped_by_fix() {
        let mut store = store_from(vec![project_json(serde_json::json!({
            "id": "p1",
            "name": "P",
            "status": "draft",
            "tags": [],
            "flows": [],
            "author": { "name": "You" },
            "created": "2024-01-01",
            "lastUpdated": "2024-01-01",
            "researchCitations": ["cart-abandonment", "bogus"]
        }))]);
        let mut scanner = Scanner::new();
        let manifest = DocumentManifest::default();

        let before = scanner.run(&store, &manifest);
        assert!(before.issues.iter().any(|i| i.id == "invalid-research-p1"));

        let after = scanner.fix_all(&mut store, &before, &manifest);
        assert_eq!(after.score, 100);
        assert_eq!(
            store.project("p1").unwrap().research_citations,
            Some(vec!["cart-abandonment".to_string()])
        );
    }

    #[test]
    fn probe_failure_surfaces_storage_error() {
        let mut backend = MemoryBackend::new();
        backend.set_unavailable(true);
        // Open succeeds because the failed read falls back to defaults
        let store = ProjectStore::open(Box::new(backend), Default::default());
        let report = Scanner::new().run(&store, &DocumentManifest::default());
        assert!(report.issues.iter().any(|i| i.id == "storage-error"));
    }

    #[test]
    fn console_markers_cost_a_check_without_an_issue() {
        let store = store_from(vec![healthy_project()]);
        let manifest = DocumentManifest {
            nodes: vec![],
            body_text: "Warning: something looked off".to_string(),
        };
        let report = Scanner::new().run(&store, &manifest);
        assert_eq!(report.passed_checks, 11);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn forbidden_classes_are_flagged_once_per_class() {
        let store = store_from(vec![healthy_project()]);
        let manifest = DocumentManifest {
            nodes: vec![
                NodeManifest::with_classes(["font-bold", "bg-blue-500"]),
                NodeManifest::with_classes(["font-bold", "text-red-300"]),
                NodeManifest::with_classes(["bg-primary", "text-foreground"]),
            ],
            body_text: String::new(),
        };
        let report = Scanner::new().run(&store, &manifest);

        let fonts = report.issues.iter().find(|i| i.id == "hardcoded-font-classes").unwrap();
        assert!(fonts.description.contains("1 instance(s)"));
        let colors = report.issues.iter().find(|i| i.id == "hardcoded-color-classes").unwrap();
        assert_eq!(colors.code_snippet.as_deref(), Some("bg-blue-500, text-red-300"));
    }

    #[test]
    fn design_tokens_do_not_match_color_patterns() {
        for class in ["bg-primary", "text-muted-foreground", "border-border", "bg-white"] {
            assert!(
                !FORBIDDEN_COLOR_PATTERNS.iter().any(|p| p.is_match(class)),
                "{class} should be allowed"
            );
        }
        assert!(FORBIDDEN_COLOR_PATTERNS.iter().any(|p| p.is_match("border-slate-200")));
    }

    #[test]
    fn oversized_documents_and_inline_styles_are_flagged() {
        let store = store_from(vec![healthy_project()]);
        let mut nodes = vec![NodeManifest::default(); LARGE_DOM_THRESHOLD + 1];
        for node in nodes.iter_mut().take(INLINE_STYLE_THRESHOLD + 1) {
            node.inline_style = true;
        }
        let manifest = DocumentManifest { nodes, body_text: String::new() };
        let report = Scanner::new().run(&store, &manifest);

        assert!(report.issues.iter().any(|i| i.id == "large-dom"));
        assert!(report.issues.iter().any(|i| i.id == "excessive-inline-styles"));
    }

    #[test]
    fn images_without_alt_are_flagged() {
        let store = store_from(vec![healthy_project()]);
        let manifest = DocumentManifest {
            nodes: vec![
                NodeManifest {
                    image: Some(crate::manifest::ImageInfo {
                        src: "https://example.com/a.png".to_string(),
                        alt: Some("design thumbnail".to_string()),
                    }),
                    ..NodeManifest::default()
                },
                NodeManifest {
                    image: Some(crate::manifest::ImageInfo {
                        src: "https://example.com/b.png".to_string(),
                        alt: None,
                    }),
                    ..NodeManifest::default()
                },
            ],
            body_text: String::new(),
        };
        let report = Scanner::new().run(&store, &manifest);
        let alt = report.issues.iter().find(|i| i.id == "missing-alt-text").unwrap();
        assert!(alt.description.contains("1 image(s)"));
    }
}
