//! Property tests for the health score

use proptest::prelude::*;
use protodeck_health::{DocumentManifest, HealthReport, Scanner};
use protodeck_model::Project;
use protodeck_store::{MemoryBackend, ProjectStore};

prop_compose! {
    fn arb_sparse_project()(
        id in "[a-z][a-z0-9-]{0,12}",
        name in "[A-Za-z ]{0,20}",
        has_status in any::<bool>(),
        has_tags in any::<bool>(),
        citation in proptest::option::of("[a-z-]{1,20}"),
    ) -> Project {
        let mut project: Project = serde_json::from_str("{}").unwrap();
        project.id = id;
        project.name = name;
        if has_status {
            project.status = Some(protodeck_model::ProjectStatus::Draft);
        }
        if has_tags {
            project.tags = Some(Vec::new());
        }
        project.research_citations = citation.map(|c| vec![c]);
        project
    }
}

proptest! {
    #[test]
    fn score_is_always_in_range(projects in proptest::collection::vec(arb_sparse_project(), 0..6)) {
        let mut store = ProjectStore::open(Box::new(MemoryBackend::new()), Default::default());
        for p in projects {
            store.save_project(p);
        }
        let report = Scanner::new().run(&store, &DocumentManifest::default());
        prop_assert!(report.score <= 100);
        prop_assert!(report.passed_checks <= report.total_checks);
        prop_assert_eq!(
            report.score,
            HealthReport::compute_score(report.passed_checks, report.total_checks)
        );
    }

    #[test]
    fn fix_all_never_lowers_the_score(projects in proptest::collection::vec(arb_sparse_project(), 1..4)) {
        let mut store = ProjectStore::open(Box::new(MemoryBackend::new()), Default::default());
        for p in projects {
            store.save_project(p);
        }
        let mut scanner = Scanner::new();
        let manifest = DocumentManifest::default();
        let before = scanner.run(&store, &manifest);
        let after = scanner.fix_all(&mut store, &before, &manifest);
        prop_assert!(after.score >= before.score);
    }
}
