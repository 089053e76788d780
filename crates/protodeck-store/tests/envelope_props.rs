//! Property tests for the export/import envelope

use proptest::prelude::*;
use protodeck_model::{Project, ProjectStatus};
use protodeck_store::ProjectStore;

fn arb_status() -> impl Strategy<Value = Option<ProjectStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(ProjectStatus::Draft)),
        Just(Some(ProjectStatus::InReview)),
        Just(Some(ProjectStatus::Approved)),
        Just(Some(ProjectStatus::Development)),
        Just(Some(ProjectStatus::Complete)),
    ]
}

prop_compose! {
    fn arb_project()(
        id in "[a-z][a-z0-9-]{0,16}",
        name in ".{0,40}",
        description in ".{0,80}",
        status in arb_status(),
        tags in proptest::option::of(proptest::collection::vec("[a-z]{1,8}", 0..4)),
    ) -> Project {
        let mut project: Project = serde_json::from_str("{}").unwrap();
        project.id = id;
        project.name = name;
        project.description = description;
        project.status = status;
        project.tags = tags;
        project
    }
}

proptest! {
    #[test]
    fn envelope_round_trip_preserves_the_project(project in arb_project()) {
        let json = ProjectStore::export_project(&project).unwrap();
        let imported = ProjectStore::import_project(&json).unwrap();
        prop_assert_eq!(imported, project);
    }

    #[test]
    fn import_never_panics_on_arbitrary_text(input in ".{0,200}") {
        let _ = ProjectStore::import_project(&input);
    }
}
