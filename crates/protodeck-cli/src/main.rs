//! Command-line front end for the prototype review platform
//!
//! Every subcommand opens the project store from `--data-file`, runs one
//! operation, and exits. Mutating commands persist through the store itself;
//! nothing here writes the slot directly.

use std::path::Path;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, Command};
use protodeck_health::Scanner;
use protodeck_model::{FlowDraft, PageId};
use protodeck_nav::{
    current_step_index, flow_steps, parse_deep_link, resolve, AppState, WizardState, WizardStep,
};
use protodeck_store::{FileBackend, ProjectStore, DEMO_PROJECT_ID};

mod screens;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("protodeck")
        .version("0.1.0")
        .about("Prototype review platform: projects, health scans, flow walkthroughs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .global(true)
                .default_value("protodeck-projects.json")
                .help("Path of the JSON storage slot"),
        )
        .subcommand(Command::new("list").about("List stored projects"))
        .subcommand(
            Command::new("show")
                .about("Print one project as JSON")
                .arg(Arg::new("id").required(true).help("Project id")),
        )
        .subcommand(
            Command::new("create")
                .about("Create a project through the wizard steps")
                .arg(Arg::new("name").long("name").required(true).help("Project name"))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("What the project explores"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .required(true)
                        .help("Prototype template id"),
                )
                .arg(
                    Arg::new("research")
                        .long("research")
                        .action(ArgAction::Append)
                        .required(true)
                        .help("Research topic id (repeatable, at least one)"),
                )
                .arg(
                    Arg::new("ticket")
                        .long("ticket")
                        .default_value("")
                        .help("Tracking ticket URL"),
                )
                .arg(
                    Arg::new("docs")
                        .long("docs")
                        .default_value("")
                        .help("Requirements document URL"),
                )
                .arg(
                    Arg::new("flow")
                        .long("flow")
                        .action(ArgAction::Append)
                        .help("Flow draft as name=description (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a project")
                .arg(Arg::new("id").required(true).help("Project id")),
        )
        .subcommand(
            Command::new("export")
                .about("Write one project's export envelope to a file")
                .arg(Arg::new("id").required(true).help("Project id"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .help("Output directory"),
                ),
        )
        .subcommand(
            Command::new("export-all")
                .about("Write a timestamped backup of every project")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .help("Output directory"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import a project export file into the store")
                .arg(Arg::new("file").required(true).help("Export file path")),
        )
        .subcommand(
            Command::new("scan")
                .about("Run the health scanner over the store and screens")
                .arg(
                    Arg::new("fix-all")
                        .long("fix-all")
                        .action(ArgAction::SetTrue)
                        .help("Apply every auto-fixable issue, then re-scan"),
                ),
        )
        .subcommand(
            Command::new("fix")
                .about("Apply one auto-fixable issue by id")
                .arg(Arg::new("issue-id").required(true).help("Issue id from scan output")),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve a deep link and print the resulting state")
                .arg(
                    Arg::new("link")
                        .required(true)
                        .help("Hash link, e.g. '#/share/pmor-44/deliverable-1/flow-a?research=false'"),
                ),
        )
        .subcommand(
            Command::new("walk")
                .about("Print a flow's step table")
                .arg(Arg::new("flow-id").required(true).help("Flow id, e.g. flow-a"))
                .arg(
                    Arg::new("at")
                        .long("at")
                        .value_parser(value_parser!(PageId))
                        .help("Highlight the step for this page"),
                ),
        )
        .subcommand(
            Command::new("screens")
                .about("Render a screen as text")
                .arg(
                    Arg::new("page")
                        .required(true)
                        .value_parser(value_parser!(PageId))
                        .help("Page identifier, e.g. dashboard"),
                )
                .arg(Arg::new("project").long("project").help("Project id for platform screens"))
                .arg(Arg::new("design").long("design").help("Selected design id"))
                .arg(Arg::new("job").long("job").help("Selected job id")),
        );

    let matches = cli.get_matches();
    let data_file = matches.get_one::<String>("data-file").unwrap().clone();

    match matches.subcommand() {
        Some(("list", _)) => {
            let store = open_store(&data_file);
            for project in store.all_projects().values() {
                let status = project.status.map_or("no status", |status| status.label());
                println!(
                    "{}  [{}] {} ({} deliverables)",
                    project.id,
                    status,
                    project.name,
                    project.deliverables.len()
                );
            }
        }
        Some(("show", args)) => {
            let id = args.get_one::<String>("id").unwrap();
            let store = open_store(&data_file);
            match store.project(id) {
                Some(project) => println!("{}", serde_json::to_string_pretty(project)?),
                None => println!("project '{id}' not found"),
            }
        }
        Some(("create", args)) => {
            let mut store = open_store(&data_file);
            let project = run_wizard(args)?;
            let id = project.id.clone();
            store.save_project(project);
            println!("created {id}");
        }
        Some(("delete", args)) => {
            let id = args.get_one::<String>("id").unwrap();
            let mut store = open_store(&data_file);
            if store.project(id).is_none() {
                println!("project '{id}' not found");
            } else {
                store.delete_project(id);
                println!("deleted {id}");
            }
        }
        Some(("export", args)) => {
            let id = args.get_one::<String>("id").unwrap();
            let out = args.get_one::<String>("out").unwrap();
            let store = open_store(&data_file);
            match store.project(id) {
                Some(project) => {
                    let path = ProjectStore::download_project(project, Path::new(out), None)
                        .context("export failed")?;
                    println!("wrote {}", path.display());
                }
                None => println!("project '{id}' not found"),
            }
        }
        Some(("export-all", args)) => {
            let out = args.get_one::<String>("out").unwrap();
            let store = open_store(&data_file);
            let path = store.download_all(Path::new(out)).context("backup failed")?;
            println!("wrote {}", path.display());
        }
        Some(("import", args)) => {
            let file = args.get_one::<String>("file").unwrap();
            let mut store = open_store(&data_file);
            let project =
                ProjectStore::upload_project_file(Path::new(file)).context("import failed")?;
            let id = project.id.clone();
            store.save_project(project);
            println!("imported {id}");
        }
        Some(("scan", args)) => {
            let mut store = open_store(&data_file);
            let state = scan_state();
            let manifest = screens::full_manifest(&state, &store);
            let mut scanner = Scanner::new();
            let mut report = scanner.run(&store, &manifest);
            if args.get_flag("fix-all") {
                report = scanner.fix_all(&mut store, &report, &manifest);
            }
            print_report(&report);
        }
        Some(("fix", args)) => {
            let issue_id = args.get_one::<String>("issue-id").unwrap();
            let mut store = open_store(&data_file);
            let state = scan_state();
            let manifest = screens::full_manifest(&state, &store);
            let mut scanner = Scanner::new();
            let report = scanner.run(&store, &manifest);
            match report.issues.iter().find(|issue| issue.id == *issue_id) {
                Some(issue) => {
                    if scanner.fix_issue(&mut store, issue) {
                        println!("fixed {issue_id}");
                        print_report(&scanner.run(&store, &manifest));
                    } else {
                        println!("issue '{issue_id}' is not auto-fixable");
                    }
                }
                None => println!("issue '{issue_id}' not found"),
            }
        }
        Some(("resolve", args)) => {
            let link = args.get_one::<String>("link").unwrap();
            let store = open_store(&data_file);
            let (hash, query) = match link.split_once('?') {
                Some((hash, query)) => (hash, query),
                None => (link.as_str(), ""),
            };
            match parse_deep_link(hash, query) {
                Some(deep_link) => {
                    let state = resolve(AppState::default(), &deep_link, &store);
                    println!("{}", serde_json::to_string_pretty(&state)?);
                }
                None => println!("link '{link}' not recognized"),
            }
        }
        Some(("walk", args)) => {
            let flow_id = args.get_one::<String>("flow-id").unwrap();
            let steps = flow_steps(flow_id);
            if steps.is_empty() {
                println!("flow '{flow_id}' has no step table");
            } else {
                let highlight = args
                    .get_one::<PageId>("at")
                    .and_then(|page| current_step_index(flow_id, *page));
                for (index, step) in steps.iter().enumerate() {
                    let marker = if highlight == Some(index) { ">" } else { " " };
                    println!("{marker} {}. {} [{}]", index + 1, step.label, step.page);
                    println!("     {}", step.description);
                    if let Some(next) = step.next_action {
                        println!("     next: {next}");
                    }
                }
            }
        }
        Some(("screens", args)) => {
            let page = *args.get_one::<PageId>("page").unwrap();
            let store = open_store(&data_file);
            let state = AppState {
                current_project: Some(
                    args.get_one::<String>("project")
                        .cloned()
                        .unwrap_or_else(|| DEMO_PROJECT_ID.to_string()),
                ),
                selected_design_id: args.get_one::<String>("design").cloned(),
                selected_job_id: args.get_one::<String>("job").cloned(),
                ..AppState::default()
            };
            print!("{}", screens::render(page, &state, &store).text);
        }
        _ => unreachable!("arg_required_else_help"),
    }

    Ok(())
}

fn open_store(data_file: &str) -> ProjectStore {
    ProjectStore::open_with_defaults(Box::new(FileBackend::new(data_file)))
}

/// Session state used for scans: the demo project selected, nothing else
fn scan_state() -> AppState {
    AppState {
        current_project: Some(DEMO_PROJECT_ID.to_string()),
        ..AppState::default()
    }
}

fn print_report(report: &protodeck_health::HealthReport) {
    println!(
        "score {}/100 ({}/{} checks passed)",
        report.score, report.passed_checks, report.total_checks
    );
    for issue in &report.issues {
        let fixable = if issue.auto_fixable { " (auto-fixable)" } else { "" };
        println!(
            "  [{}] {} - {}{}",
            issue.severity.as_str(),
            issue.id,
            issue.title,
            fixable
        );
        if let Some(recommendation) = &issue.recommendation {
            println!("      {recommendation}");
        }
    }
}

/// Drive the wizard from flags, step by step, the way the UI would
fn run_wizard(args: &clap::ArgMatches) -> anyhow::Result<protodeck_model::Project> {
    let mut wizard = WizardState {
        name: args.get_one::<String>("name").unwrap().clone(),
        description: args.get_one::<String>("description").unwrap().clone(),
        template: args.get_one::<String>("template").cloned(),
        research: args
            .get_many::<String>("research")
            .unwrap_or_default()
            .cloned()
            .collect(),
        ticket_url: args.get_one::<String>("ticket").unwrap().clone(),
        documentation_url: args.get_one::<String>("docs").unwrap().clone(),
        ..WizardState::default()
    };
    if let Some(template) = wizard.template.as_deref() {
        if protodeck_model::prototype_template(template).is_none() {
            bail!("unknown template '{template}'");
        }
    }
    for topic in &wizard.research {
        if protodeck_model::research_topic(topic).is_none() {
            bail!("unknown research topic '{topic}'");
        }
    }
    for raw in args.get_many::<String>("flow").unwrap_or_default() {
        let (name, description) = raw
            .split_once('=')
            .with_context(|| format!("flow '{raw}' must be name=description"))?;
        wizard.flows.push(FlowDraft {
            name: name.to_string(),
            description: description.to_string(),
            ..FlowDraft::default()
        });
    }
    while wizard.step != WizardStep::Review {
        if !wizard.next() {
            bail!("wizard blocked at step {:?}", wizard.step);
        }
    }
    Ok(wizard.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_through_export() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join("projects.json");
        let slot = slot.to_str().unwrap();

        let mut store = open_store(slot);
        store.save_project(protodeck_model::Project {
            id: "project-roundtrip-1".to_string(),
            name: "Round trip".to_string(),
            ..protodeck_model::Project::default()
        });

        let exported = ProjectStore::download_project(
            store.project("project-roundtrip-1").unwrap(),
            dir.path(),
            None,
        )
        .unwrap();

        // the slot persisted, so a fresh open sees the saved project
        let reopened = open_store(slot);
        assert!(reopened.project("project-roundtrip-1").is_some());

        let imported = ProjectStore::upload_project_file(&exported).unwrap();
        assert_eq!(imported.id, "project-roundtrip-1");
        assert_eq!(imported.name, "Round trip");
    }
}
