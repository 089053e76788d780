//! Derived groupings over the design catalog
//!
//! All groupings are recomputed on every call from the seed rows. Insertion
//! order of the grouping maps follows catalog order, which keeps thumbnail
//! selection deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::design::{Design, DESIGNS};

/// One production job, grouped from its member designs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_name: String,
    pub tb_parent_id: String,
    pub job_status: String,
    pub design_count: usize,
    /// Max submit date among member designs
    pub date_group_updated: String,
    pub primary_roster_id: Option<String>,
    pub primary_roster_name: Option<String>,
    /// First member thumbnails, capped at 4
    pub thumbnails: Vec<String>,
}

/// One roster, grouped from designs that carry a roster name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub roster_id: String,
    pub roster_name: String,
    pub player_count: usize,
    pub linked_job_count: usize,
    pub thumbnails: Vec<String>,
    pub tb_parent_id: String,
}

/// One order line for a player within a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_name: String,
    pub player_number: String,
    pub design_id: String,
    pub thumbnail: String,
    pub status: String,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub item_price: f64,
    pub extended_price: f64,
    pub last_ordered_date: Option<String>,
    pub last_updated_date: String,
}

fn team_builder_rows() -> impl Iterator<Item = &'static Design> {
    DESIGNS.iter().filter(|d| d.is_team_builder && !d.is_archived)
}

/// Group active team-builder designs into jobs
///
/// One job per distinct `(job_name, tb_parent_id)` pair, sorted newest-first by
/// group date.
#[must_use]
pub fn grouped_jobs() -> Vec<Job> {
    let mut jobs: IndexMap<(String, String), Job> = IndexMap::new();

    for design in team_builder_rows() {
        let (Some(job_name), Some(tb_parent_id)) = (design.job_name, design.tb_parent_id) else {
            continue;
        };
        let job = jobs
            .entry((job_name.to_string(), tb_parent_id.to_string()))
            .or_insert_with(|| Job {
                job_name: job_name.to_string(),
                tb_parent_id: tb_parent_id.to_string(),
                job_status: "Ready to Order".to_string(),
                design_count: 0,
                date_group_updated: design.date_submitted.to_string(),
                primary_roster_id: design.roster_id.map(str::to_string),
                primary_roster_name: design.roster_name.map(str::to_string),
                thumbnails: Vec::new(),
            });
        job.design_count += 1;
        if job.thumbnails.len() < 4 {
            job.thumbnails.push(design.thumbnail.to_string());
        }
        if design.date_submitted > job.date_group_updated.as_str() {
            job.date_group_updated = design.date_submitted.to_string();
        }
    }

    let mut out: Vec<Job> = jobs.into_values().collect();
    out.sort_by(|a, b| b.date_group_updated.cmp(&a.date_group_updated));
    out
}

/// Group active team-builder designs into rosters
#[must_use]
pub fn grouped_rosters() -> Vec<Roster> {
    let mut rosters: IndexMap<(String, String), Roster> = IndexMap::new();

    for design in team_builder_rows() {
        let (Some(roster_name), Some(tb_parent_id)) = (design.roster_name, design.tb_parent_id)
        else {
            continue;
        };
        let roster = rosters
            .entry((roster_name.to_string(), tb_parent_id.to_string()))
            .or_insert_with(|| Roster {
                roster_id: design.roster_id.unwrap_or_default().to_string(),
                roster_name: roster_name.to_string(),
                player_count: 0,
                linked_job_count: 1,
                thumbnails: Vec::new(),
                tb_parent_id: tb_parent_id.to_string(),
            });
        roster.player_count += 1;
        if roster.thumbnails.len() < 4 {
            roster.thumbnails.push(design.thumbnail.to_string());
        }
    }

    rosters.into_values().collect()
}

/// Order lines for every named player within a job
#[must_use]
pub fn players_for_job(tb_parent_id: &str) -> Vec<Player> {
    DESIGNS
        .iter()
        .filter(|d| d.tb_parent_id == Some(tb_parent_id) && d.player_name.is_some())
        .map(|d| {
            let price = d.unit_price();
            Player {
                player_name: d.player_name.unwrap_or_default().to_string(),
                player_number: d.player_number.unwrap_or_default().to_string(),
                design_id: d.design_id.to_string(),
                thumbnail: d.thumbnail.to_string(),
                status: d.status.as_str().to_string(),
                quantity: 1,
                unit_of_measure: "each".to_string(),
                item_price: price,
                extended_price: price,
                last_ordered_date: None,
                last_updated_date: d.date_submitted.to_string(),
            }
        })
        .collect()
}

/// Look up a grouped job by its team-builder parent id
#[must_use]
pub fn job_by_parent_id(tb_parent_id: &str) -> Option<Job> {
    grouped_jobs().into_iter().find(|j| j.tb_parent_id == tb_parent_id)
}
