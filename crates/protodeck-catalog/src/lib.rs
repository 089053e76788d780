//! Protodeck Catalog - fixed design data and derived groupings
//!
//! A read-only catalog of submitted designs plus the pure derivations the
//! prototype screens render:
//! - `grouped_jobs` / `grouped_rosters` collapse designs into order groups
//! - `players_for_job` expands a job into per-player order lines
//!
//! Nothing here is cached or mutated; every grouping is recomputed per call.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod design;
pub mod grouping;

pub use design::{design_by_id, Design, DesignStatus, DESIGNS};
pub use grouping::{
    grouped_jobs, grouped_rosters, job_by_parent_id, players_for_job, Job, Player, Roster,
};
