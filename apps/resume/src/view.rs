//! View Assembler — merges profile metadata with the user's selection.

use serde::Serialize;
use tracing::debug;

use crate::models::{Education, Header, Job, Profile, SelectionSet};

/// The document handed to the template. Built once per run, after the form is
/// submitted, and consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderView {
    pub header: Header,
    pub education: Education,
    pub skills: Vec<String>,
    pub jobs: Vec<Job>,
}

/// Replaces each job's accomplishments with its selected subset.
///
/// # Panics
/// If `selection` does not have exactly one entry per job. A mismatched
/// selection can only come from a caller bug.
pub fn assemble_view(profile: &Profile, selection: SelectionSet) -> RenderView {
    assert_eq!(
        selection.len(),
        profile.jobs.len(),
        "selection has {} entries but the profile has {} jobs",
        selection.len(),
        profile.jobs.len()
    );

    let jobs: Vec<Job> = profile
        .jobs
        .iter()
        .zip(selection.into_entries())
        .map(|(job, accomplishments)| {
            debug_assert!(
                accomplishments.iter().all(|a| job.accomplishments.contains(a)),
                "selection for '{}' contains text that is not one of its accomplishments",
                job.title
            );
            Job {
                accomplishments,
                ..job.clone()
            }
        })
        .collect();

    debug!("Assembled view with {} jobs", jobs.len());
    RenderView {
        header: profile.header.clone(),
        education: profile.education.clone(),
        skills: profile.skills.clone(),
        jobs,
    }
}
