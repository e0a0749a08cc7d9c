//! Data Loader — reads a resume data file into a `Profile`.
//!
//! Accepts either a full profile object or a bare JSON array of jobs. Loading is
//! all-or-nothing: any read or parse failure returns an error and no profile.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::ResumeError;
use crate::models::{Job, Profile};

pub fn load_profile(path: &Path) -> Result<Profile, ResumeError> {
    let raw = fs::read_to_string(path).map_err(|source| ResumeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let profile = parse_profile(&raw).map_err(|source| ResumeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {} jobs ({} accomplishments) from {}",
        profile.jobs.len(),
        profile.accomplishment_count(),
        path.display()
    );
    Ok(profile)
}

/// Parses data file contents. The shape is chosen up front from the first
/// significant character so serde reports line/column for the shape that was meant.
/// A leading byte-order mark is ignored.
pub fn parse_profile(raw: &str) -> Result<Profile, serde_json::Error> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if raw.trim_start().starts_with('[') {
        debug!("Data file is a bare job list");
        let jobs: Vec<Job> = serde_json::from_str(raw)?;
        Ok(Profile::from_jobs(jobs))
    } else {
        serde_json::from_str(raw)
    }
}
