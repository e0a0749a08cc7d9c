//! Form Builder — one multi-select field per job, every option pre-selected.
//!
//! The form is plain data. Drivers in `form::terminal` present it; the session
//! in `form::session` collects the result. Options are identified by their index
//! within the field, so duplicate accomplishment text stays distinguishable.

use tracing::debug;

use crate::models::{Profile, SelectionSet};

/// One toggleable accomplishment line. The label and value are the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

/// The multi-select control for a single job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectField {
    /// Position of the job in `Profile::jobs`.
    pub job_index: usize,
    pub title: String,
    pub options: Vec<SelectOption>,
}

impl MultiSelectField {
    /// Indices of the options selected by default.
    pub fn default_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }
}

/// All fields, in job order, presented as a single group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub fields: Vec<MultiSelectField>,
}

impl FormSpec {
    pub fn option_count(&self) -> usize {
        self.fields.iter().map(|f| f.options.len()).sum()
    }

    /// The selection produced by submitting the form untouched.
    pub fn default_selection(&self) -> SelectionSet {
        SelectionSet::from_entries(
            self.fields
                .iter()
                .map(|field| {
                    field
                        .options
                        .iter()
                        .filter(|o| o.selected)
                        .map(|o| o.value.clone())
                        .collect()
                })
                .collect(),
        )
    }
}

/// Builds the form from a loaded profile. Reads the profile only.
pub fn build_form(profile: &Profile) -> FormSpec {
    let fields: Vec<MultiSelectField> = profile
        .jobs
        .iter()
        .enumerate()
        .map(|(job_index, job)| MultiSelectField {
            job_index,
            title: job.display_title(job_index),
            options: job
                .accomplishments
                .iter()
                .map(|text| SelectOption {
                    label: text.clone(),
                    value: text.clone(),
                    selected: true,
                })
                .collect(),
        })
        .collect();

    debug!("Built form with {} fields", fields.len());
    FormSpec { fields }
}
