//! Selection Collector — runs a `FormSpec` to completion through a `FormDriver`.
//!
//! Idle → Active → Submitted | Aborted. Toggles are held as a draft until the
//! final confirmation; only `Submitted` yields a `SelectionSet`. Choosing to edit
//! at the confirmation walks the fields again, each pre-filled from the draft.

use tracing::{debug, info, warn};

use crate::errors::ResumeError;
use crate::form::builder::{FormSpec, MultiSelectField};
use crate::models::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Submitted,
    Aborted,
}

/// The answer at the end of a pass over the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Render,
    Edit,
    Cancel,
}

/// Presents form fields to a user. Implement this to swap the terminal UI
/// without touching the session or the pipeline.
pub trait FormDriver {
    /// Shows one field with `current` pre-selected and returns the option
    /// indices left selected, or `None` if the user cancelled.
    fn toggle(
        &mut self,
        field: &MultiSelectField,
        current: &[usize],
        position: usize,
        total: usize,
    ) -> Result<Option<Vec<usize>>, ResumeError>;

    /// Asked after every pass over the fields.
    fn confirm(&mut self, kept: usize, offered: usize) -> Result<Submission, ResumeError>;
}

pub struct FormSession<'a> {
    spec: &'a FormSpec,
    state: SessionState,
}

impl<'a> FormSession<'a> {
    pub fn new(spec: &'a FormSpec) -> Self {
        FormSession {
            spec,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Blocks until the user submits or cancels. Any failure leaves the session
    /// `Aborted` and is returned to the caller.
    pub fn run(&mut self, driver: &mut dyn FormDriver) -> Result<SelectionSet, ResumeError> {
        if self.state != SessionState::Idle {
            return Err(ResumeError::Form(format!(
                "form session already {:?}",
                self.state
            )));
        }
        self.state = SessionState::Active;

        match self.collect(driver) {
            Ok(selection) => {
                self.state = SessionState::Submitted;
                info!(
                    "Form submitted: kept {} of {} accomplishments",
                    selection.kept(),
                    self.spec.option_count()
                );
                Ok(selection)
            }
            Err(err) => {
                self.state = SessionState::Aborted;
                warn!("Form session aborted: {err}");
                Err(err)
            }
        }
    }

    fn collect(&self, driver: &mut dyn FormDriver) -> Result<SelectionSet, ResumeError> {
        let total = self.spec.fields.len();
        let mut draft: Vec<Vec<usize>> = self
            .spec
            .fields
            .iter()
            .map(MultiSelectField::default_indices)
            .collect();

        loop {
            for (position, field) in self.spec.fields.iter().enumerate() {
                let chosen = driver
                    .toggle(field, &draft[position], position, total)?
                    .ok_or(ResumeError::Aborted)?;
                debug!("{}: kept {}/{}", field.title, chosen.len(), field.options.len());
                draft[position] = chosen;
            }

            let kept: usize = draft.iter().map(Vec::len).sum();
            match driver.confirm(kept, self.spec.option_count())? {
                Submission::Render => return capture(self.spec, draft),
                Submission::Edit => debug!("Editing selections again"),
                Submission::Cancel => return Err(ResumeError::Aborted),
            }
        }
    }
}

/// Turns per-field option indices into accomplishment text, in option order.
fn capture(spec: &FormSpec, draft: Vec<Vec<usize>>) -> Result<SelectionSet, ResumeError> {
    let mut entries = Vec::with_capacity(spec.fields.len());

    for (field, mut indices) in spec.fields.iter().zip(draft) {
        indices.sort_unstable();
        indices.dedup();

        let mut kept = Vec::with_capacity(indices.len());
        for index in indices {
            let option = field.options.get(index).ok_or_else(|| {
                ResumeError::Form(format!(
                    "option {index} out of range for '{}' ({} options)",
                    field.title,
                    field.options.len()
                ))
            })?;
            kept.push(option.value.clone());
        }
        entries.push(kept);
    }

    Ok(SelectionSet::from_entries(entries))
}
