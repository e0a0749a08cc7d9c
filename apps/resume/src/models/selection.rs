/// The accomplishments kept for each job, index-aligned with `Profile::jobs`.
///
/// Only the form session and `FormSpec::default_selection` build one, both from
/// the form's options, so every entry is a verbatim copy of an original
/// accomplishment and each job's entries keep their original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<Vec<String>>,
}

impl SelectionSet {
    pub(crate) fn from_entries(entries: Vec<Vec<String>>) -> Self {
        SelectionSet { entries }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn get(&self, job_index: usize) -> Option<&[String]> {
        self.entries.get(job_index).map(Vec::as_slice)
    }

    /// Total accomplishments kept across every job.
    pub fn kept(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn into_entries(self) -> Vec<Vec<String>> {
        self.entries
    }
}
