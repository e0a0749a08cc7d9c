use serde::{Deserialize, Serialize};

/// Contact block printed at the top of the resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub headline: String,
    #[serde(alias = "profile_url", alias = "linkedin")]
    pub url: String,
    pub email: String,
    pub location: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(alias = "start_date")]
    pub start: String,
    #[serde(alias = "end_date")]
    pub end: String,
}

/// One position held. Dates are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, alias = "name")]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "start_date")]
    pub start: String,
    #[serde(default, alias = "end_date")]
    pub end: String,
    /// Pre-escaped HTML; templates emit it unescaped.
    #[serde(default)]
    pub summary: Option<String>,
    /// Every candidate bullet for this job, in display order.
    #[serde(default)]
    pub accomplishments: Vec<String>,
}

impl Job {
    /// Form title: "title (company)", or whichever half is present.
    pub fn display_title(&self, index: usize) -> String {
        let title = self.title.trim();
        let company = self.company.trim();
        match (title.is_empty(), company.is_empty()) {
            (false, false) => format!("{title} ({company})"),
            (false, true) => title.to_string(),
            (true, false) => company.to_string(),
            (true, true) => format!("Job {}", index + 1),
        }
    }
}

/// A loaded data file. Jobs keep their file order; it is also their identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub skills: Vec<String>,
    pub jobs: Vec<Job>,
}

impl Profile {
    /// A profile holding only jobs, for data files that are a bare job list.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        Profile {
            jobs,
            ..Profile::default()
        }
    }

    pub fn accomplishment_count(&self) -> usize {
        self.jobs.iter().map(|j| j.accomplishments.len()).sum()
    }
}
