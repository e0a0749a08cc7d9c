use std::path::PathBuf;

use thiserror::Error;

/// Every way a resume run can fail. Each stage either succeeds completely or
/// returns one of these; nothing is retried.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid resume data: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("interactive form failed: {0}")]
    Form(String),

    #[error("selection cancelled")]
    Aborted,

    #[error("template {}: {message}", path.display())]
    Template { path: PathBuf, message: String },

    #[error("{0}")]
    Export(String),

    #[error("invalid configuration: {0:#}")]
    Config(#[from] anyhow::Error),
}

impl ResumeError {
    /// Short label for the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ResumeError::Read { .. } => "read",
            ResumeError::Parse { .. } => "parse",
            ResumeError::Form(_) | ResumeError::Aborted => "form",
            ResumeError::Template { .. } => "template",
            ResumeError::Export(_) => "export",
            ResumeError::Config(_) => "config",
        }
    }

    /// What the user can do about it.
    pub fn hint(&self) -> String {
        match self {
            ResumeError::Read { path, .. } => format!(
                "Check that {} exists and is readable from the working directory.",
                path.display()
            ),
            ResumeError::Parse { .. } => {
                "Fix the JSON at the reported line and column, then run again.".to_string()
            }
            ResumeError::Form(_) => {
                "Run again from an interactive terminal, or pass --all to keep every accomplishment."
                    .to_string()
            }
            ResumeError::Aborted => "Nothing was written.".to_string(),
            ResumeError::Template { path, .. } => format!(
                "Check that {} exists and is a valid Handlebars template (or pass --template).",
                path.display()
            ),
            ResumeError::Export(_) => {
                "Make sure Chrome or Chromium is installed, or point CHROME_PATH at it.".to_string()
            }
            ResumeError::Config(_) => "Check the environment variables and .env file.".to_string(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ResumeError::Aborted => 130,
            _ => 1,
        }
    }

    pub fn export(stage: &str, err: impl std::fmt::Display) -> Self {
        ResumeError::Export(format!("{stage}: {err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_file() {
        let err = ResumeError::Read {
            path: PathBuf::from("jobs.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.stage(), "read");
        assert!(err.to_string().contains("jobs.json"));
        assert!(err.hint().contains("working directory"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_export_error_carries_stage_prefix() {
        let err = ResumeError::export("launching browser", "no chrome binary");
        assert_eq!(err.to_string(), "launching browser: no chrome binary");
        assert_eq!(err.stage(), "export");
    }

    #[test]
    fn test_aborted_exit_code() {
        assert_eq!(ResumeError::Aborted.exit_code(), 130);
        assert_eq!(ResumeError::Aborted.stage(), "form");
    }
}
