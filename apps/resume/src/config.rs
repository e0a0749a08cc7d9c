use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_TEMPLATE: &str = "template.html";

/// Runtime configuration loaded from environment variables (and `.env`, if present).
/// Every variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Line-oriented prompts for screen readers instead of the arrow-key multi-select.
    pub accessible: bool,
    pub chrome_path: Option<PathBuf>,
    pub default_template: PathBuf,
    pub pdf_scale: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let pdf_scale = match non_empty(lookup("RESUME_PDF_SCALE")) {
            Some(raw) => {
                let scale = raw
                    .parse::<f64>()
                    .with_context(|| format!("RESUME_PDF_SCALE must be a number, got '{raw}'"))?;
                if !(scale > 0.1 && scale <= 2.0) {
                    bail!("RESUME_PDF_SCALE must be in (0.1, 2.0], got {scale}");
                }
                scale
            }
            None => 1.0,
        };

        Ok(Config {
            accessible: non_empty(lookup("ACCESSIBLE")).is_some_and(|v| is_truthy(&v)),
            chrome_path: non_empty(lookup("CHROME_PATH")).map(PathBuf::from),
            default_template: non_empty(lookup("RESUME_TEMPLATE"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE)),
            pdf_scale,
            rust_log: non_empty(lookup("RUST_LOG")).unwrap_or_else(|| "warn".to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}
