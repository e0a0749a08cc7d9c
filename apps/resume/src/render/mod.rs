// Renderer Adapter: RenderView → HTML (Handlebars) → PDF (headless Chrome).
// Collaborator failures come back as TemplateError / ExportError with a stage prefix.

pub mod output;
pub mod pdf;
pub mod progress;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ResumeError;
use crate::view::RenderView;

pub use output::derive_output_path;
pub use pdf::PdfSettings;

/// Where a render pass reads its template and writes its files.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTarget {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Also keep the rendered HTML here.
    pub html_copy: Option<PathBuf>,
}

/// Turns an assembled view into a document on disk.
pub trait Renderer {
    fn render(&self, view: &RenderView, target: &RenderTarget) -> Result<PathBuf, ResumeError>;
}

pub struct ChromeRenderer {
    settings: PdfSettings,
}

impl ChromeRenderer {
    pub fn new(settings: PdfSettings) -> Self {
        ChromeRenderer { settings }
    }
}

impl Renderer for ChromeRenderer {
    fn render(&self, view: &RenderView, target: &RenderTarget) -> Result<PathBuf, ResumeError> {
        let spinner = progress::Spinner::start("Rendering template");
        let html = template::render_html(&target.template, view)?;

        if let Some(copy) = &target.html_copy {
            fs::write(copy, &html)
                .map_err(|e| ResumeError::export(&format!("writing {}", copy.display()), e))?;
            info!("Kept rendered HTML at {}", copy.display());
        }

        spinner.set_message("Printing PDF");
        pdf::export_pdf(&html, template_dir(&target.template), &target.output, &self.settings)?;
        Ok(target.output.clone())
    }
}

/// Relative asset links in the template resolve against this directory.
fn template_dir(template: &Path) -> &Path {
    match template.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
