//! PDF export collaborator — prints an HTML document to PDF with headless Chrome.
//!
//! Three scoped resources, released on every exit path by `Drop`:
//! - the intermediate HTML file (`tempfile::NamedTempFile`, deleted on drop),
//!   created in the template's directory so relative links still resolve
//! - the browser process (`headless_chrome::Browser`, killed on drop)
//! - the tab (`TabGuard`, closed on drop before the browser goes away)

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::ResumeError;

#[derive(Debug, Clone)]
pub struct PdfSettings {
    pub chrome_path: Option<PathBuf>,
    pub scale: f64,
}

impl Default for PdfSettings {
    fn default() -> Self {
        PdfSettings {
            chrome_path: None,
            scale: 1.0,
        }
    }
}

struct TabGuard(Arc<Tab>);

impl Drop for TabGuard {
    fn drop(&mut self) {
        if let Err(e) = self.0.close(false) {
            warn!("Failed to close browser tab: {e:#}");
        }
    }
}

/// Writes `html` to a temporary file in `base_dir`, prints it, and writes the
/// PDF to `output`. Returns the number of PDF bytes written.
pub fn export_pdf(
    html: &str,
    base_dir: &Path,
    output: &Path,
    settings: &PdfSettings,
) -> Result<usize, ResumeError> {
    let page = write_intermediate(html, base_dir)?;
    let url = file_url(page.path())?;
    debug!("Intermediate HTML at {url}");

    let pdf = print_url(&url, settings)?;

    fs::write(output, &pdf)
        .map_err(|e| ResumeError::export(&format!("writing {}", output.display()), e))?;
    info!("Wrote {} bytes of PDF to {}", pdf.len(), output.display());
    Ok(pdf.len())
}

fn write_intermediate(html: &str, dir: &Path) -> Result<tempfile::NamedTempFile, ResumeError> {
    let mut page = tempfile::Builder::new()
        .prefix(".resume-")
        .suffix(".html")
        .tempfile_in(dir)
        .map_err(|e| ResumeError::export("creating intermediate html", e))?;
    page.write_all(html.as_bytes())
        .and_then(|_| page.flush())
        .map_err(|e| ResumeError::export("writing intermediate html", e))?;
    Ok(page)
}

fn file_url(path: &Path) -> Result<String, ResumeError> {
    let absolute = path
        .canonicalize()
        .map_err(|e| ResumeError::export("resolving intermediate html", e))?;
    let url = Url::from_file_path(&absolute).map_err(|()| {
        ResumeError::export(
            "resolving intermediate html",
            format!("{} is not an absolute path", absolute.display()),
        )
    })?;
    Ok(url.to_string())
}

fn print_url(url: &str, settings: &PdfSettings) -> Result<Vec<u8>, ResumeError> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .path(settings.chrome_path.clone())
        .build()
        .map_err(|e| ResumeError::export("configuring browser", e))?;

    let browser =
        Browser::new(options).map_err(|e| ResumeError::export("launching browser", e))?;
    let tab = TabGuard(
        browser
            .new_tab()
            .map_err(|e| ResumeError::export("opening tab", e))?,
    );

    tab.0
        .navigate_to(url)
        .and_then(|t| t.wait_until_navigated())
        .map_err(|e| ResumeError::export("navigating to page", e))?;

    tab.0
        .print_to_pdf(Some(print_options(settings)))
        .map_err(|e| ResumeError::export("printing pdf", e))
}

fn print_options(settings: &PdfSettings) -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        scale: Some(settings.scale),
        ..Default::default()
    }
}
