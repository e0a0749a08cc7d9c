//! Resume pipeline — load → build form → run form → assemble view → render.
//!
//! Each step is a blocking call that either returns its result or fails the
//! run. The terminal and the browser sit behind `FormDriver` and `Renderer`.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::errors::ResumeError;
use crate::form::{build_form, FormDriver, FormSession};
use crate::loader::load_profile;
use crate::render::{derive_output_path, RenderTarget, Renderer};
use crate::view::assemble_view;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_file: PathBuf,
    pub template: PathBuf,
    /// Overrides the name derived from `data_file`.
    pub output: Option<PathBuf>,
    /// Skip the form and keep every accomplishment.
    pub select_all: bool,
    pub html_copy: Option<PathBuf>,
}

/// Runs one resume generation. Returns the path of the written PDF.
pub fn run(
    options: &RunOptions,
    driver: &mut dyn FormDriver,
    renderer: &dyn Renderer,
) -> Result<PathBuf, ResumeError> {
    // Step 1: Load
    let profile = load_profile(&options.data_file)?;

    // Step 2: Build the form
    let form = build_form(&profile);

    // Step 3: Collect selections
    let selection = if options.select_all {
        info!("Keeping all {} accomplishments", form.option_count());
        form.default_selection()
    } else {
        let mut session = FormSession::new(&form);
        let result = session.run(driver);
        debug!("Form session ended {:?}", session.state());
        result?
    };

    // Step 4: Assemble
    let view = assemble_view(&profile, selection);

    // Step 5: Render
    let target = RenderTarget {
        template: options.template.clone(),
        output: options
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(&options.data_file)),
        html_copy: options.html_copy.clone(),
    };
    renderer.render(&view, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;

    use crate::form::session::tests::ScriptedDriver;
    use crate::view::RenderView;

    /// Records what it was asked to render instead of launching a browser.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(RenderView, RenderTarget)>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(
            &self,
            view: &RenderView,
            target: &RenderTarget,
        ) -> Result<PathBuf, ResumeError> {
            self.calls.borrow_mut().push((view.clone(), target.clone()));
            Ok(target.output.clone())
        }
    }

    const TWO_JOBS: &str = r#"{
        "header": {"name": "Ada Lovelace", "email": "ada@example.com"},
        "education": {"school": "Home", "degree": "Mathematics"},
        "skills": ["Rust"],
        "jobs": [
            {"company": "Daily", "title": "Director", "start": "2022", "end": "Present",
             "summary": "<b>notes</b>", "accomplishments": ["X", "Y", "Z"]},
            {"company": "ConvertKit", "title": "Manager", "accomplishments": ["P", "Q"]}
        ]
    }"#;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("profile-")
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn options_for(data_file: PathBuf) -> RunOptions {
        RunOptions {
            data_file,
            template: PathBuf::from("template.html"),
            output: None,
            select_all: false,
            html_copy: None,
        }
    }

    #[test]
    fn test_deselect_one_accomplishment_end_to_end() {
        let file = write_fixture(TWO_JOBS);
        let options = options_for(file.path().to_path_buf());
        // Job A: drop "Y" (index 1). Job B: keep everything.
        let mut driver = ScriptedDriver::new(vec![Some(vec![0, 2]), Some(vec![0, 1])]);
        let renderer = RecordingRenderer::default();

        let written = run(&options, &mut driver, &renderer).unwrap();

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1, "renderer called exactly once");
        let (view, target) = &calls[0];

        assert_eq!(view.jobs[0].accomplishments, vec!["X", "Z"]);
        assert_eq!(view.jobs[1].accomplishments, vec!["P", "Q"]);
        assert_eq!(view.jobs[0].title, "Director");
        assert_eq!(view.jobs[0].summary.as_deref(), Some("<b>notes</b>"));
        assert_eq!(view.jobs[1].company, "ConvertKit");
        assert_eq!(view.header.name, "Ada Lovelace");
        assert_eq!(view.skills, vec!["Rust"]);

        assert_eq!(target.template, PathBuf::from("template.html"));
        assert_eq!(written, target.output);
        let expected_name = derive_output_path(file.path());
        assert_eq!(target.output, expected_name);
        assert!(target.output.to_string_lossy().ends_with(".pdf"));
    }

    #[test]
    fn test_select_all_skips_form() {
        let file = write_fixture(TWO_JOBS);
        let mut options = options_for(file.path().to_path_buf());
        options.select_all = true;
        options.output = Some(PathBuf::from("out/custom.pdf"));
        let mut driver = ScriptedDriver::new(vec![]);
        let renderer = RecordingRenderer::default();

        run(&options, &mut driver, &renderer).unwrap();

        assert!(driver.fields_seen.is_empty(), "form must not be presented");
        let calls = renderer.calls.borrow();
        assert_eq!(calls[0].0.jobs[0].accomplishments, vec!["X", "Y", "Z"]);
        assert_eq!(calls[0].1.output, PathBuf::from("out/custom.pdf"));
    }

    #[test]
    fn test_missing_file_never_presents_form() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_for(dir.path().join("missing.json"));
        let mut driver = ScriptedDriver::new(vec![]);
        let renderer = RecordingRenderer::default();

        let err = run(&options, &mut driver, &renderer).unwrap_err();

        assert!(matches!(err, ResumeError::Read { .. }), "got {err:?}");
        assert_ne!(err.exit_code(), 0);
        assert!(driver.fields_seen.is_empty());
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn test_malformed_json_fails_before_form() {
        let file = write_fixture(r#"{"jobs": [}"#);
        let options = options_for(file.path().to_path_buf());
        let mut driver = ScriptedDriver::new(vec![]);
        let renderer = RecordingRenderer::default();

        let err = run(&options, &mut driver, &renderer).unwrap_err();

        assert!(matches!(err, ResumeError::Parse { .. }), "got {err:?}");
        assert!(driver.fields_seen.is_empty());
    }

    #[test]
    fn test_cancelled_form_renders_nothing() {
        let file = write_fixture(TWO_JOBS);
        let options = options_for(file.path().to_path_buf());
        let mut driver = ScriptedDriver::new(vec![None, None]);
        let renderer = RecordingRenderer::default();

        let err = run(&options, &mut driver, &renderer).unwrap_err();

        assert!(matches!(err, ResumeError::Aborted));
        assert!(renderer.calls.borrow().is_empty());
    }
}
