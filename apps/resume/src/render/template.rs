//! Template collaborator — renders a `RenderView` to HTML with Handlebars.
//!
//! Text fields go through Handlebars' HTML escaping. `summary` is pre-escaped
//! HTML and templates emit it with triple braces: `{{{summary}}}`.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use tracing::info;

use crate::errors::ResumeError;
use crate::view::RenderView;

const TEMPLATE_NAME: &str = "resume";

pub fn render_html(template_path: &Path, view: &RenderView) -> Result<String, ResumeError> {
    let source = fs::read_to_string(template_path).map_err(|e| ResumeError::Template {
        path: template_path.to_path_buf(),
        message: format!("cannot read template: {e}"),
    })?;

    let html = render_source(&source, view).map_err(|message| ResumeError::Template {
        path: template_path.to_path_buf(),
        message,
    })?;

    info!(
        "Rendered {} bytes of HTML from {}",
        html.len(),
        template_path.display()
    );
    Ok(html)
}

fn render_source(source: &str, view: &RenderView) -> Result<String, String> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(TEMPLATE_NAME, source)
        .map_err(|e| format!("parse error: {e}"))?;
    handlebars
        .render(TEMPLATE_NAME, view)
        .map_err(|e| format!("render error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, Header, Job};

    fn make_view() -> RenderView {
        RenderView {
            header: Header {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Header::default()
            },
            education: Education::default(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            jobs: vec![Job {
                company: "R&D Labs".to_string(),
                title: "Director".to_string(),
                start: "2022".to_string(),
                end: "Present".to_string(),
                summary: Some("<strong>Clinical</strong> notes".to_string()),
                accomplishments: vec!["X".to_string(), "Z".to_string()],
            }],
        }
    }

    #[test]
    fn test_renders_fields_and_lists() {
        let html = render_source(
            "<h1>{{header.name}}</h1>{{#each jobs}}<ul>{{#each accomplishments}}<li>{{this}}</li>{{/each}}</ul>{{/each}}",
            &make_view(),
        )
        .unwrap();
        assert_eq!(html, "<h1>Ada Lovelace</h1><ul><li>X</li><li>Z</li></ul>");
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let html = render_source("{{#each jobs}}{{company}}{{/each}}", &make_view()).unwrap();
        assert_eq!(html, "R&amp;D Labs");
    }

    #[test]
    fn test_summary_passes_through_unescaped() {
        let html = render_source("{{#each jobs}}{{{summary}}}{{/each}}", &make_view()).unwrap();
        assert_eq!(html, "<strong>Clinical</strong> notes");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = render_source("{{#each jobs}}x{{/if}}", &make_view()).unwrap_err();
        assert!(err.starts_with("parse error"), "got {err}");
    }

    #[test]
    fn test_missing_template_file_is_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("template.html");

        match render_html(&missing, &make_view()) {
            Err(ResumeError::Template { path, message }) => {
                assert_eq!(path, missing);
                assert!(message.contains("cannot read template"));
            }
            other => panic!("expected TemplateError, got {other:?}"),
        }
    }

    #[test]
    fn test_demo_template_renders_demo_profile() {
        let profile =
            crate::loader::parse_profile(include_str!("../../demos/profile.json")).unwrap();
        let view = crate::view::assemble_view(
            &profile,
            crate::form::build_form(&profile).default_selection(),
        );

        let html = render_source(include_str!("../../demos/template.html"), &view).unwrap();
        assert!(html.contains("<h1>Jordan Rivera</h1>"));
        assert!(html.contains("<em>clinical notes</em>"), "summary must stay unescaped");
        assert!(html.contains("Negotiated 20% cost-reduction"));
    }

    #[test]
    fn test_render_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.html");
        fs::write(&path, "{{#each skills}}[{{this}}]{{/each}}").unwrap();

        assert_eq!(render_html(&path, &make_view()).unwrap(), "[Rust][Go]");
    }
}
