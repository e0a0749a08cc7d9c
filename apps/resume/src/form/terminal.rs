use std::io;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use crate::errors::ResumeError;
use crate::form::builder::MultiSelectField;
use crate::form::session::{FormDriver, Submission};

/// Picks the multi-select UI, or the line-oriented one for screen readers.
pub fn driver_for(accessible: bool) -> Box<dyn FormDriver> {
    if accessible {
        Box::new(AccessibleDriver::new())
    } else {
        Box::new(TerminalDriver::new())
    }
}

fn form_error(err: dialoguer::Error) -> ResumeError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => ResumeError::Aborted,
        other => ResumeError::Form(other.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Arrow keys + space to toggle
// ────────────────────────────────────────────────────────────────────────────

pub struct TerminalDriver {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalDriver {
    pub fn new() -> Self {
        TerminalDriver {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl FormDriver for TerminalDriver {
    fn toggle(
        &mut self,
        field: &MultiSelectField,
        current: &[usize],
        position: usize,
        total: usize,
    ) -> Result<Option<Vec<usize>>, ResumeError> {
        if field.options.is_empty() {
            self.term
                .write_line(&format!(
                    "{} {} {}",
                    style(format!("[{}/{}]", position + 1, total)).dim(),
                    style(&field.title).bold(),
                    style("(no accomplishments)").dim()
                ))
                .map_err(|e| ResumeError::Form(e.to_string()))?;
            return Ok(Some(vec![]));
        }

        let defaults: Vec<bool> = (0..field.options.len())
            .map(|i| current.contains(&i))
            .collect();
        MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("[{}/{}] {}", position + 1, total, field.title))
            .items(&field.labels())
            .defaults(&defaults)
            .interact_on_opt(&self.term)
            .map_err(form_error)
    }

    fn confirm(&mut self, kept: usize, offered: usize) -> Result<Submission, ResumeError> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(format!("Keeping {kept} of {offered} accomplishments"))
            .items(&["Render", "Edit selections", "Cancel"])
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(form_error)?;
        Ok(match choice {
            Some(0) => Submission::Render,
            Some(1) => Submission::Edit,
            _ => Submission::Cancel,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accessible mode: numbered lists and typed answers
// ────────────────────────────────────────────────────────────────────────────

pub struct AccessibleDriver {
    term: Term,
}

impl AccessibleDriver {
    pub fn new() -> Self {
        AccessibleDriver {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) -> Result<(), ResumeError> {
        self.term
            .write_line(text)
            .map_err(|e| ResumeError::Form(e.to_string()))
    }

    fn ask(&self, prompt: &str) -> Result<String, ResumeError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(form_error)
    }
}

impl FormDriver for AccessibleDriver {
    fn toggle(
        &mut self,
        field: &MultiSelectField,
        current: &[usize],
        position: usize,
        total: usize,
    ) -> Result<Option<Vec<usize>>, ResumeError> {
        self.line(&format!("Job {} of {}: {}", position + 1, total, field.title))?;
        if field.options.is_empty() {
            self.line("No accomplishments.")?;
            return Ok(Some(vec![]));
        }
        for (i, option) in field.options.iter().enumerate() {
            let mark = if current.contains(&i) { "kept" } else { "dropped" };
            self.line(&format!("{}. {} ({mark})", i + 1, option.label))?;
        }

        loop {
            let answer = self.ask(
                "Numbers to keep, separated by commas or spaces (blank keeps the current choice, 'all', 'none', 'q' cancels)",
            )?;
            if answer.trim().eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match parse_keep_list(&answer, current, field.options.len()) {
                Ok(indices) => return Ok(Some(indices)),
                Err(message) => self.line(&message)?,
            }
        }
    }

    fn confirm(&mut self, kept: usize, offered: usize) -> Result<Submission, ResumeError> {
        loop {
            let answer = self.ask(&format!(
                "Keeping {kept} of {offered} accomplishments. Render, edit, or cancel? (r/e/c)"
            ))?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "" | "r" | "render" | "y" | "yes" => return Ok(Submission::Render),
                "e" | "edit" => return Ok(Submission::Edit),
                "c" | "cancel" | "n" | "no" | "q" => return Ok(Submission::Cancel),
                _ => self.line("Please answer r, e or c.")?,
            }
        }
    }
}

/// Parses a typed answer of 1-based option numbers into 0-based indices.
/// Blank keeps `current`; `all` and `none` do what they say.
pub fn parse_keep_list(
    answer: &str,
    current: &[usize],
    option_count: usize,
) -> Result<Vec<usize>, String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(current.to_vec());
    }
    if answer.eq_ignore_ascii_case("all") {
        return Ok((0..option_count).collect());
    }
    if answer.eq_ignore_ascii_case("none") {
        return Ok(vec![]);
    }

    let mut indices = Vec::new();
    for token in answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let number: usize = token
            .parse()
            .map_err(|_| format!("'{token}' is not a number."))?;
        if number == 0 || number > option_count {
            return Err(format!("{number} is not between 1 and {option_count}."));
        }
        indices.push(number - 1);
    }
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}
