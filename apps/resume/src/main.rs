mod config;
mod errors;
mod form;
mod loader;
mod models;
mod pipeline;
mod render;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::ResumeError;
use crate::form::driver_for;
use crate::pipeline::RunOptions;
use crate::render::{ChromeRenderer, PdfSettings};

/// Pick the accomplishments to keep for each job and print the resume to PDF.
#[derive(Debug, Parser)]
#[command(name = "resume", version, about)]
struct Cli {
    /// JSON data file: a full profile or a bare list of jobs
    data_file: PathBuf,

    /// Handlebars HTML template [default: template.html, or $RESUME_TEMPLATE]
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// PDF to write [default: <data file name>.pdf]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep every accomplishment without showing the form
    #[arg(long)]
    all: bool,

    /// Also write the rendered HTML to this file
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Plain prompts for screen readers (same as ACCESSIBLE=1)
    #[arg(long)]
    accessible: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!(
                "{} Wrote {}",
                style("✓").green().bold(),
                style(output.display()).bold()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{} {} failed: {}",
                style("✗").red().bold(),
                style(err.stage()).red().bold(),
                err
            );
            eprintln!("  {}", style(err.hint()).dim());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf, ResumeError> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("resume v{}", env!("CARGO_PKG_VERSION"));

    let options = RunOptions {
        data_file: cli.data_file,
        template: cli.template.unwrap_or(config.default_template),
        output: cli.output,
        select_all: cli.all,
        html_copy: cli.html,
    };

    let mut driver = driver_for(cli.accessible || config.accessible);
    let renderer = ChromeRenderer::new(PdfSettings {
        chrome_path: config.chrome_path,
        scale: config.pdf_scale,
    });

    pipeline::run(&options, driver.as_mut(), &renderer)
}
