mod cli;

use std::io::{self, IsTerminal, Write};

use clap::Parser;
use thiserror::Error;

use portfolio_lens::input::{InputError, load_dataset};
use portfolio_lens::logging::{LogConfig, init_logging};
use portfolio_lens::model::ProjectsData;
use portfolio_lens::report::json::{render_list_json, render_project_json, render_stats_json};
use portfolio_lens::report::text::{render_list_text, render_project_text, render_stats_text};
use portfolio_lens::report::{ProjectCard, build_list_view, build_stats_view, find_project};

use crate::cli::{Cli, Command, ListArgs, OutputFormat};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("no project with id {0:?}")]
    NotFound(String),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_flags(cli.verbose, cli.quiet);
    log_config.format = cli.log_format.into();
    log_config.with_ansi = io::stderr().is_terminal();
    init_logging(&log_config).map_err(CliError::Logging)?;

    let data = load_dataset(&cli.data)?;
    let rendered = match &cli.command {
        Command::List(args) => render_list(&data, args, cli.format)?,
        Command::Stats => {
            let view = build_stats_view(&data);
            match cli.format {
                OutputFormat::Text => render_stats_text(&view),
                OutputFormat::Json => render_stats_json(&view)?,
            }
        }
        Command::Show { id } => {
            let project = find_project(&data, id).ok_or_else(|| CliError::NotFound(id.clone()))?;
            let card = ProjectCard::new(project, None);
            match cli.format {
                OutputFormat::Text => render_project_text(&card),
                OutputFormat::Json => render_project_json(&card)?,
            }
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn render_list(
    data: &ProjectsData,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String, CliError> {
    let view = build_list_view(data, args.filter_spec(), args.sort_key(), args.featured);
    Ok(match format {
        OutputFormat::Text => render_list_text(&view),
        OutputFormat::Json => render_list_json(&view)?,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
