use std::process::ExitCode;

use clap::Parser as _;
use clap::error::ErrorKind;
use grader::cli::{Args, Config, Source};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => return fail(error.render()),
    };
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(error) => return fail(error),
    };
    tracing::debug!(?config);

    match run(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => fail(format!("{error:#}")),
    }
}

fn run(config: &Config) -> anyhow::Result<String> {
    let presence = match &config.source {
        Source::File(html) => grader::check_html_file(html, &config.checks)?,
        Source::Url(url) => grader::check_url(url, &config.checks)?,
    };
    grader::output::to_json(&presence)
}

/// Every fatal condition ends here: one diagnostic on stdout, no JSON, exit status 1.
fn fail(diagnostic: impl std::fmt::Display) -> ExitCode {
    println!("{diagnostic}");
    ExitCode::FAILURE
}
